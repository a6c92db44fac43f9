use super::{split_on_commas, MalformedStatementError};
use crate::objects::{CreateType, Statement, TokenTree};

//CREATE TYPE <name> AS ENUM ('label' [, 'label']*)
pub(super) fn parse_create_type(nodes: &[TokenTree]) -> Result<Statement, MalformedStatementError> {
    let name = nodes
        .iter()
        .filter(|node| !node.is_comment())
        .skip_while(|node| !node.matches_keyword("TYPE"))
        .nth(1)
        .and_then(TokenTree::as_token)
        .filter(|token| token.is_word())
        .ok_or(MalformedStatementError::TypeMissingName)?;

    let group = nodes
        .iter()
        .skip_while(|node| !node.matches_keyword("ENUM"))
        .find(|node| node.is_parenthesis())
        .ok_or_else(|| MalformedStatementError::TypeMissingLabels(name.text.clone()))?;

    let mut enum_labels = Vec::new();
    for segment in split_on_commas(group.inner()) {
        let label = segment
            .iter()
            .filter_map(TokenTree::as_token)
            .find(|token| !token.is_comment());
        if let Some(label) = label {
            enum_labels.push(label.unquoted_text());
        }
    }

    debug!("Parsed CREATE TYPE {} with {} labels", name.text, enum_labels.len());
    Ok(Statement::CreateType(CreateType {
        name: name.text.clone(),
        enum_labels,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DdlParser;

    fn parse_one(sql: &str) -> Result<CreateType, Box<dyn std::error::Error>> {
        let mut statements = DdlParser::parse(sql)?;
        assert_eq!(1, statements.len());
        match statements.remove(0) {
            Statement::CreateType(create_type) => Ok(create_type),
            other => panic!("expected a CREATE TYPE statement, got {:?}", other),
        }
    }

    #[test]
    fn test_create_type_statement() -> Result<(), Box<dyn std::error::Error>> {
        let create_type = parse_one("CREATE TYPE FLUENCY AS ENUM ('basic', 'intermediate');")?;

        assert_eq!("FLUENCY", create_type.name);
        assert_eq!(vec!["basic", "intermediate"], create_type.enum_labels);
        Ok(())
    }

    #[test]
    fn test_labels_keep_source_order() -> Result<(), Box<dyn std::error::Error>> {
        let create_type = parse_one(
            "CREATE TYPE FLUENCY AS ENUM ('basic', 'intermediate', 'advanced', 'native');",
        )?;

        assert_eq!(
            vec!["basic", "intermediate", "advanced", "native"],
            create_type.enum_labels
        );
        Ok(())
    }

    #[test]
    fn test_create_type_without_labels_fails() {
        let result = DdlParser::parse("CREATE TYPE FLUENCY AS ENUM;");

        assert!(result.is_err());
    }
}
