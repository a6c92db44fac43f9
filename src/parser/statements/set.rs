use super::MalformedStatementError;
use crate::objects::{Set, Statement, TokenTree};

//Handles both spellings: SET <name> = <value> and SET <name> TO <value>
pub(super) fn parse_set(nodes: &[TokenTree]) -> Result<Statement, MalformedStatementError> {
    let mut tokens = nodes
        .iter()
        .filter_map(TokenTree::as_token)
        .filter(|token| !token.is_comment());

    //The SET keyword itself, already matched by the dispatcher
    tokens.next();

    let name = tokens
        .next()
        .filter(|token| token.is_word())
        .ok_or(MalformedStatementError::SetMissingName)?;

    let assignment = tokens
        .next()
        .ok_or_else(|| MalformedStatementError::SetMissingAssignment(name.text.clone()))?;
    if !assignment.is_operator("=") && !assignment.matches_keyword("TO") {
        return Err(MalformedStatementError::SetMissingAssignment(
            name.text.clone(),
        ));
    }

    let value = tokens
        .next()
        .ok_or_else(|| MalformedStatementError::SetMissingValue(name.text.clone()))?;

    debug!("Parsed SET {}", name.text);
    Ok(Statement::Set(Set {
        name: name.text.clone(),
        value: value.unquoted_text(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DdlParser;

    fn parse_one(sql: &str) -> Result<Set, Box<dyn std::error::Error>> {
        let mut statements = DdlParser::parse(sql)?;
        assert_eq!(1, statements.len());
        match statements.remove(0) {
            Statement::Set(set) => Ok(set),
            other => panic!("expected a SET statement, got {:?}", other),
        }
    }

    #[test]
    fn test_set_statement() -> Result<(), Box<dyn std::error::Error>> {
        let set = parse_one("SET search_path = 'cover_art_archive';")?;

        assert_eq!("search_path", set.name);
        assert_eq!("cover_art_archive", set.value);
        Ok(())
    }

    #[test]
    fn test_set_statement_without_quotes() -> Result<(), Box<dyn std::error::Error>> {
        let set = parse_one("SET search_path = cover_art_archive;")?;

        assert_eq!("search_path", set.name);
        assert_eq!("cover_art_archive", set.value);
        Ok(())
    }

    #[test]
    fn test_set_statement_with_to() -> Result<(), Box<dyn std::error::Error>> {
        let set = parse_one("SET search_path TO 'cover_art_archive';")?;

        assert_eq!("search_path", set.name);
        assert_eq!("cover_art_archive", set.value);
        Ok(())
    }

    #[test]
    fn test_set_without_value_fails() {
        let result = DdlParser::parse("SET search_path =;");

        assert!(result.is_err());
    }

    #[test]
    fn test_set_without_assignment_fails() {
        let result = DdlParser::parse("SET search_path;");

        assert!(result.is_err());
    }
}
