use crate::objects::TokenTree;

/// One top-level statement's tokens. `terminated` records whether the
/// statement was closed by a semicolon or ran to end-of-input.
#[derive(Clone, Debug, PartialEq)]
pub struct RawStatement {
    pub tokens: Vec<TokenTree>,
    pub terminated: bool,
}

/// Splits a grouped token tree into statements at top-level semicolons.
/// The semicolon itself is dropped from the statement content; semicolons
/// inside parenthesis groups never split. Empty statements are skipped.
pub fn split_statements(nodes: Vec<TokenTree>) -> Vec<RawStatement> {
    let mut statements = Vec::new();
    let mut buffer = Vec::new();

    for node in nodes {
        if node.is_punctuation(";") {
            if !buffer.is_empty() {
                statements.push(RawStatement {
                    tokens: std::mem::take(&mut buffer),
                    terminated: true,
                });
            }
        } else {
            buffer.push(node);
        }
    }

    if !buffer.is_empty() {
        statements.push(RawStatement {
            tokens: buffer,
            terminated: false,
        });
    }
    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::group_parentheses;
    use crate::tokenizer::{SqlTokenizer, Token, TokenKind};

    fn split(sql: &str) -> Result<Vec<RawStatement>, Box<dyn std::error::Error>> {
        Ok(split_statements(group_parentheses(SqlTokenizer::tokenize(
            sql,
        )?)?))
    }

    fn flatten(nodes: &[TokenTree], tokens: &mut Vec<Token>) {
        for node in nodes {
            match node {
                TokenTree::Token(token) => tokens.push(token.clone()),
                TokenTree::Parenthesis(children) => flatten(children, tokens),
            }
        }
    }

    #[test]
    fn test_splits_in_source_order() -> Result<(), Box<dyn std::error::Error>> {
        let statements = split("SET a = 1; CREATE TABLE t (x INTEGER); SET b TO 2")?;

        assert_eq!(3, statements.len());
        assert!(statements[0].tokens[0].matches_keyword("SET"));
        assert!(statements[1].tokens[0].matches_keyword("CREATE"));
        assert!(statements[2].tokens[0].matches_keyword("SET"));

        assert!(statements[0].terminated);
        assert!(statements[1].terminated);
        assert!(!statements[2].terminated);
        Ok(())
    }

    #[test]
    fn test_empty_statements_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let statements = split(";;  SET a = 1;  ; ;")?;

        assert_eq!(1, statements.len());
        assert!(statements[0].terminated);
        Ok(())
    }

    //Concatenating the split statements, semicolon end markers reinserted,
    //reconstructs the original non-whitespace token sequence
    #[test]
    fn test_splitting_is_a_partition() -> Result<(), Box<dyn std::error::Error>> {
        let sql = "SET a = 1; CREATE TABLE t (x INTEGER, y VARCHAR(100)); SELECT 1";
        let tokens = SqlTokenizer::tokenize(sql)?;

        let expected: Vec<Token> = tokens
            .iter()
            .filter(|t| !t.is_whitespace())
            .cloned()
            .collect();

        let mut reconstructed = Vec::new();
        for statement in split_statements(group_parentheses(tokens)?) {
            flatten(&statement.tokens, &mut reconstructed);
            if statement.terminated {
                reconstructed.push(Token::new(TokenKind::Punctuation, ";"));
            }
        }

        assert_eq!(expected, reconstructed);
        Ok(())
    }

    #[test]
    fn test_semicolon_inside_parens_does_not_split() -> Result<(), Box<dyn std::error::Error>> {
        let statements = split("CREATE TABLE t (a INTEGER CHECK (a > 0); b TEXT)")?;

        //The inner semicolon is bogus SQL but it must not cut the statement
        assert_eq!(1, statements.len());
        Ok(())
    }
}
