//! Top level of the DDL parsing engine: tokenize, regroup parentheses,
//! split into statements, then classify each statement into a typed object.

mod grouper;
pub use grouper::group_parentheses;
pub use grouper::UnbalancedParenthesesError;

mod splitter;
pub use splitter::split_statements;
pub use splitter::RawStatement;

mod statements;
pub use statements::MalformedStatementError;

use crate::objects::Statement;
use crate::tokenizer::{SqlTokenizer, TokenizerError};
use std::vec::IntoIter;
use thiserror::Error;

pub struct DdlParser {}

impl DdlParser {
    /// Convenience wrapper over `parse_statements` that stops at the first
    /// malformed statement.
    pub fn parse(input: &str) -> Result<Vec<Statement>, DdlParserError> {
        let mut parsed = Vec::new();
        for statement in DdlParser::parse_statements(input)? {
            parsed.push(statement?);
        }
        Ok(parsed)
    }

    /// Parses up front to the raw statement boundaries, then classifies
    /// lazily: a malformed statement surfaces as an `Err` item without
    /// aborting the statements after it.
    pub fn parse_statements(input: &str) -> Result<Statements, DdlParserError> {
        //Tokenize it
        let tokens = SqlTokenizer::tokenize(input)?;

        //Rebuild the parenthesis nesting
        let grouped = group_parentheses(tokens)?;

        //Split it, classification happens per statement on consumption
        let raw = split_statements(grouped);
        debug!("Split input into {} statements", raw.len());
        Ok(Statements {
            raw: raw.into_iter(),
        })
    }
}

/// Statement sequence in source order, classifying each statement as it is
/// consumed.
pub struct Statements {
    raw: IntoIter<RawStatement>,
}

impl Iterator for Statements {
    type Item = Result<Statement, MalformedStatementError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next().map(statements::classify)
    }
}

#[derive(Debug, Error)]
pub enum DdlParserError {
    #[error(transparent)]
    TokenizeError(#[from] TokenizerError),
    #[error(transparent)]
    UnbalancedParentheses(#[from] UnbalancedParenthesesError),
    #[error(transparent)]
    MalformedStatement(#[from] MalformedStatementError),
}
