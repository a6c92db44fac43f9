//! Statement classification: inspect the leading keywords and hand off to
//! the matching extractor. Shapes outside the recognized set fall through
//! to `Statement::Unrecognized` instead of failing, since schema dumps are
//! full of statements a structural extractor can legitimately skip.

mod create_table;
mod create_type;
mod set;

use self::create_table::parse_create_table;
use self::create_type::parse_create_type;
use self::set::parse_set;
use super::splitter::RawStatement;
use crate::objects::{Statement, TokenTree, Unrecognized};
use thiserror::Error;

pub(super) fn classify(raw: RawStatement) -> Result<Statement, MalformedStatementError> {
    let mut leading = raw.tokens.iter().filter(|node| !node.is_comment());

    if let Some(first) = leading.next() {
        if first.matches_keyword("SET") {
            return parse_set(&raw.tokens);
        }
        if first.matches_keyword("CREATE") {
            match leading.next() {
                Some(second) if second.matches_keyword("TABLE") => {
                    return parse_create_table(&raw.tokens);
                }
                Some(second) if second.matches_keyword("TYPE") && has_as_enum(&raw.tokens) => {
                    return parse_create_type(&raw.tokens);
                }
                _ => {}
            }
        }
    }

    debug!(
        "Passing through unrecognized statement starting with {:?}",
        raw.tokens.first().and_then(TokenTree::as_token)
    );
    Ok(Statement::Unrecognized(Unrecognized { tokens: raw.tokens }))
}

//CREATE TYPE only has structure we can extract in its AS ENUM form; other
//forms (AS RANGE, shell types) pass through unrecognized
fn has_as_enum(nodes: &[TokenTree]) -> bool {
    nodes
        .windows(2)
        .any(|pair| pair[0].matches_keyword("AS") && pair[1].matches_keyword("ENUM"))
}

/// Splits a token run on commas at this nesting level only; commas inside
/// nested parenthesis groups stay put. Segments may come back empty and
/// callers skip them.
fn split_on_commas(nodes: &[TokenTree]) -> Vec<&[TokenTree]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (index, node) in nodes.iter().enumerate() {
        if node.is_punctuation(",") {
            segments.push(&nodes[start..index]);
            start = index + 1;
        }
    }
    segments.push(&nodes[start..]);
    segments
}

#[derive(Debug, Error, PartialEq)]
pub enum MalformedStatementError {
    #[error("SET statement is missing the setting name")]
    SetMissingName,
    #[error("SET statement for {0} is missing an assignment")]
    SetMissingAssignment(String),
    #[error("SET statement for {0} is missing a value")]
    SetMissingValue(String),
    #[error("CREATE TABLE statement is missing the table name")]
    TableMissingName,
    #[error("CREATE TABLE {0} has no column definition list")]
    TableMissingColumns(String),
    #[error("Column definition {0} does not start with a column name")]
    InvalidColumn(String),
    #[error("Column {0} has a DEFAULT clause without a value")]
    DefaultMissingValue(String),
    #[error("Column {0} has a CHECK clause without an expression")]
    CheckMissingBody(String),
    #[error("Column {0} has a CONSTRAINT clause without a name")]
    ConstraintMissingName(String),
    #[error("CREATE TYPE statement is missing the type name")]
    TypeMissingName,
    #[error("CREATE TYPE {0} has no enum label list")]
    TypeMissingLabels(String),
}
