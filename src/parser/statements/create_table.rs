//! CREATE TABLE extraction. Pulls the table name and a structured view of
//! each column definition out of the parenthesized column list. Clauses the
//! extractor does not understand (UNIQUE, REFERENCES, ...) are skipped, not
//! errors; schema dumps should parse end to end even when only part of each
//! definition is interesting.

use super::{split_on_commas, MalformedStatementError};
use crate::objects::{render_compact, CheckConstraint, Column, CreateTable, Statement, TokenTree};

//Clause-introducing keywords; they end the type run and are never part of a
//column type
const CLAUSE_KEYWORDS: &[&str] = &[
    "NOT",
    "NULL",
    "DEFAULT",
    "CHECK",
    "CONSTRAINT",
    "PRIMARY",
    "UNIQUE",
    "REFERENCES",
    "COLLATE",
    "FOREIGN",
];

pub(super) fn parse_create_table(
    nodes: &[TokenTree],
) -> Result<Statement, MalformedStatementError> {
    let name = nodes
        .iter()
        .filter(|node| !node.is_comment())
        .skip_while(|node| !node.matches_keyword("TABLE"))
        .nth(1)
        .and_then(TokenTree::as_token)
        .filter(|token| token.is_word())
        .ok_or(MalformedStatementError::TableMissingName)?;

    let group = nodes
        .iter()
        .find(|node| node.is_parenthesis())
        .ok_or_else(|| MalformedStatementError::TableMissingColumns(name.text.clone()))?;

    let mut columns: Vec<Column> = Vec::new();
    for segment in split_on_commas(group.inner()) {
        let mut segment = segment;

        //A comment right after a comma sits on the previous column's line
        //(`id SERIAL, -- PK`), so it belongs to that column, not this one
        if let Some(previous) = columns.last_mut() {
            let count = segment.iter().take_while(|node| node.is_comment()).count();
            for node in &segment[..count] {
                push_comment(&mut previous.comments, node);
            }
            segment = &segment[count..];
        }

        if let Some(column) = parse_column(segment)? {
            columns.push(column);
        }
    }

    debug!("Parsed CREATE TABLE {} with {} columns", name.text, columns.len());
    Ok(Statement::CreateTable(CreateTable {
        name: name.text.clone(),
        columns,
    }))
}

fn is_clause_keyword(node: &TokenTree) -> bool {
    CLAUSE_KEYWORDS
        .iter()
        .any(|keyword| node.matches_keyword(keyword))
}

//One comma-delimited segment of the column list. Returns None for segments
//that define no column: empty runs, comment-only runs, and table-level
//constraints (CONSTRAINT ... / PRIMARY KEY (...) / CHECK (...)).
fn parse_column(segment: &[TokenTree]) -> Result<Option<Column>, MalformedStatementError> {
    let mut comments = Vec::new();
    let mut index = 0;

    let name = loop {
        match segment.get(index) {
            None => return Ok(None),
            Some(node) if node.is_comment() => {
                push_comment(&mut comments, node);
                index += 1;
            }
            Some(node) if is_clause_keyword(node) => return Ok(None),
            Some(node) => {
                let token = node
                    .as_token()
                    .filter(|token| token.is_word())
                    .ok_or_else(|| {
                        MalformedStatementError::InvalidColumn(render_compact(segment))
                    })?;
                break token.text.clone();
            }
        }
    };
    index += 1;

    //The type is the run up to the first clause keyword, argument groups
    //included; render_compact glues VARCHAR + (100) back together
    let mut type_run: Vec<&TokenTree> = Vec::new();
    while let Some(node) = segment.get(index) {
        if node.is_comment() {
            push_comment(&mut comments, node);
            index += 1;
            continue;
        }
        if is_clause_keyword(node) {
            break;
        }
        type_run.push(node);
        index += 1;
    }
    let sql_type = render_compact(type_run);

    let mut not_null = false;
    let mut default_value = None;
    let mut check_constraint = None;

    while index < segment.len() {
        let node = &segment[index];
        index += 1;

        if node.is_comment() {
            push_comment(&mut comments, node);
        } else if node.matches_keyword("NOT") && peek(segment, index, "NULL") {
            not_null = true;
            index = skip_comments(segment, index, &mut comments) + 1;
        } else if node.matches_keyword("DEFAULT") {
            index = skip_comments(segment, index, &mut comments);
            let value_node = segment
                .get(index)
                .ok_or_else(|| MalformedStatementError::DefaultMissingValue(name.clone()))?;
            index += 1;
            let mut value = value_node.render();

            //Function call defaults like now() arrive as a word followed by
            //an argument group
            let is_word = value_node.as_token().map_or(false, |t| t.is_word());
            if is_word {
                if let Some(arguments) = segment.get(index).filter(|n| n.is_parenthesis()) {
                    value.push_str(&arguments.render());
                    index += 1;
                }
            }
            default_value = Some(value);
        } else if node.matches_keyword("CHECK") {
            index = skip_comments(segment, index, &mut comments);
            check_constraint = Some(parse_check(segment, &mut index, None, &name)?);
        } else if node.matches_keyword("CONSTRAINT") {
            index = skip_comments(segment, index, &mut comments);
            let constraint_name = segment
                .get(index)
                .and_then(TokenTree::as_token)
                .filter(|token| token.is_word())
                .ok_or_else(|| MalformedStatementError::ConstraintMissingName(name.clone()))?;
            index += 1;

            index = skip_comments(segment, index, &mut comments);
            if segment.get(index).map_or(false, |n| n.matches_keyword("CHECK")) {
                index += 1;
                index = skip_comments(segment, index, &mut comments);
                check_constraint = Some(parse_check(
                    segment,
                    &mut index,
                    Some(constraint_name.text.clone()),
                    &name,
                )?);
            }
            //A named non-CHECK constraint is one of the skipped clauses
        }
        //Anything else is an unrecognized trailing clause; skip it
    }

    Ok(Some(Column {
        name,
        sql_type,
        default_value,
        not_null,
        check_constraint,
        comments,
    }))
}

fn parse_check(
    segment: &[TokenTree],
    index: &mut usize,
    constraint_name: Option<String>,
    column_name: &str,
) -> Result<CheckConstraint, MalformedStatementError> {
    let group = segment
        .get(*index)
        .filter(|node| node.is_parenthesis())
        .ok_or_else(|| MalformedStatementError::CheckMissingBody(column_name.to_string()))?;
    *index += 1;

    Ok(CheckConstraint {
        name: constraint_name,
        body: render_compact(group.inner()),
    })
}

fn push_comment(comments: &mut Vec<String>, node: &TokenTree) {
    if let Some(token) = node.as_token() {
        comments.push(token.text.clone());
    }
}

//Advances past comments, collecting them, and returns the next index
fn skip_comments(segment: &[TokenTree], mut index: usize, comments: &mut Vec<String>) -> usize {
    while let Some(node) = segment.get(index) {
        if !node.is_comment() {
            break;
        }
        push_comment(comments, node);
        index += 1;
    }
    index
}

//True when the next non-comment node matches the keyword
fn peek(segment: &[TokenTree], mut index: usize, keyword: &str) -> bool {
    while let Some(node) = segment.get(index) {
        if !node.is_comment() {
            return node.matches_keyword(keyword);
        }
        index += 1;
    }
    false
}
