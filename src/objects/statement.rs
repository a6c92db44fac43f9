use super::render_compact;
use super::Column;
use super::TokenTree;

/// One classified top-level SQL statement. Anything outside the recognized
/// shapes lands in `Unrecognized` rather than failing, since DDL dumps mix
/// in plenty of statement kinds a structural extractor can ignore.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Set(Set),
    CreateTable(CreateTable),
    CreateType(CreateType),
    Unrecognized(Unrecognized),
}

/// `SET <name> = <value>` or `SET <name> TO <value>`; the two forms are
/// equivalent. Quoted values arrive with the quotes already stripped.
#[derive(Clone, Debug, PartialEq)]
pub struct Set {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateTable {
    pub name: String,
    pub columns: Vec<Column>,
}

/// `CREATE TYPE <name> AS ENUM (...)` with the labels unquoted, in source
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateType {
    pub name: String,
    pub enum_labels: Vec<String>,
}

/// Fallback for statement shapes outside the recognized set. Keeps the raw
/// token tree so callers can inspect or skip it.
#[derive(Clone, Debug, PartialEq)]
pub struct Unrecognized {
    pub tokens: Vec<TokenTree>,
}

impl Unrecognized {
    pub fn render(&self) -> String {
        render_compact(&self.tokens)
    }
}
