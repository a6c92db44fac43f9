//! Value objects produced by the parser. Everything here is built once from
//! a statement's tokens and never mutated afterwards.

mod column;
pub use column::CheckConstraint;
pub use column::Column;

mod statement;
pub use statement::CreateTable;
pub use statement::CreateType;
pub use statement::Set;
pub use statement::Statement;
pub use statement::Unrecognized;

mod token_tree;
pub use token_tree::render_compact;
pub use token_tree::TokenTree;
