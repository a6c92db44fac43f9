use crate::objects::TokenTree;
use crate::tokenizer::Token;
use thiserror::Error;

/// Rebuilds the nesting structure of a flat token sequence: every matched
/// `(...)` pair becomes one `TokenTree::Parenthesis` node. Whitespace tokens
/// carry no structural meaning for DDL extraction and are dropped here.
///
/// Single left-to-right pass over an explicit stack of open frames, so
/// pathological nesting depth cannot blow the call stack.
pub fn group_parentheses(tokens: Vec<Token>) -> Result<Vec<TokenTree>, UnbalancedParenthesesError> {
    let mut current = Vec::new();
    let mut stack: Vec<Vec<TokenTree>> = Vec::new();

    for token in tokens {
        if token.is_whitespace() {
            continue;
        }

        if token.is_punctuation("(") {
            stack.push(std::mem::take(&mut current));
            current.push(TokenTree::Token(token));
        } else if token.is_punctuation(")") {
            current.push(TokenTree::Token(token));
            match stack.pop() {
                Some(mut parent) => {
                    parent.push(TokenTree::Parenthesis(current));
                    current = parent;
                }
                None => return Err(UnbalancedParenthesesError::UnexpectedClose),
            }
        } else {
            current.push(TokenTree::Token(token));
        }
    }

    if !stack.is_empty() {
        return Err(UnbalancedParenthesesError::UnclosedGroup(stack.len()));
    }
    Ok(current)
}

#[derive(Debug, Error, PartialEq)]
pub enum UnbalancedParenthesesError {
    #[error("Closing parenthesis without a matching opening one")]
    UnexpectedClose,
    #[error("Input ended with {0} parenthesis group(s) still open")]
    UnclosedGroup(usize),
}
