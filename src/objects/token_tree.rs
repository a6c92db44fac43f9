use crate::tokenizer::Token;

/// A token or a matched parenthesis group. A `Parenthesis` keeps its
/// bounding punctuation tokens as its first and last children so flattening
/// the tree reproduces the original token sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenTree {
    Token(Token),
    Parenthesis(Vec<TokenTree>),
}

impl TokenTree {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            TokenTree::Token(token) => Some(token),
            TokenTree::Parenthesis(_) => None,
        }
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self, TokenTree::Parenthesis(_))
    }

    pub fn is_comment(&self) -> bool {
        self.as_token().map_or(false, Token::is_comment)
    }

    pub fn is_punctuation(&self, text: &str) -> bool {
        self.as_token().map_or(false, |t| t.is_punctuation(text))
    }

    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.as_token().map_or(false, |t| t.matches_keyword(keyword))
    }

    /// Children of a parenthesis group without the bounding punctuation.
    /// Empty for leaf tokens.
    pub fn inner(&self) -> &[TokenTree] {
        match self {
            TokenTree::Parenthesis(children) => {
                children.get(1..children.len().saturating_sub(1)).unwrap_or(&[])
            }
            TokenTree::Token(_) => &[],
        }
    }

    pub fn render(&self) -> String {
        match self {
            TokenTree::Token(token) => token.text.clone(),
            TokenTree::Parenthesis(children) => render_compact(children),
        }
    }
}

/// Renders a token run with whitespace collapsed: texts are concatenated
/// with no separator unless two word characters would fuse across the
/// boundary, so `edits_pending > 0` becomes `edits_pending>0` while
/// `TIMESTAMP WITH TIME ZONE` keeps its spaces.
pub fn render_compact<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = &'a TokenTree>,
{
    let mut out = String::new();
    for node in nodes {
        let text = node.render();
        if text.is_empty() {
            continue;
        }
        if needs_space(&out, &text) {
            out.push(' ');
        }
        out.push_str(&text);
    }
    out
}

fn needs_space(left: &str, right: &str) -> bool {
    match (left.chars().last(), right.chars().next()) {
        (Some(l), Some(r)) => is_word_char(l) && is_word_char(r),
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::TokenKind;

    fn leaf(kind: TokenKind, text: &str) -> TokenTree {
        TokenTree::Token(Token::new(kind, text))
    }

    #[test]
    fn test_render_collapses_around_operators() {
        let nodes = vec![
            leaf(TokenKind::Name, "edits_pending"),
            leaf(TokenKind::Operator, ">"),
            leaf(TokenKind::Number, "0"),
        ];

        assert_eq!("edits_pending>0", render_compact(&nodes));
    }

    #[test]
    fn test_render_keeps_word_boundaries() {
        let nodes = vec![
            leaf(TokenKind::Keyword, "TIMESTAMP"),
            leaf(TokenKind::Keyword, "WITH"),
            leaf(TokenKind::Keyword, "TIME"),
            leaf(TokenKind::Keyword, "ZONE"),
        ];

        assert_eq!("TIMESTAMP WITH TIME ZONE", render_compact(&nodes));
    }

    #[test]
    fn test_render_glues_argument_groups() {
        let group = TokenTree::Parenthesis(vec![
            leaf(TokenKind::Punctuation, "("),
            leaf(TokenKind::Number, "100"),
            leaf(TokenKind::Punctuation, ")"),
        ]);
        let nodes = vec![leaf(TokenKind::Keyword, "VARCHAR"), group];

        assert_eq!("VARCHAR(100)", render_compact(&nodes));
    }

    #[test]
    fn test_inner_strips_bounding_punctuation() {
        let group = TokenTree::Parenthesis(vec![
            leaf(TokenKind::Punctuation, "("),
            leaf(TokenKind::Number, "100"),
            leaf(TokenKind::Punctuation, ")"),
        ]);

        assert_eq!(&[leaf(TokenKind::Number, "100")], group.inner());
        assert!(leaf(TokenKind::Number, "100").inner().is_empty());
    }
}
