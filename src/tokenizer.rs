//! Generic SQL tokenizer feeding the DDL parser. It only understands the
//! lexical surface (words, literals, operators, punctuation, comments), not
//! the grammar; the parser layer does the structural work.

mod token;
pub use token::Token;
pub use token::TokenKind;

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until, take_while, take_while1};
use nom::character::complete::{digit1, multispace1, none_of, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::error::{convert_error, ContextError, ParseError, VerboseError};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, pair, tuple};
use nom::Finish;
use nom::IResult;
use thiserror::Error;

//Words tagged as keywords; anything else word-shaped becomes a Name
const KEYWORDS: &[&str] = &[
    "ALTER", "AS", "BIGINT", "BOOLEAN", "CHAR", "CHARACTER", "CHECK", "COLLATE", "CONSTRAINT",
    "CREATE", "DEFAULT", "DROP", "ENUM", "FALSE", "FOREIGN", "INDEX", "INT", "INTEGER", "INTERVAL",
    "KEY", "NOT", "NULL", "NUMERIC", "ON", "PRIMARY", "REFERENCES", "SERIAL", "SET", "SMALLINT",
    "TABLE", "TEXT", "TIME", "TIMESTAMP", "TO", "TRUE", "TYPE", "UNIQUE", "UPDATE", "VARCHAR",
    "WITH", "WITHOUT", "ZONE",
];

pub struct SqlTokenizer {}

impl SqlTokenizer {
    pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
        match SqlTokenizer::nom_tokenize::<VerboseError<&str>>(input).finish() {
            Ok((_, tokens)) => {
                debug!("Tokenized {} bytes into {} tokens", input.len(), tokens.len());
                Ok(tokens)
            }
            Err(e) => Err(TokenizerError::TokenizeError(convert_error(input, e))),
        }
    }

    fn nom_tokenize<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
        input: &'a str,
    ) -> IResult<&'a str, Vec<Token>, E> {
        all_consuming(many0(match_token))(input)
    }
}

fn match_token<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    alt((
        match_whitespace,
        match_line_comment,
        match_block_comment,
        match_string_literal,
        match_number,
        match_word,
        match_operator,
        match_punctuation,
    ))(input)
}

fn match_whitespace<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    let (input, text) = multispace1(input)?;
    Ok((input, Token::new(TokenKind::Whitespace, text)))
}

//The trailing newline stays out of the token so comment text is usable as-is
fn match_line_comment<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    let (input, text) = recognize(pair(tag("--"), opt(is_not("\r\n"))))(input)?;
    Ok((input, Token::new(TokenKind::Comment, text)))
}

fn match_block_comment<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    let (input, text) = recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)?;
    Ok((input, Token::new(TokenKind::Comment, text)))
}

//Single quoted with '' escaping, kept raw including the quotes; stripping
//happens later via Token::unquoted_text
fn match_string_literal<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    //Code from here: https://stackoverflow.com/a/58520871
    let seq = recognize(separated_list1(tag("''"), many0(none_of("'"))));
    let (input, text) = recognize(delimited(tag("'"), seq, tag("'")))(input)?;
    Ok((input, Token::new(TokenKind::StringLiteral, text)))
}

fn match_number<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    let (input, text) = recognize(pair(digit1, opt(pair(tag("."), digit1))))(input)?;
    Ok((input, Token::new(TokenKind::Number, text)))
}

//Dots are allowed past the first character so schema qualified names like
//musicbrainz.artist stay one token
fn match_word<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    let (input, text) = recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '$'),
    ))(input)?;

    let upper = text.to_ascii_uppercase();
    let kind = if KEYWORDS.contains(&upper.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Name
    };
    Ok((input, Token::new(kind, text)))
}

fn match_operator<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    let (input, text) = alt((
        tag("<="),
        tag(">="),
        tag("<>"),
        tag("!="),
        tag("||"),
        recognize(one_of("=<>+-*/%")),
    ))(input)?;
    Ok((input, Token::new(TokenKind::Operator, text)))
}

fn match_punctuation<'a, E: ParseError<&'a str> + ContextError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Token, E> {
    let (input, text) = recognize(one_of("(),;"))(input)?;
    Ok((input, Token::new(TokenKind::Punctuation, text)))
}

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("SQL tokenize error {0}")]
    TokenizeError(String),
}
