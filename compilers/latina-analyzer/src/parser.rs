use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{digit1, multispace0, one_of},
    combinator::map,
    IResult,
};
use unicode_normalization::char::is_combining_mark;

use crate::token::{Span, Token, TokenKind};

/// Letters, plus combining marks so that decomposed macrons (`a` + U+0304)
/// stay inside their word.
fn is_latin_letter(c: char) -> bool {
    c.is_alphabetic() || is_combining_mark(c)
}

const PUNCTUATION: &str = ".,;:?!\"'()«»—-";

fn token(input: &str) -> IResult<&str, TokenKind> {
    alt((
        map(take_while1(is_latin_letter), |_| TokenKind::Word),
        map(digit1, |_| TokenKind::Number),
        map(one_of(PUNCTUATION), TokenKind::Punctuation),
    ))(input)
}

/// Splits `original_input` into words, numbers and punctuation. Characters
/// that fit none of these are skipped.
pub fn tokenize(original_input: &str) -> Vec<Token<'_>> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        match token(input) {
            Ok((next_input, kind)) => {
                let len = input.len() - next_input.len();
                let start = original_input.len() - input.len();
                result.push(Token {
                    span: Span::new(start, start + len),
                    text: &input[..len],
                    kind,
                });
                input = next_input;
            }
            Err(_) => {
                // Skip one char to recover
                match input.chars().next() {
                    Some(c) => input = &input[c.len_utf8()..],
                    None => break,
                }
            }
        }
    }

    result
}
