use std::str::FromStr;

use chumsky::prelude::*;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(ParseError::InvalidDirection { found: Some(other) }),
        }
    }
}

/// A single rotation of the dial.
///
/// `clicks` keeps the sign it was written with; the dial treats negative
/// counts as a no-op instead of rejecting them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub direction: Direction,
    pub clicks: i64,
}

impl Instruction {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let direction = parse_direction(line)?;
        let clicks = parse_clicks(line)?;
        Ok(Self { direction, clicks })
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reads the direction from the first character of `line`.
pub fn parse_direction(line: &str) -> Result<Direction, ParseError> {
    line.chars()
        .next()
        .ok_or(ParseError::InvalidDirection { found: None })
        .and_then(Direction::try_from)
}

/// Signed base-10 integer spanning the whole input.
///
/// `digits` rather than `int` so that zero-padded counts like `007` are accepted.
fn clicks_parser<'a>() -> impl Parser<'a, &'a str, i64, extra::Err<Rich<'a, char>>> {
    one_of("+-")
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .try_map(|number: &str, span| number.parse::<i64>().map_err(|e| Rich::custom(span, e)))
        .then_ignore(end())
}

/// Reads the click count from everything after the first character of `line`.
pub fn parse_clicks(line: &str) -> Result<i64, ParseError> {
    let mut chars = line.chars();
    chars.next();
    let rest = chars.as_str();

    clicks_parser()
        .parse(rest)
        .into_result()
        .map_err(|errors| ParseError::InvalidClicks {
            found: rest.to_string(),
            reason: errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        })
}
