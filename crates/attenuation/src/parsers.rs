//! Parsers for delimited rows of numbers

// nom parser combinators
use nom::character::complete::multispace0;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::sequence::delimited;
use nom::IResult;

/// A token on a row that is not a finite number
#[derive(Debug, PartialEq)]
pub(crate) struct TokenError {
    /// 1-based position of the token on the row
    pub column: usize,
    /// Offending text, trimmed
    pub token: String,
}

/// Single floating point value with optional surrounding whitespace
///
/// Accepts anything `double` does, so `1.5`, `1.5E-03`, `-2e6`, etc...
pub(crate) fn float(i: &str) -> IResult<&str, f64> {
    all_consuming(delimited(multispace0, double, multispace0))(i)
}

/// Split a line on the delimiter and parse every token as a finite float
///
/// A single empty token left behind by a trailing delimiter is ignored.
pub(crate) fn row(line: &str, delimiter: char) -> Result<Vec<f64>, TokenError> {
    let mut tokens: Vec<&str> = line.split(delimiter).collect();
    if tokens.len() > 1 && tokens.last().is_some_and(|t| t.trim().is_empty()) {
        tokens.pop();
    }

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| match float(token) {
            Ok((_, value)) if value.is_finite() => Ok(value),
            _ => Err(TokenError {
                column: i + 1,
                token: token.trim().to_string(),
            }),
        })
        .collect()
}
