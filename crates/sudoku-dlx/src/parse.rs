//! Textual puzzle parsing.
//!
//! For boards up to 9×9 every non-whitespace character is one token, so the
//! common 81-character puzzle strings parse directly. Larger boards use
//! whitespace- or comma-separated tokens since digits need more than one
//! character. `.` and `0` both mean blank.

use crate::grid::Grid;
use std::fmt;

/// Errors produced while parsing puzzle text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token count does not match `size²`.
    TokenCount { expected: usize, found: usize },
    /// A digit outside `[1, size]` at the given cell.
    OutOfRange { row: usize, col: usize, value: usize },
    /// A token that is neither a digit nor a blank marker.
    BadToken { index: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenCount { expected, found } => {
                write!(f, "invalid puzzle length: expected {} tokens, got {}", expected, found)
            }
            Self::OutOfRange { row, col, value } => {
                write!(f, "invalid number {} at row {}, col {}", value, row + 1, col + 1)
            }
            Self::BadToken { index, token } => {
                write!(f, "invalid token '{}' at position {}", token, index + 1)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse puzzle text into a grid of the given side length.
///
/// Fails fast on a wrong token count or an out-of-range digit; never
/// truncates or clamps. Panics if `size` is not a perfect square (caller
/// contract, see [`Grid::new`]).
pub fn parse_puzzle(text: &str, size: usize) -> Result<Grid, ParseError> {
    let tokens = tokenize(text, size);
    let expected = size * size;
    if tokens.len() != expected {
        return Err(ParseError::TokenCount {
            expected,
            found: tokens.len(),
        });
    }

    let mut grid = Grid::new(size);
    for (i, token) in tokens.iter().enumerate() {
        let (row, col) = (i / size, i % size);
        if *token == "." || *token == "0" {
            continue;
        }
        let value: usize = token
            .parse()
            .map_err(|_| ParseError::BadToken {
                index: i,
                token: token.clone(),
            })?;
        if value < 1 || value > size {
            return Err(ParseError::OutOfRange { row, col, value });
        }
        grid.set(row, col, value as u8);
    }
    Ok(grid)
}

fn tokenize(text: &str, size: usize) -> Vec<String> {
    if size <= 9 {
        text.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_string())
            .collect()
    } else {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_classic_string_parses() {
        let grid = parse_puzzle(CLASSIC, 9).unwrap();
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.get(0, 1), 3);
        assert_eq!(grid.get(8, 8), 9);
        assert_eq!(grid.clue_count(), 30);
    }

    #[test]
    fn test_dots_and_whitespace() {
        let text = "1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 .";
        let grid = parse_puzzle(text, 4).unwrap();
        assert_eq!(grid.get(3, 3), 0);
        assert_eq!(grid.clue_count(), 15);
    }

    #[test]
    fn test_wrong_length_fails() {
        let err = parse_puzzle("53..", 9).unwrap_err();
        assert_eq!(
            err,
            ParseError::TokenCount {
                expected: 81,
                found: 4
            }
        );
    }

    #[test]
    fn test_out_of_range_digit_reports_position() {
        // A 5 is out of range on a 4x4 board; index 6 is row 1, col 2.
        let err = parse_puzzle("1234..5.........", 4).unwrap_err();
        assert_eq!(
            err,
            ParseError::OutOfRange {
                row: 1,
                col: 2,
                value: 5
            }
        );
    }

    #[test]
    fn test_zero_is_blank() {
        let grid = parse_puzzle(&"0".repeat(81), 9).unwrap();
        assert_eq!(grid.clue_count(), 0);
    }

    #[test]
    fn test_bad_token_fails() {
        let text = format!("x{}", ".".repeat(80));
        let err = parse_puzzle(&text, 9).unwrap_err();
        assert_eq!(
            err,
            ParseError::BadToken {
                index: 0,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_16x16_tokens() {
        let blanks = vec!["0"; 256].join(" ");
        let grid = parse_puzzle(&blanks, 16).unwrap();
        assert_eq!(grid.clue_count(), 0);

        let mut tokens = vec!["0".to_string(); 256];
        tokens[0] = "16".to_string();
        tokens[1] = "17".to_string();
        let err = parse_puzzle(&tokens.join(" "), 16).unwrap_err();
        assert_eq!(
            err,
            ParseError::OutOfRange {
                row: 0,
                col: 1,
                value: 17
            }
        );
    }
}
