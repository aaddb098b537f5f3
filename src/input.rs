//! Reads a grid description from whitespace-separated text.
//!
//! The format is the one the datacenter puzzle uses: `width`, `length`, then
//! `width * length` cell values in row-major order, where `0` is free, `1` is
//! excluded, `2` is the start and `3` is the end. Line breaks carry no meaning.

use std::str::FromStr;

use thiserror::Error;

use crate::grid::{Cell, GridError, GridLayout};

/// Error type for reading a textual grid description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Error when the input ends before a dimension is read.
    #[error("Missing grid {0}")]
    MissingDimension(&'static str),

    /// Error when a token is not a non-negative integer.
    #[error("Expected a number for {what}, found '{token}'")]
    NotANumber { what: String, token: String },

    /// Error when the input ends before every cell is read.
    #[error("Missing value for cell {index} (column {col}, row {row})")]
    MissingCell { index: usize, col: usize, row: usize },

    /// Error when tokens remain after the last cell.
    #[error("Unexpected trailing input '{0}' after the last cell")]
    TrailingInput(String),

    /// Error when the values read do not form a valid grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parses a complete grid description.
pub fn parse_layout(text: &str) -> Result<GridLayout, InputError> {
    let mut tokens = text.split_whitespace();

    let width = read_dimension(&mut tokens, "width")?;
    let length = read_dimension(&mut tokens, "length")?;
    let cell_count = GridLayout::checked_cell_count(width, length)?;

    let mut cells = Vec::with_capacity(cell_count);
    for index in 0..cell_count {
        let (col, row) = (index % width, index / width);
        let token = tokens
            .next()
            .ok_or(InputError::MissingCell { index, col, row })?;
        let value = parse_number(token, || format!("cell {index} (column {col}, row {row})"))?;
        cells.push(Cell::from_value(value, index)?);
    }

    if let Some(extra) = tokens.next() {
        return Err(InputError::TrailingInput(extra.to_string()));
    }

    Ok(GridLayout::new(width, length, cells)?)
}

fn read_dimension<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<usize, InputError> {
    let token = tokens.next().ok_or(InputError::MissingDimension(what))?;
    let value = parse_number(token, || what.to_string())?;
    usize::try_from(value).map_err(|_| InputError::NotANumber {
        what: what.to_string(),
        token: token.to_string(),
    })
}

fn parse_number(token: &str, what: impl FnOnce() -> String) -> Result<u64, InputError> {
    token.parse::<u64>().map_err(|_| InputError::NotANumber {
        what: what(),
        token: token.to_string(),
    })
}

impl FromStr for GridLayout {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_layout(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiline_grid() {
        let layout = parse_layout("4 3\n2 0 0 0\n0 0 0 0\n0 0 3 1\n").unwrap();
        assert_eq!((layout.width(), layout.length()), (4, 3));
        assert_eq!(layout.free_cells(), 9);
        assert_eq!(layout.cells()[11], Cell::Excluded);
    }

    #[test]
    fn layout_from_str_matches_parse() {
        let text = "3 1 2 0 3";
        let layout: GridLayout = text.parse().unwrap();
        assert_eq!(layout, parse_layout(text).unwrap());
    }

    #[test]
    fn reports_missing_dimensions() {
        assert_eq!(parse_layout(""), Err(InputError::MissingDimension("width")));
        assert_eq!(parse_layout("  4 "), Err(InputError::MissingDimension("length")));
    }

    #[test]
    fn reports_non_numeric_tokens_with_position() {
        assert_eq!(
            parse_layout("x 2"),
            Err(InputError::NotANumber {
                what: "width".to_string(),
                token: "x".to_string()
            })
        );
        assert_eq!(
            parse_layout("2 2 2 0 -1 3"),
            Err(InputError::NotANumber {
                what: "cell 2 (column 0, row 1)".to_string(),
                token: "-1".to_string()
            })
        );
    }

    #[test]
    fn reports_missing_cells() {
        assert_eq!(
            parse_layout("3 2 2 0 0 0"),
            Err(InputError::MissingCell {
                index: 4,
                col: 1,
                row: 1
            })
        );
    }

    #[test]
    fn reports_trailing_tokens() {
        assert_eq!(
            parse_layout("2 1 2 3 0"),
            Err(InputError::TrailingInput("0".to_string()))
        );
    }

    #[test]
    fn reports_grid_errors() {
        assert_eq!(
            parse_layout("9 8"),
            Err(InputError::Grid(GridError::TooManyCells {
                width: 9,
                length: 8
            }))
        );
        assert_eq!(
            parse_layout("0 5"),
            Err(InputError::Grid(GridError::ZeroDimension {
                width: 0,
                length: 5
            }))
        );
        assert_eq!(
            parse_layout("2 1 2 7"),
            Err(InputError::Grid(GridError::InvalidCell { index: 1, value: 7 }))
        );
        assert_eq!(
            parse_layout("2 1 0 3"),
            Err(InputError::Grid(GridError::MissingStart))
        );
    }
}
