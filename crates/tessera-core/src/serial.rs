//! Text format for Grid
//!
//! One line per row, cells separated by whitespace:
//!
//! ```text
//! 1 1 2
//! 3 1 2
//! 3 3 2
//! ```
//!
//! Blank lines are ignored when reading. Writing uses a single space
//! between cells and a newline after every row.

use crate::error::{Error, Result};
use crate::grid::Grid;
use std::fmt;
use std::str::FromStr;

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid<u32> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (index, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<u32>().map_err(|_| Error::Parse {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<u32>>>()?;
            rows.push(row);
        }
        Grid::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        let grid: Grid<u32> = "1 1 2\n3 1 2\n\n3 3 2\n".parse().unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.row(1), Some(&[3, 1, 2][..]));
    }

    #[test]
    fn test_display_round_trip() {
        let text = "4 0\n0 4\n";
        let grid: Grid<u32> = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1 2\n3 x\n".parse::<Grid<u32>>(),
            Err(Error::Parse {
                line: 2,
                token: "x".to_string()
            })
        );
        assert_eq!("".parse::<Grid<u32>>(), Err(Error::EmptyGrid));
        assert_eq!(
            "1 2\n3\n".parse::<Grid<u32>>(),
            Err(Error::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }
}
