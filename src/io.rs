//! Tab-separated text format for cost matrices.
//!
//! One row per line, cells separated by `\t`, lines optionally ending in
//! `\r\n`. A cell is either a non-negative decimal cost or `NA` for an
//! unreachable move:
//!
//! ```text
//! 0	3	10
//! NA	0	4
//! NA	NA	0
//! ```
//!
//! Where the text comes from is an explicit [`InputSource`] handed to the
//! reader, so callers choose between stdin and a file per call.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::MatrixError;
use crate::matrix::{Cell, CostMatrix};

/// Token used for an unreachable move.
pub const UNREACHABLE_TOKEN: &str = "NA";

/// Where to read a matrix from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn read_to_string(&self) -> Result<String, MatrixError> {
        match self {
            InputSource::Stdin => {
                let mut text = String::new();
                io::stdin().lock().read_to_string(&mut text)?;
                Ok(text)
            }
            InputSource::File(path) => Ok(fs::read_to_string(path)?),
        }
    }

    pub fn read_matrix(&self) -> Result<CostMatrix, MatrixError> {
        parse_matrix(&self.read_to_string()?)
    }

    /// Short label for reports.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Parse the text format into a validated matrix.
///
/// Trailing blank lines are ignored; empty input yields a matrix with no ports.
pub fn parse_matrix(text: &str) -> Result<CostMatrix, MatrixError> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let rows = lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.split('\t')
                .enumerate()
                .map(|(column, token)| parse_cell(row, column, token))
                .collect::<Result<Vec<Cell>, MatrixError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    CostMatrix::new(rows)
}

fn parse_cell(row: usize, column: usize, token: &str) -> Result<Cell, MatrixError> {
    let token = token.trim();
    if token == UNREACHABLE_TOKEN {
        return Ok(None);
    }
    token
        .parse::<u64>()
        .map(Some)
        .map_err(|_| MatrixError::InvalidToken {
            row,
            column,
            token: token.to_string(),
        })
}

/// Render a matrix in the text format, with CRLF line endings.
pub fn write_matrix(matrix: &CostMatrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let line = row
            .iter()
            .map(|cell| match cell {
                Some(cost) => cost.to_string(),
                None => UNREACHABLE_TOKEN.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\t");
        out.push_str(&line);
        out.push_str("\r\n");
    }
    out
}

/// Write a matrix to `path` in the text format.
pub fn save_matrix(matrix: &CostMatrix, path: &Path) -> Result<(), MatrixError> {
    fs::write(path, write_matrix(matrix))?;
    Ok(())
}
