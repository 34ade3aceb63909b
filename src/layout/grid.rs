// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A cell position in the tile matrix: column first, then row.
///
/// Canonical form (used as a serialized map key and inside encoded tiles):
/// `<col>,<row>`. The comma never occurs in step ids, so encoded
/// coordinates can be embedded in `|`-delimited tile strings without
/// ambiguity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct GridCoord {
    col: usize,
    row: usize,
}

impl GridCoord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn parse(input: &str) -> Result<Self, ParseGridCoordError> {
        let (col_str, row_str) = input
            .split_once(',')
            .ok_or(ParseGridCoordError::MissingDelimiter)?;
        let col = col_str
            .parse::<usize>()
            .map_err(ParseGridCoordError::InvalidColumn)?;
        let row = row_str
            .parse::<usize>()
            .map_err(ParseGridCoordError::InvalidRow)?;
        Ok(Self { col, row })
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

impl FromStr for GridCoord {
    type Err = ParseGridCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<GridCoord> for String {
    fn from(coord: GridCoord) -> Self {
        coord.to_string()
    }
}

impl TryFrom<String> for GridCoord {
    type Error = ParseGridCoordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridCoordError {
    MissingDelimiter,
    InvalidColumn(ParseIntError),
    InvalidRow(ParseIntError),
}

impl fmt::Display for ParseGridCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDelimiter => f.write_str("coordinate must be '<col>,<row>'"),
            Self::InvalidColumn(err) => write!(f, "invalid column: {err}"),
            Self::InvalidRow(err) => write!(f, "invalid row: {err}"),
        }
    }
}

impl std::error::Error for ParseGridCoordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColumn(err) | Self::InvalidRow(err) => Some(err),
            Self::MissingDelimiter => None,
        }
    }
}
