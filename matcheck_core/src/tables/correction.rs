//! Numbered conductivity-correction grids.
//!
//! Each grid is a 2-D table: rows indexed by an "uncorrected value" axis,
//! columns by a "thickness" axis. A lookup snaps both coordinates to their
//! nearest axis point and reads the cell.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{cell, parse_float};
use crate::nearest::nearest_index;

/// One correction grid with its two axis vectors.
///
/// Invariant: `grid.len() == uncorrected.len()` and every row's length equals
/// `thickness.len()`; rows that cannot satisfy this are dropped during
/// construction rather than stored malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionTable {
    uncorrected: Vec<f64>,
    thickness: Vec<f64>,
    grid: Vec<Vec<Option<f64>>>,
}

impl CorrectionTable {
    /// Parse a grid from pre-split rows.
    ///
    /// Fully-blank rows are dropped. The first remaining row is the header:
    /// every cell after the first that parses as a float becomes a thickness
    /// axis point (non-numeric cells are skipped, not placeholders). Each
    /// later row contributes its first cell as an uncorrected-axis point and
    /// the next `thickness.len()` cells as grid values; rows with an
    /// unparseable first cell or too few cells are dropped whole.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let rows: Vec<&Vec<String>> = rows.iter().filter(|row| !is_blank(row)).collect();
        let Some((header, body)) = rows.split_first() else {
            return CorrectionTable::default();
        };

        let thickness: Vec<f64> = header.iter().skip(1).filter_map(|c| parse_float(c)).collect();

        let mut uncorrected = Vec::new();
        let mut grid = Vec::new();
        for row in body {
            let Some(point) = parse_float(cell(row, 0)) else {
                debug!("dropping grid row without uncorrected-axis value");
                continue;
            };
            if row.len().saturating_sub(1) < thickness.len() {
                debug!("dropping grid row with {} of {} values", row.len().saturating_sub(1), thickness.len());
                continue;
            }
            let values: Vec<Option<f64>> = row[1..1 + thickness.len()]
                .iter()
                .map(|c| parse_float(c))
                .collect();
            uncorrected.push(point);
            grid.push(values);
        }

        CorrectionTable {
            uncorrected,
            thickness,
            grid,
        }
    }

    /// Corrected value for an uncorrected bound at a thickness.
    ///
    /// Both axes snap to their nearest point (ties keep the earliest). Absent
    /// grid cells and empty axes yield `None`; the caller falls back to the
    /// uncorrected bound.
    pub fn lookup(&self, uncorrected_value: f64, thickness: f64) -> Option<f64> {
        let row = nearest_index(self.uncorrected.iter().copied(), uncorrected_value)?;
        let col = nearest_index(self.thickness.iter().copied(), thickness)?;
        self.grid[row][col]
    }

    pub fn uncorrected_axis(&self) -> &[f64] {
        &self.uncorrected
    }

    pub fn thickness_axis(&self) -> &[f64] {
        &self.thickness
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
