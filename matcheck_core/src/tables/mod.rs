//! # Reference Tables
//!
//! The four table families the engine is built from:
//!
//! - [`conductivity`] - exact-match conductivity ranges keyed by
//!   (spec, material, temper)
//! - [`hardness`] - hardness requirement matrices recovered by structural
//!   heuristics, one per surface/bound combination
//! - [`tabcode`] - composite key to correction-table number per surface
//! - [`correction`] - numbered two-axis correction grids
//!
//! Each builder consumes pre-split rows (see [`crate::loader`]) and tolerates
//! malformed individual rows; only a structurally broken file (missing
//! required column) is an error.

pub mod conductivity;
pub mod correction;
pub mod hardness;
pub mod tabcode;

pub use conductivity::{ConductivityIndex, ConductivityRange};
pub use correction::CorrectionTable;
pub use hardness::{HardnessSeries, HardnessTable};
pub use tabcode::{TabCodeEntry, TabCodeIndex};

use std::collections::HashMap;

/// Case-insensitive header map: normalized column name to position.
/// Duplicate names keep the last occurrence.
pub(crate) fn column_map(header: &[String]) -> HashMap<String, usize> {
    header
        .iter()
        .enumerate()
        .map(|(index, name)| (name.trim().to_lowercase(), index))
        .collect()
}

/// Cell at `index`, or the empty string for short rows.
pub(crate) fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Parse a numeric cell. Empty or unparseable cells become absent values
/// rather than errors; partial data is tolerated per-cell.
pub(crate) fn parse_float(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

#[cfg(test)]
pub(crate) fn rows(lines: &[&str]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}
