//! Correction-table assignments per composite key and surface finish.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{cell, column_map, parse_float};
use crate::errors::{DataError, DataResult};
use crate::key::{normalize, Surface};

/// Correction-table numbers for one composite key. An absent number means no
/// correction applies and the raw conductivity bound is used unmodified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCodeEntry {
    pub bare: Option<u32>,
    pub clad: Option<u32>,
}

impl TabCodeEntry {
    pub fn for_surface(&self, surface: Surface) -> Option<u32> {
        match surface {
            Surface::Bare => self.bare,
            Surface::Clad => self.clad,
        }
    }
}

/// Lookup from composite key to [`TabCodeEntry`].
#[derive(Debug, Default)]
pub struct TabCodeIndex {
    entries: HashMap<String, TabCodeEntry>,
}

impl TabCodeIndex {
    /// Logical columns the header row must provide, in any order and case.
    pub const REQUIRED_COLUMNS: [&'static str; 3] = ["concat", "bare", "clad"];

    /// Build the index from pre-split rows. Row 0 is the header.
    ///
    /// A missing required column is fatal. Rows with an empty key are
    /// dropped; duplicate keys keep the last row.
    pub fn from_rows(file: &str, rows: &[Vec<String>]) -> DataResult<Self> {
        let header = rows.first().map(Vec::as_slice).unwrap_or(&[]);
        let columns = column_map(header);
        let mut positions = [0usize; 3];
        for (slot, name) in positions.iter_mut().zip(Self::REQUIRED_COLUMNS) {
            *slot = *columns
                .get(name)
                .ok_or_else(|| DataError::missing_column(file, name))?;
        }
        let [concat_col, bare_col, clad_col] = positions;

        let mut entries = HashMap::new();
        for row in rows.iter().skip(1) {
            let key = normalize(cell(row, concat_col));
            if key.is_empty() {
                debug!("{file}: dropping row with empty concat key");
                continue;
            }
            let entry = TabCodeEntry {
                bare: parse_code(cell(row, bare_col)),
                clad: parse_code(cell(row, clad_col)),
            };
            entries.insert(key, entry);
        }
        Ok(TabCodeIndex { entries })
    }

    /// Entry for a composite key; unknown keys yield absent numbers.
    pub fn get(&self, composite: &str) -> TabCodeEntry {
        self.entries.get(composite).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse an optional table number.
///
/// Empty cells and "NOT APPLICABLE"-style cells (anything beginning with
/// "not", case-insensitive) are absent. Numeric cells go through float
/// parsing and truncate, tolerating inputs like `"6.0"`. Anything else is
/// absent rather than an error.
fn parse_code(cell: &str) -> Option<u32> {
    let cell = cell.trim();
    if cell.is_empty() || cell.to_ascii_lowercase().starts_with("not") {
        return None;
    }
    let number = parse_float(cell)?.trunc();
    (0.0..=u32::MAX as f64).contains(&number).then(|| number as u32)
}
