//! Base conductivity ranges, exact-match keyed by (spec, material, temper).

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{cell, column_map, parse_float};
use crate::errors::{DataError, DataResult};
use crate::key::MaterialKey;

/// Conductivity bounds in %IACS. Either bound may be absent in the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConductivityRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Exact-match lookup from [`MaterialKey`] to [`ConductivityRange`].
#[derive(Debug, Default)]
pub struct ConductivityIndex {
    entries: HashMap<MaterialKey, ConductivityRange>,
}

impl ConductivityIndex {
    /// Logical columns the header row must provide, in any order and case.
    pub const REQUIRED_COLUMNS: [&'static str; 5] = ["spec", "material", "temper", "min", "max"];

    /// Build the index from pre-split rows. Row 0 is the header.
    ///
    /// A missing required column is fatal; this table is mandatory for all
    /// queries. Rows with an incomplete key are dropped, unparseable bounds
    /// become absent, and duplicate keys keep the last row.
    pub fn from_rows(file: &str, rows: &[Vec<String>]) -> DataResult<Self> {
        let header = rows.first().map(Vec::as_slice).unwrap_or(&[]);
        let columns = column_map(header);
        let mut positions = [0usize; 5];
        for (slot, name) in positions.iter_mut().zip(Self::REQUIRED_COLUMNS) {
            *slot = *columns
                .get(name)
                .ok_or_else(|| DataError::missing_column(file, name))?;
        }
        let [spec_col, material_col, temper_col, min_col, max_col] = positions;

        let mut entries = HashMap::new();
        for row in rows.iter().skip(1) {
            let key = MaterialKey::new(
                cell(row, spec_col),
                cell(row, material_col),
                cell(row, temper_col),
            );
            if !key.is_complete() {
                debug!("{file}: dropping row with incomplete key '{key}'");
                continue;
            }
            let range = ConductivityRange {
                min: parse_float(cell(row, min_col)),
                max: parse_float(cell(row, max_col)),
            };
            entries.insert(key, range);
        }
        Ok(ConductivityIndex { entries })
    }

    /// Range for an exact key match; unknown keys yield absent bounds.
    pub fn get(&self, key: &MaterialKey) -> ConductivityRange {
        self.entries.get(key).copied().unwrap_or_default()
    }

    /// Iterate all known keys (for the enumeration helpers).
    pub fn keys(&self) -> impl Iterator<Item = &MaterialKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::super::rows;
    use super::*;

    #[test]
    fn test_build_and_lookup() {
        let index = ConductivityIndex::from_rows(
            "test.txt",
            &rows(&[
                "Spec\tMaterial\tTemper\tMin\tMax",
                "XXX2\t7075\tT6XX\t30.0\t45.0",
            ]),
        )
        .unwrap();

        let range = index.get(&MaterialKey::new("xxx2", " 7075 ", "t6xx"));
        assert_eq!(range.min, Some(30.0));
        assert_eq!(range.max, Some(45.0));
    }

    #[test]
    fn test_header_any_order_and_case() {
        let index = ConductivityIndex::from_rows(
            "test.txt",
            &rows(&["MAX\tTEMPER\tmin\tspec\tmaterial", "40\tT3\t20\tAA\t2024"]),
        )
        .unwrap();

        let range = index.get(&MaterialKey::new("AA", "2024", "T3"));
        assert_eq!(range.min, Some(20.0));
        assert_eq!(range.max, Some(40.0));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let err = ConductivityIndex::from_rows(
            "baseconductivity.txt",
            &rows(&["spec\tmaterial\tmin\tmax", "A\tB\t1\t2"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DataError::missing_column("baseconductivity.txt", "temper")
        );
    }

    #[test]
    fn test_empty_file_is_missing_columns() {
        let err = ConductivityIndex::from_rows("test.txt", &[]).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_COLUMN");
    }

    #[test]
    fn test_incomplete_keys_dropped() {
        let index = ConductivityIndex::from_rows(
            "test.txt",
            &rows(&[
                "spec\tmaterial\ttemper\tmin\tmax",
                "\t7075\tT6\t1\t2",
                "A\t  \tT6\t1\t2",
                "A\t7075\tT6\t1\t2",
            ]),
        )
        .unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_unparseable_bounds_are_absent() {
        let index = ConductivityIndex::from_rows(
            "test.txt",
            &rows(&["spec\tmaterial\ttemper\tmin\tmax", "A\tB\tC\tn/a\t45.0"]),
        )
        .unwrap();

        let range = index.get(&MaterialKey::new("A", "B", "C"));
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(45.0));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let index = ConductivityIndex::from_rows(
            "test.txt",
            &rows(&[
                "spec\tmaterial\ttemper\tmin\tmax",
                "A\tB\tC\t10\t20",
                "A\tB\tC\t30\t40",
            ]),
        )
        .unwrap();

        let range = index.get(&MaterialKey::new("A", "B", "C"));
        assert_eq!(range.min, Some(30.0));
    }

    #[test]
    fn test_unknown_key_yields_absent() {
        let index =
            ConductivityIndex::from_rows("test.txt", &rows(&["spec\tmaterial\ttemper\tmin\tmax"]))
                .unwrap();
        let range = index.get(&MaterialKey::new("NO", "SUCH", "KEY"));
        assert_eq!(range, ConductivityRange::default());
    }
}
