//! Hardness requirement matrices.
//!
//! These files carry no declared schema: a few metadata rows, then a header
//! row of hyphen-joined composite keys (`SPEC-MATERIAL-TEMPER`), a row with a
//! "Thickness" label, and a body of requirement values keyed by thickness.
//! Real exports are irregular, so the layout is recovered by a fixed sequence
//! of structural probes, each a pure function over the row slice:
//!
//! 1. header row: first of the leading rows where at least
//!    [`HEADER_MIN_KEY_CELLS`] cells look like composite keys, else row 0
//! 2. thickness row: first row anywhere containing a "thickness" cell
//! 3. thickness column: probed in the row after the thickness row, preferring
//!    a float with a decimal point over a bare integer count
//! 4. body: everything after the thickness row, rows without a parseable
//!    thickness skipped whole
//!
//! The priority order of these rules is load-bearing; do not reorder them.

use std::collections::HashMap;

use log::debug;

use super::{cell, parse_float};
use crate::key::normalize;

/// Ascending-by-thickness series of (thickness, requirement) pairs for one
/// composite key. Requirements are free text; absent cells stay `None`.
/// Duplicate thicknesses are preserved in encounter order.
pub type HardnessSeries = Vec<(f64, Option<String>)>;

/// Rows scanned from the top when looking for the header row.
const HEADER_SCAN_ROWS: usize = 10;
/// Composite-key cells required for a row to qualify as the header.
const HEADER_MIN_KEY_CELLS: usize = 5;
/// Hyphens that make a cell look like a `SPEC-MATERIAL-TEMPER` key.
const COMPOSITE_MIN_HYPHENS: usize = 2;

/// One parsed hardness matrix: a series per composite key.
#[derive(Debug, Default)]
pub struct HardnessTable {
    series: HashMap<String, HardnessSeries>,
}

impl HardnessTable {
    /// Recover the matrix structure from pre-split rows.
    ///
    /// Never fails: a file where the landmarks cannot be found simply yields
    /// empty series, and individual rows without a parseable thickness are
    /// dropped.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        if rows.is_empty() {
            return HardnessTable::default();
        }

        let header_row = detect_header_row(rows).unwrap_or(0);
        let thickness_row = detect_thickness_row(rows);
        let thickness_col = thickness_row.and_then(|row| detect_thickness_col(rows, row));
        let key_columns = composite_key_columns(&rows[header_row]);

        let mut series: HashMap<String, HardnessSeries> = key_columns
            .iter()
            .map(|(_, key)| (key.clone(), Vec::new()))
            .collect();

        // Data begins right after the thickness row, or after the header row
        // when no thickness row exists (in which case no thickness column was
        // detected and every body row is skipped).
        let data_start = thickness_row.map(|row| row + 1).unwrap_or(header_row + 1);
        if let Some(col) = thickness_col {
            for row in rows.iter().skip(data_start) {
                let Some(thickness) = parse_float(cell(row, col)) else {
                    debug!("dropping body row without parseable thickness");
                    continue;
                };
                for (index, key) in &key_columns {
                    let value = cell(row, *index).trim();
                    let value = (!value.is_empty()).then(|| value.to_string());
                    if let Some(pairs) = series.get_mut(key) {
                        pairs.push((thickness, value));
                    }
                }
            }
        }

        for pairs in series.values_mut() {
            // Stable, so duplicate thicknesses keep encounter order
            pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        }

        HardnessTable { series }
    }

    /// Series for a composite key; unknown keys yield an empty series.
    pub fn series(&self, composite: &str) -> &[(f64, Option<String>)] {
        self.series
            .get(composite)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Composite keys present in this matrix.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

fn looks_like_composite(raw: &str) -> bool {
    raw.matches('-').count() >= COMPOSITE_MIN_HYPHENS
}

/// First of the leading rows where enough cells look like composite keys.
fn detect_header_row(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter()
        .take(HEADER_SCAN_ROWS)
        .position(|row| {
            row.iter()
                .filter(|cell| looks_like_composite(cell.as_str()))
                .count()
                >= HEADER_MIN_KEY_CELLS
        })
}

/// First row anywhere containing a cell that says "thickness".
fn detect_thickness_row(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter().position(|row| {
        row.iter()
            .any(|cell| cell.trim().eq_ignore_ascii_case("thickness"))
    })
}

/// Thickness column, probed in the row right after the thickness row.
///
/// Prefer the first cell that parses as a float AND contains a decimal point
/// (a thickness, not an integer count); fall back to the first float at all.
fn detect_thickness_col(rows: &[Vec<String>], thickness_row: usize) -> Option<usize> {
    let probe = rows.get(thickness_row + 1)?;
    probe
        .iter()
        .position(|cell| {
            let cell = cell.trim();
            parse_float(cell).is_some() && cell.contains('.')
        })
        .or_else(|| probe.iter().position(|cell| parse_float(cell).is_some()))
}

/// Composite-key columns from the header row: (position, normalized key).
fn composite_key_columns(header: &[String]) -> Vec<(usize, String)> {
    header
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let key = raw.trim();
            (!key.is_empty() && looks_like_composite(key)).then(|| (index, normalize(key)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::rows;
    use super::*;

    /// A realistic fixture: metadata rows, composite-key header, thickness
    /// label row, then the body.
    fn fixture() -> Vec<Vec<String>> {
        rows(&[
            "Hardness requirements\t\t\t\t\t\t",
            "Revision C\t\t\t\t\t\t",
            "\tA-1-T1\tA-2-T2\tA-3-T3\tA-4-T4\tA-5-T5\tXXX2-7075-T6XX",
            "Thickness\t\t\t\t\t\t",
            "0.020\t10\t\t30\t40\t50\t60",
            "0.040\t11\t21\t31\t41\t51\t61",
            "bad\t12\t22\t32\t42\t52\t62",
            "0.030\t13\t23\t33\t43\t53\t63",
        ])
    }

    #[test]
    fn test_full_parse() {
        let table = HardnessTable::from_rows(&fixture());
        assert_eq!(table.len(), 6);

        // Sorted ascending by thickness; the "bad" row is gone
        let series = table.series("XXX2-7075-T6XX");
        let thicknesses: Vec<f64> = series.iter().map(|(t, _)| *t).collect();
        assert_eq!(thicknesses, vec![0.020, 0.030, 0.040]);
        assert_eq!(series[2].1.as_deref(), Some("61"));
    }

    #[test]
    fn test_empty_cells_become_absent() {
        let table = HardnessTable::from_rows(&fixture());
        let series = table.series("A-2-T2");
        assert_eq!(series[0], (0.020, None));
    }

    #[test]
    fn test_unknown_key_yields_empty_series() {
        let table = HardnessTable::from_rows(&fixture());
        assert!(table.series("NO-SUCH-KEY").is_empty());
    }

    #[test]
    fn test_header_detection_skips_metadata_rows() {
        // A metadata row with a few hyphenated words must not qualify
        let table = HardnessTable::from_rows(&rows(&[
            "as-rolled\tre-test\tnon-standard\t\t\t",
            "\tA-1-T1\tB-2-T2\tC-3-T3\tD-4-T4\tE-5-T5",
            "Thickness\t",
            "0.020\t1\t2\t3\t4\t5",
        ]));
        assert!(table.series("A-1-T1").len() == 1);
        // "as-rolled" has one hyphen; never a key
        assert!(table.series("AS-ROLLED").is_empty());
    }

    #[test]
    fn test_header_defaults_to_row_zero() {
        // Fewer than five key cells: no row qualifies, row 0 is the header
        let table = HardnessTable::from_rows(&rows(&[
            "\tA-1-T1\tB-2-T2",
            "Thickness\t\t",
            "0.020\t7\t8",
        ]));
        assert_eq!(table.series("A-1-T1"), &[(0.020, Some("7".to_string()))]);
        assert_eq!(table.series("B-2-T2"), &[(0.020, Some("8".to_string()))]);
    }

    #[test]
    fn test_thickness_col_prefers_decimal_point() {
        // Column 0 holds integer row counts; column 1 holds real thicknesses
        let table = HardnessTable::from_rows(&rows(&[
            "\t\tA-1-T1\tB-2-T2\tC-3-T3\tD-4-T4\tE-5-T5",
            "\tThickness\t\t\t\t\t",
            "1\t0.020\t10\t20\t30\t40\t50",
            "2\t0.040\t11\t21\t31\t41\t51",
        ]));
        let series = table.series("A-1-T1");
        assert_eq!(
            series,
            &[
                (0.020, Some("10".to_string())),
                (0.040, Some("11".to_string()))
            ]
        );
    }

    #[test]
    fn test_thickness_col_falls_back_to_any_float() {
        let table = HardnessTable::from_rows(&rows(&[
            "A-1-T1\tB-2-T2",
            "Thickness\t",
            "20\t7",
            "40\t8",
        ]));
        assert_eq!(
            table.series("A-1-T1"),
            &[(20.0, Some("20".to_string())), (40.0, Some("40".to_string()))]
        );
    }

    #[test]
    fn test_no_thickness_row_yields_empty_series() {
        // Without the label row no thickness column is detected, so every
        // body row is skipped
        let table = HardnessTable::from_rows(&rows(&[
            "A-1-T1\tB-2-T2",
            "0.020\t7",
        ]));
        assert!(table.series("A-1-T1").is_empty());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_thickness_preserved_in_order() {
        let table = HardnessTable::from_rows(&rows(&[
            "\tA-1-T1\tB-2-T2",
            "Thickness\t\t",
            "0.040\tfirst\t",
            "0.020\tlow\t",
            "0.040\tsecond\t",
        ]));
        let series = table.series("A-1-T1");
        assert_eq!(
            series,
            &[
                (0.020, Some("low".to_string())),
                (0.040, Some("first".to_string())),
                (0.040, Some("second".to_string())),
            ]
        );
    }

    #[test]
    fn test_short_file() {
        assert!(HardnessTable::from_rows(&[]).is_empty());
        let table = HardnessTable::from_rows(&rows(&["just one row"]));
        assert!(table.is_empty());
    }

    #[test]
    fn test_blank_rows_in_body_are_skipped() {
        let mut fixture_rows = fixture();
        fixture_rows.insert(5, Vec::new());
        let table = HardnessTable::from_rows(&fixture_rows);
        assert_eq!(table.series("XXX2-7075-T6XX").len(), 3);
    }
}
