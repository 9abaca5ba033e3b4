//! # Query Engine
//!
//! [`MaterialStore`] owns the five in-memory indices (conductivity, the four
//! hardness matrices, tabcodes, and the numbered correction grids), built
//! eagerly from the reference files and immutable afterwards. Queries are
//! pure reads; nothing mutates post-construction, so a store can be shared
//! freely once `load` returns.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{DataPaths, CORRECTION_TABLE_COUNT};
use crate::errors::DataResult;
use crate::key::{normalize, MaterialKey, Surface};
use crate::loader;
use crate::nearest::{nearest_requirement, THICKNESS_TOLERANCE};
use crate::tables::{ConductivityIndex, CorrectionTable, HardnessTable, TabCodeIndex};

/// Result of one point query. Any field may be absent; an unknown material
/// yields all four absent, which is a valid answer rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    pub corrected_min: Option<f64>,
    pub corrected_max: Option<f64>,
    pub hardness_min: Option<String>,
    pub hardness_max: Option<String>,
}

/// The lookup engine over the aluminum reference tables.
#[derive(Debug)]
pub struct MaterialStore {
    conductivity: ConductivityIndex,
    bare_min: HardnessTable,
    bare_max: HardnessTable,
    clad_min: HardnessTable,
    clad_max: HardnessTable,
    tabcodes: TabCodeIndex,
    corrections: HashMap<u32, CorrectionTable>,
}

impl MaterialStore {
    /// Build every index eagerly from the reference files.
    ///
    /// The conductivity, hardness, and tabcode files are required; a missing
    /// file or a missing required column aborts. Correction grids are
    /// optional: absent numbers are skipped silently.
    pub fn load(paths: &DataPaths) -> DataResult<Self> {
        let conductivity = {
            let path = paths.conductivity();
            let rows = loader::parse_rows_sniffed(&loader::read_text(&path)?);
            ConductivityIndex::from_rows(&file_label(&path), &rows)?
        };

        let bare_min = load_hardness(&paths.bare_hardness_min())?;
        let bare_max = load_hardness(&paths.bare_hardness_max())?;
        let clad_min = load_hardness(&paths.clad_hardness_min())?;
        let clad_max = load_hardness(&paths.clad_hardness_max())?;

        let tabcodes = {
            let path = paths.tabcode();
            let rows = loader::parse_rows_sniffed(&loader::read_text(&path)?);
            TabCodeIndex::from_rows(&file_label(&path), &rows)?
        };

        let mut corrections = HashMap::new();
        for number in 1..=CORRECTION_TABLE_COUNT {
            let path = paths.correction_table(number);
            if !path.is_file() {
                debug!("no correction table {number}, skipping");
                continue;
            }
            let rows = loader::parse_rows(&loader::read_text(&path)?);
            corrections.insert(number, CorrectionTable::from_rows(&rows));
        }

        info!(
            "loaded {} conductivity entries, {} tabcode entries, {} correction tables",
            conductivity.len(),
            tabcodes.len(),
            corrections.len()
        );

        Ok(MaterialStore {
            conductivity,
            bare_min,
            bare_max,
            clad_min,
            clad_max,
            tabcodes,
            corrections,
        })
    }

    /// Answer a point query.
    ///
    /// Key tokens are normalized before matching. The hardness requirement is
    /// the nearest series entry to the queried thickness; the conductivity
    /// bounds pass through the surface's correction grid when one is
    /// assigned, falling back to the uncorrected value otherwise.
    pub fn search_all(
        &self,
        spec: &str,
        material: &str,
        temper: &str,
        thickness: f64,
        surface: &str,
    ) -> SearchResult {
        let key = MaterialKey::new(spec, material, temper);
        let composite = key.composite();
        let range = self.conductivity.get(&key);
        let surface = Surface::from_input(surface);

        let (min_table, max_table) = self.hardness_tables(surface);
        let hardness_min =
            nearest_requirement(min_table.series(&composite), thickness, THICKNESS_TOLERANCE)
                .cloned();
        let hardness_max =
            nearest_requirement(max_table.series(&composite), thickness, THICKNESS_TOLERANCE)
                .cloned();

        let code = self.tabcodes.get(&composite).for_surface(surface);
        SearchResult {
            corrected_min: self.correct(range.min, code, thickness),
            corrected_max: self.correct(range.max, code, thickness),
            hardness_min,
            hardness_max,
        }
    }

    /// Distinct specs, sorted.
    pub fn specs(&self) -> Vec<String> {
        let mut specs: Vec<String> = self.conductivity.keys().map(|k| k.spec.clone()).collect();
        specs.sort();
        specs.dedup();
        specs
    }

    /// Distinct materials for a spec, sorted.
    pub fn materials(&self, spec: &str) -> Vec<String> {
        let spec = normalize(spec);
        let mut materials: Vec<String> = self
            .conductivity
            .keys()
            .filter(|k| k.spec == spec)
            .map(|k| k.material.clone())
            .collect();
        materials.sort();
        materials.dedup();
        materials
    }

    /// Distinct tempers for a (spec, material), sorted.
    pub fn tempers(&self, spec: &str, material: &str) -> Vec<String> {
        let spec = normalize(spec);
        let material = normalize(material);
        let mut tempers: Vec<String> = self
            .conductivity
            .keys()
            .filter(|k| k.spec == spec && k.material == material)
            .map(|k| k.temper.clone())
            .collect();
        tempers.sort();
        tempers.dedup();
        tempers
    }

    /// Distinct thicknesses with hardness data for a material and surface:
    /// the union of the points in the min and max series, sorted.
    pub fn thicknesses(
        &self,
        spec: &str,
        material: &str,
        temper: &str,
        surface: &str,
    ) -> Vec<f64> {
        let composite = MaterialKey::new(spec, material, temper).composite();
        let surface = Surface::from_input(surface);
        let (min_table, max_table) = self.hardness_tables(surface);
        let mut points: Vec<f64> = min_table
            .series(&composite)
            .iter()
            .chain(max_table.series(&composite))
            .map(|(thickness, _)| *thickness)
            .collect();
        points.sort_by(f64::total_cmp);
        points.dedup();
        points
    }

    fn hardness_tables(&self, surface: Surface) -> (&HardnessTable, &HardnessTable) {
        match surface {
            Surface::Bare => (&self.bare_min, &self.bare_max),
            Surface::Clad => (&self.clad_min, &self.clad_max),
        }
    }

    /// Two-axis correction with identity fallback: no table number assigned,
    /// no grid of that number on disk, or an absent grid cell all leave the
    /// base bound unchanged.
    fn correct(&self, base: Option<f64>, code: Option<u32>, thickness: f64) -> Option<f64> {
        let base = base?;
        let corrected = code
            .and_then(|number| self.corrections.get(&number))
            .and_then(|table| table.lookup(base, thickness));
        Some(corrected.unwrap_or(base))
    }
}

fn load_hardness(path: &Path) -> DataResult<HardnessTable> {
    let rows = loader::parse_rows(&loader::read_text(path)?);
    Ok(HardnessTable::from_rows(&rows))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
