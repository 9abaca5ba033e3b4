//! Data file locations.
//!
//! The reference files live under one data directory with fixed names; only
//! the directory itself is configurable. Correction grids are optional and
//! numbered 1 through [`CORRECTION_TABLE_COUNT`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Highest correction-table number probed at load time.
pub const CORRECTION_TABLE_COUNT: u32 = 8;

/// Locations of the fixed-name reference files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    pub data_dir: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        DataPaths {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn conductivity(&self) -> PathBuf {
        self.data_dir.join("baseconductivity.txt")
    }

    pub fn bare_hardness_min(&self) -> PathBuf {
        self.data_dir.join("barehardnessmin.txt")
    }

    pub fn bare_hardness_max(&self) -> PathBuf {
        self.data_dir.join("barehardnessmax.txt")
    }

    pub fn clad_hardness_min(&self) -> PathBuf {
        self.data_dir.join("cladhardnessmin.txt")
    }

    pub fn clad_hardness_max(&self) -> PathBuf {
        self.data_dir.join("cladhardnessmax.txt")
    }

    pub fn tabcode(&self) -> PathBuf {
        self.data_dir.join("tabcode.txt")
    }

    pub fn correction_table(&self, number: u32) -> PathBuf {
        self.data_dir.join(format!("correctiontable{number}.txt"))
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths::new("data")
    }
}
