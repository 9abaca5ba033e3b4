//! # Material Identity
//!
//! The key types shared by every index: a material is identified by its
//! (spec, material, temper) triple, and the hardness/tabcode tables join on
//! the hyphenated composite rendering of that triple.
//!
//! All tokens pass through [`normalize`] before any comparison, storage, or
//! composite-key construction, so case and surrounding whitespace in user
//! input or source files never affect matching.
//!
//! ## Example
//!
//! ```rust
//! use matcheck_core::key::MaterialKey;
//!
//! let key = MaterialKey::new(" xxx2 ", "7075", "t6xx");
//! assert_eq!(key.composite(), "XXX2-7075-T6XX");
//! ```

use serde::{Deserialize, Serialize};

/// Normalize a key token: trim surrounding whitespace, uppercase.
pub fn normalize(token: &str) -> String {
    token.trim().to_uppercase()
}

/// Identifies one material/temper combination.
///
/// Fields are always normalized; construct through [`MaterialKey::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialKey {
    pub spec: String,
    pub material: String,
    pub temper: String,
}

impl MaterialKey {
    /// Build a key from raw tokens, normalizing each.
    pub fn new(spec: &str, material: &str, temper: &str) -> Self {
        MaterialKey {
            spec: normalize(spec),
            material: normalize(material),
            temper: normalize(temper),
        }
    }

    /// True when every token is non-empty after normalization.
    ///
    /// Rows with incomplete keys are malformed source data and are dropped
    /// during ingestion.
    pub fn is_complete(&self) -> bool {
        !self.spec.is_empty() && !self.material.is_empty() && !self.temper.is_empty()
    }

    /// The hyphen-joined composite rendering, e.g. `"XXX2-7075-T6XX"`.
    ///
    /// This is the join key between the hardness tables, the tabcode table,
    /// and the conductivity index.
    pub fn composite(&self) -> String {
        format!("{}-{}-{}", self.spec, self.material, self.temper)
    }
}

impl std::fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.composite())
    }
}

/// Surface finish of the sheet under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    #[serde(rename = "BARE")]
    Bare,
    #[serde(rename = "CLAD")]
    Clad,
}

impl Surface {
    /// All surface variants for UI selection
    pub const ALL: [Surface; 2] = [Surface::Bare, Surface::Clad];

    /// Resolve a raw surface value.
    ///
    /// Anything that does not normalize to exactly `"BARE"` is treated as
    /// clad, including the empty string. The source data defines no rejection
    /// path for unrecognized surface values, so neither do we.
    pub fn from_input(raw: &str) -> Self {
        if normalize(raw) == "BARE" {
            Surface::Bare
        } else {
            Surface::Clad
        }
    }

    /// Get the code string used in the tabcode table (e.g., "BARE")
    pub fn code(&self) -> &'static str {
        match self {
            Surface::Bare => "BARE",
            Surface::Clad => "CLAD",
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
