//! # matcheck_core - Conductivity & Hardness Lookup Engine
//!
//! `matcheck_core` ingests the semi-structured aluminum reference tables
//! (conductivity ranges, hardness requirement matrices, correction-table
//! assignments, and numbered correction grids) and answers point queries:
//! given a material identity, a thickness, and a surface finish, return the
//! applicable conductivity range and hardness min/max requirement.
//!
//! The real exports these files come from are irregular (mixed delimiters,
//! legacy encodings, metadata rows, undeclared column roles), so ingestion
//! leans on structural heuristics and tolerates malformed individual rows
//! while refusing structurally broken files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use matcheck_core::{DataPaths, MaterialStore};
//!
//! let store = MaterialStore::load(&DataPaths::new("data")).unwrap();
//! let result = store.search_all("XXX2", "7075", "T6XX", 0.040, "BARE");
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`store`] - the query engine and its `search_all` / enumeration API
//! - [`tables`] - the four reference-table builders
//! - [`loader`] - encoding-robust file loading and row splitting
//! - [`nearest`] - the shared nearest-point search
//! - [`key`] - material identity, normalization, surface finish
//! - [`config`] - data file locations
//! - [`errors`] - structured error types

pub mod config;
pub mod errors;
pub mod fmt;
pub mod key;
pub mod loader;
pub mod nearest;
pub mod store;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use config::DataPaths;
pub use errors::{DataError, DataResult};
pub use key::{MaterialKey, Surface};
pub use store::{MaterialStore, SearchResult};
