//! genversion-config
//!
//! Generator configuration model: line layout, output naming, the flag table
//! produced by the build system and the catalog of entries per section.
//! Owns the JSON persistence helpers. No rendering logic lives here.

pub mod catalog;
pub mod error;
pub mod flags;
pub mod manager;
pub mod model;

pub use catalog::{Catalog, CatalogEntry, CatalogSection, VarSpec};
pub use error::ConfigError;
pub use flags::{FlagTable, FlagValue};
pub use manager::ConfigManager;
pub use model::{Config, Layout, OutputNames};
