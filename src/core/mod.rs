//! Core module - enrichment rules, override table and record I/O

pub mod config;
pub mod enrich;
pub mod error;
pub mod loader;
pub mod numeric;
pub mod overrides;

pub use config::Config;
pub use enrich::{enrich, enrich_all};
pub use error::{EnrichError, Result};
pub use loader::{parse_records, read_records, write_artifacts, write_pretty};
pub use overrides::{OverrideTable, SeriesOverride, DEFAULT_COIL_KEY, DEFAULT_RESISTOR_KEY};
