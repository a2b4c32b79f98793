//! CLI command implementations

pub mod completions;
pub mod defaults;
pub mod enrich;
pub mod holes;
pub mod list;
