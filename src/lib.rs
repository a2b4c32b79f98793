//! xenrich: crossover component enrichment
//!
//! Derives manufacturing fields (lead configuration, hole diameters, insets,
//! lead spacing and coil lead patterns) for a catalog of capacitors,
//! resistors and inductors, driven by a static brand/series override table.

pub mod cli;
pub mod core;
pub mod entities;
