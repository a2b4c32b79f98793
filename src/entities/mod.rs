//! Entity types for the component catalog

pub mod component;
pub mod layout;

pub use component::{
    filter_by_type, find_by_key, ComponentRecord, LeadConfiguration, LeadExit, LeadPattern,
    PartType,
};
pub use layout::{lead_holes, LeadHole};
