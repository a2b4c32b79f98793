//! Enrichment rules
//!
//! [`enrich`] maps one raw component record plus the override table to an
//! enriched copy. The rules run in a fixed order because later rules read
//! fields written by earlier ones:
//!
//! 1. lead configuration from `lead_exit`, else by part type
//! 2. lead diameter, defaulting to 0.8 mm
//! 3. suggested hole diameter = lead diameter + 0.3 mm, two decimals
//! 4. end inset for axial parts (series override, else 2.5 mm)
//! 5. lead spacing for radial parts (5.08 mm unless already set)
//! 6. coil body shape and lead pattern
//! 7. numeric voltage/power from free text
//! 8. all seven dimension fields declared
//! 9. tolerance declared
//!
//! The caller's record is never modified.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::error::{EnrichError, Result};
use crate::core::numeric::{extract_numeral, round_to};
use crate::core::overrides::OverrideTable;
use crate::entities::component::{
    fields, ComponentRecord, LeadConfiguration, LeadPattern, PartType,
};

/// Lead diameter assumed when the catalog has none
pub const DEFAULT_LEAD_DIAMETER_MM: f64 = 0.8;

/// Clearance added to the lead diameter for the drilled hole
pub const HOLE_CLEARANCE_MM: f64 = 0.3;

/// End inset for axial parts without a series override
pub const DEFAULT_END_INSET_MM: f64 = 2.5;

/// Standard 0.2" pitch
pub const DEFAULT_LEAD_SPACING_MM: f64 = 5.08;

const COIL_SHAPE: &str = "coil";

/// Enrich a single record.
///
/// Fails with [`EnrichError::MissingRequiredField`] when `part_type` is
/// absent or null, and with [`EnrichError::MalformedInput`] when
/// `part_type` is not text or `lead_diameter_mm` is not a number.
pub fn enrich(record: &ComponentRecord, overrides: &OverrideTable) -> Result<ComponentRecord> {
    let part_type = required_part_type(record)?;
    let mut enriched = record.clone();

    let configuration = classify_leads(record, &part_type);
    enriched.set(fields::LEAD_CONFIGURATION, configuration.as_str());

    let lead_diameter = normalize_lead_diameter(record, &mut enriched)?;
    enriched.set(
        fields::SUGGESTED_HOLE_DIAMETER_MM,
        round_to(lead_diameter + HOLE_CLEARANCE_MM, 2),
    );

    let brand = record.brand();
    let series = record.series();

    match configuration {
        LeadConfiguration::Axial => {
            if let Some(inset) = overrides.end_inset_mm(brand, series) {
                enriched.set(fields::END_INSET_MM, inset);
            } else if !enriched.contains(fields::END_INSET_MM) {
                enriched.set(fields::END_INSET_MM, DEFAULT_END_INSET_MM);
            }
        }
        LeadConfiguration::Radial => {
            if !enriched.contains(fields::LEAD_SPACING_MM) {
                enriched.set(fields::LEAD_SPACING_MM, DEFAULT_LEAD_SPACING_MM);
            }
        }
    }

    if is_coil(record, &part_type) {
        enriched.set(fields::BODY_SHAPE, COIL_SHAPE);
        if let Some(pattern) = overrides.lead_pattern(brand, series) {
            enriched.set(fields::LEAD_PATTERN, pattern);
        } else if !enriched.contains(fields::LEAD_PATTERN) {
            enriched.set(fields::LEAD_PATTERN, LeadPattern::default().as_str());
        }
    }

    normalize_voltage_or_power(&mut enriched);

    for field in fields::DIMENSIONS {
        enriched.declare(field);
    }
    enriched.declare(fields::TOLERANCE);

    debug!(
        key = %record.key(),
        part_type = %part_type,
        lead_configuration = %configuration,
        "enriched component"
    );

    Ok(enriched)
}

/// Enrich every record in order. The first failure aborts the batch and
/// carries the zero-based position of the offending record.
pub fn enrich_all(
    records: &[ComponentRecord],
    overrides: &OverrideTable,
) -> Result<Vec<ComponentRecord>> {
    let enriched = records
        .iter()
        .enumerate()
        .map(|(index, record)| enrich(record, overrides).map_err(|e| e.at_index(index)))
        .collect::<Result<Vec<_>>>()?;

    info!(count = enriched.len(), "enriched component batch");
    Ok(enriched)
}

fn required_part_type(record: &ComponentRecord) -> Result<PartType> {
    match record.non_null(fields::PART_TYPE) {
        None => Err(EnrichError::MissingRequiredField {
            index: 0,
            field: fields::PART_TYPE,
        }),
        Some(Value::String(s)) => Ok(PartType::from(s.as_str())),
        Some(other) => Err(EnrichError::malformed(format!(
            "part_type must be text, found {}",
            other
        ))),
    }
}

/// Rule 1: a recognized `lead_exit` decides; otherwise capacitors and
/// resistors are axial and everything else is radial.
fn classify_leads(record: &ComponentRecord, part_type: &PartType) -> LeadConfiguration {
    match record.lead_exit() {
        Some(exit) => exit.into(),
        None if part_type.is_axial_by_default() => LeadConfiguration::Axial,
        None => LeadConfiguration::Radial,
    }
}

/// Rule 2: returns the diameter used for the hole and writes it back.
/// A numeric catalog value is kept exactly as written.
fn normalize_lead_diameter(
    record: &ComponentRecord,
    enriched: &mut ComponentRecord,
) -> Result<f64> {
    match record.non_null(fields::LEAD_DIAMETER_MM) {
        None => {
            enriched.set(fields::LEAD_DIAMETER_MM, DEFAULT_LEAD_DIAMETER_MM);
            Ok(DEFAULT_LEAD_DIAMETER_MM)
        }
        Some(value) => value.as_f64().ok_or_else(|| {
            EnrichError::malformed(format!("lead_diameter_mm must be a number, found {}", value))
        }),
    }
}

/// Rule 6 condition: coil-shaped or an inductor, with a known outer diameter
fn is_coil(record: &ComponentRecord, part_type: &PartType) -> bool {
    let shaped_like_coil =
        record.body_shape() == Some(COIL_SHAPE) || *part_type == PartType::Inductor;
    shaped_like_coil && record.non_null(fields::OUTER_DIAMETER_MM).is_some()
}

/// Rule 7: text ratings become the first numeral they contain. Text with no
/// numeral is left as it is.
fn normalize_voltage_or_power(enriched: &mut ComponentRecord) {
    let Some(text) = enriched.str_field(fields::VOLTAGE_OR_POWER) else {
        return;
    };

    match extract_numeral(text) {
        Some(number) => enriched.set(fields::VOLTAGE_OR_POWER, number),
        None => warn!(
            key = %enriched.key(),
            voltage_or_power = text,
            "no numeral in voltage/power rating, leaving text as is"
        ),
    }
}
