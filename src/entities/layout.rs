//! Lead hole layout for enriched components
//!
//! Positions are in millimetres in the board plane, centred on the
//! component body: `x` along the body axis, `z` across it.

use serde::Serialize;
use std::f64::consts::FRAC_PI_4;

use crate::entities::component::{fields, ComponentRecord, LeadConfiguration};

const FALLBACK_HOLE_DIAMETER_MM: f64 = 1.5;
const FALLBACK_CYLINDER_LENGTH_MM: f64 = 20.0;
const FALLBACK_RECTANGULAR_LENGTH_MM: f64 = 30.0;
const FALLBACK_END_INSET_MM: f64 = 2.0;
const FALLBACK_COIL_INNER_DIAMETER_MM: f64 = 15.0;
const FALLBACK_LEAD_SPACING_MM: f64 = 5.0;

/// One drilled hole
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadHole {
    pub x: f64,
    pub z: f64,
    pub diameter: f64,
}

impl LeadHole {
    fn new(x: f64, z: f64, diameter: f64) -> Self {
        Self { x, z, diameter }
    }
}

/// Non-zero measurement or the fallback
fn measured(record: &ComponentRecord, key: &str, fallback: f64) -> f64 {
    record
        .f64_field(key)
        .filter(|v| *v != 0.0)
        .unwrap_or(fallback)
}

/// Length of the body along its axis
fn body_length(record: &ComponentRecord) -> f64 {
    match record.body_shape() {
        Some("rectangular") => measured(record, fields::BODY_LENGTH_MM, FALLBACK_RECTANGULAR_LENGTH_MM),
        Some("cylinder") => measured(record, fields::BODY_LENGTH_MM, FALLBACK_CYLINDER_LENGTH_MM),
        _ => FALLBACK_CYLINDER_LENGTH_MM,
    }
}

/// Compute the two lead holes of an enriched record.
///
/// Records without a recognizable `lead_configuration` get no holes.
pub fn lead_holes(record: &ComponentRecord) -> Vec<LeadHole> {
    let diameter = measured(record, fields::SUGGESTED_HOLE_DIAMETER_MM, FALLBACK_HOLE_DIAMETER_MM);

    match record.lead_configuration() {
        Some(LeadConfiguration::Axial) => {
            let inset = measured(record, fields::END_INSET_MM, FALLBACK_END_INSET_MM);
            let offset = body_length(record) / 2.0 - inset;
            vec![
                LeadHole::new(-offset, 0.0, diameter),
                LeadHole::new(offset, 0.0, diameter),
            ]
        }
        Some(LeadConfiguration::Radial) if record.body_shape() == Some("coil") => {
            let radius =
                measured(record, fields::INNER_DIAMETER_MM, FALLBACK_COIL_INNER_DIAMETER_MM) / 2.0;
            if record.str_field(fields::LEAD_PATTERN) == Some("adjacent") {
                [0.0, FRAC_PI_4]
                    .iter()
                    .map(|angle| LeadHole::new(radius * angle.cos(), radius * angle.sin(), diameter))
                    .collect()
            } else {
                vec![
                    LeadHole::new(radius, 0.0, diameter),
                    LeadHole::new(-radius, 0.0, diameter),
                ]
            }
        }
        Some(LeadConfiguration::Radial) => {
            let half = measured(record, fields::LEAD_SPACING_MM, FALLBACK_LEAD_SPACING_MM) / 2.0;
            vec![
                LeadHole::new(-half, 0.0, diameter),
                LeadHole::new(half, 0.0, diameter),
            ]
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{enrich, OverrideTable};
    use serde_json::{json, Value};

    fn enriched(value: Value) -> ComponentRecord {
        enrich(&serde_json::from_value(value).unwrap(), &OverrideTable::builtin()).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_axial_cylinder_holes() {
        let record = enriched(json!({
            "part_type": "capacitor",
            "brand": "Jantzen Audio",
            "series": "Superior Z-Cap",
            "body_shape": "cylinder",
            "body_length_mm": 40.0
        }));
        let holes = lead_holes(&record);
        assert_eq!(holes.len(), 2);
        assert!(approx(holes[0].x, -17.0));
        assert!(approx(holes[1].x, 17.0));
        assert!(approx(holes[0].diameter, 1.1));
    }

    #[test]
    fn test_axial_fallback_lengths() {
        let record = enriched(json!({"part_type": "resistor", "body_shape": "rectangular"}));
        let holes = lead_holes(&record);
        // 30 mm body, 2.5 mm inset
        assert!(approx(holes[1].x, 12.5));

        let record = enriched(json!({"part_type": "resistor"}));
        assert!(approx(lead_holes(&record)[1].x, 7.5));
    }

    #[test]
    fn test_coil_adjacent_holes() {
        let record = enriched(json!({
            "part_type": "inductor",
            "outer_diameter_mm": 40.0,
            "inner_diameter_mm": 20.0
        }));
        let holes = lead_holes(&record);
        assert!(approx(holes[0].x, 10.0));
        assert!(approx(holes[0].z, 0.0));
        assert!(approx(holes[1].x, 10.0 * FRAC_PI_4.cos()));
        assert!(approx(holes[1].z, 10.0 * FRAC_PI_4.sin()));
    }

    #[test]
    fn test_coil_opposite_holes() {
        let record = enriched(json!({
            "part_type": "inductor",
            "brand": "Intertechnik",
            "series": "Air Core",
            "outer_diameter_mm": 30.0
        }));
        let holes = lead_holes(&record);
        // inner diameter falls back to 15 mm
        assert!(approx(holes[0].x, 7.5));
        assert!(approx(holes[1].x, -7.5));
        assert!(approx(holes[1].z, 0.0));
    }

    #[test]
    fn test_radial_spacing_holes() {
        let record = enriched(json!({"part_type": "capacitor", "lead_exit": "radial"}));
        let holes = lead_holes(&record);
        assert!(approx(holes[0].x, -2.54));
        assert!(approx(holes[1].x, 2.54));
    }

    #[test]
    fn test_unenriched_record_has_no_holes() {
        let record: ComponentRecord = serde_json::from_value(json!({"part_type": "capacitor"})).unwrap();
        assert!(lead_holes(&record).is_empty());
    }
}
