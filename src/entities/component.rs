//! Component record type - a loosely typed catalog entry for a crossover part

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Part type of a catalog entry. The set is open; unknown types pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartType {
    Capacitor,
    Resistor,
    Inductor,
    Other(String),
}

impl PartType {
    /// Types that default to axial leads when no lead exit is recorded
    pub fn is_axial_by_default(&self) -> bool {
        matches!(self, PartType::Capacitor | PartType::Resistor)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PartType::Capacitor => "capacitor",
            PartType::Resistor => "resistor",
            PartType::Inductor => "inductor",
            PartType::Other(s) => s,
        }
    }
}

impl From<&str> for PartType {
    fn from(s: &str) -> Self {
        match s {
            "capacitor" => PartType::Capacitor,
            "resistor" => PartType::Resistor,
            "inductor" => PartType::Inductor,
            other => PartType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the leads leave the body, as recorded by the manufacturer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadExit {
    Axial,
    Radial,
    Tangential,
}

impl std::str::FromStr for LeadExit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "axial" => Ok(LeadExit::Axial),
            "radial" => Ok(LeadExit::Radial),
            "tangential" => Ok(LeadExit::Tangential),
            _ => Err(format!(
                "Invalid lead exit: {}. Use axial, radial, or tangential",
                s
            )),
        }
    }
}

/// Derived mounting configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadConfiguration {
    Axial,
    Radial,
}

impl LeadConfiguration {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadConfiguration::Axial => "axial",
            LeadConfiguration::Radial => "radial",
        }
    }
}

impl From<LeadExit> for LeadConfiguration {
    fn from(exit: LeadExit) -> Self {
        match exit {
            LeadExit::Axial => LeadConfiguration::Axial,
            LeadExit::Radial | LeadExit::Tangential => LeadConfiguration::Radial,
        }
    }
}

impl std::fmt::Display for LeadConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LeadConfiguration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "axial" => Ok(LeadConfiguration::Axial),
            "radial" => Ok(LeadConfiguration::Radial),
            _ => Err(format!(
                "Invalid lead configuration: {}. Use axial or radial",
                s
            )),
        }
    }
}

/// Where the two leads of a coil leave the winding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPattern {
    #[default]
    Adjacent,
    Opposite,
}

impl LeadPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadPattern::Adjacent => "adjacent",
            LeadPattern::Opposite => "opposite",
        }
    }
}

impl std::fmt::Display for LeadPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field names the enrichment rules read or write
pub mod fields {
    pub const PART_TYPE: &str = "part_type";
    pub const BRAND: &str = "brand";
    pub const SERIES: &str = "series";
    pub const VALUE: &str = "value";
    pub const VALUE_UNIT: &str = "value_unit";
    pub const LEAD_EXIT: &str = "lead_exit";
    pub const LEAD_CONFIGURATION: &str = "lead_configuration";
    pub const LEAD_DIAMETER_MM: &str = "lead_diameter_mm";
    pub const SUGGESTED_HOLE_DIAMETER_MM: &str = "suggested_hole_diameter_mm";
    pub const END_INSET_MM: &str = "end_inset_mm";
    pub const LEAD_SPACING_MM: &str = "lead_spacing_mm";
    pub const LEAD_PATTERN: &str = "lead_pattern";
    pub const BODY_SHAPE: &str = "body_shape";
    pub const VOLTAGE_OR_POWER: &str = "voltage_or_power";
    pub const TOLERANCE: &str = "tolerance";

    pub const BODY_DIAMETER_MM: &str = "body_diameter_mm";
    pub const BODY_LENGTH_MM: &str = "body_length_mm";
    pub const BODY_WIDTH_MM: &str = "body_width_mm";
    pub const BODY_HEIGHT_MM: &str = "body_height_mm";
    pub const OUTER_DIAMETER_MM: &str = "outer_diameter_mm";
    pub const INNER_DIAMETER_MM: &str = "inner_diameter_mm";
    pub const HEIGHT_MM: &str = "height_mm";

    /// Dimension fields every enriched record declares, null when unknown
    pub const DIMENSIONS: [&str; 7] = [
        BODY_DIAMETER_MM,
        BODY_LENGTH_MM,
        BODY_WIDTH_MM,
        BODY_HEIGHT_MM,
        OUTER_DIAMETER_MM,
        INNER_DIAMETER_MM,
        HEIGHT_MM,
    ];
}

/// A component record as found in the catalog.
///
/// Records are open-ended JSON objects: manufacturer-specific keys are
/// carried through untouched and key order is preserved. Accessors treat
/// JSON `null` the same as an absent key unless stated otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRecord(Map<String, Value>);

impl ComponentRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Raw value, `None` only when the key is absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the key is declared at all (a `null` value counts)
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Declare a key as explicit `null` if it is absent
    pub fn declare(&mut self, key: &str) {
        if !self.0.contains_key(key) {
            self.0.insert(key.to_string(), Value::Null);
        }
    }

    /// Value if present and not `null`
    pub fn non_null(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn f64_field(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn brand(&self) -> &str {
        self.str_field(fields::BRAND).unwrap_or("")
    }

    pub fn series(&self) -> &str {
        self.str_field(fields::SERIES).unwrap_or("")
    }

    pub fn part_type(&self) -> Option<PartType> {
        self.str_field(fields::PART_TYPE).map(PartType::from)
    }

    /// Recognized lead exit; unrecognized text reads as `None`
    pub fn lead_exit(&self) -> Option<LeadExit> {
        self.str_field(fields::LEAD_EXIT)
            .and_then(|s| s.parse().ok())
    }

    pub fn lead_configuration(&self) -> Option<LeadConfiguration> {
        self.str_field(fields::LEAD_CONFIGURATION)
            .and_then(|s| s.parse().ok())
    }

    pub fn body_shape(&self) -> Option<&str> {
        self.str_field(fields::BODY_SHAPE)
    }

    /// Catalog key: `{brand}-{series}-{value}{value_unit}`
    pub fn key(&self) -> String {
        let value = match self.non_null(fields::VALUE) {
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
            None => String::new(),
        };
        format!(
            "{}-{}-{}{}",
            self.brand(),
            self.series(),
            value,
            self.str_field(fields::VALUE_UNIT).unwrap_or("")
        )
    }
}

impl From<Map<String, Value>> for ComponentRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Find the record whose catalog key matches exactly
pub fn find_by_key<'a>(records: &'a [ComponentRecord], key: &str) -> Option<&'a ComponentRecord> {
    records.iter().find(|r| r.key() == key)
}

/// Records of the given part type, in catalog order
pub fn filter_by_type<'a>(
    records: &'a [ComponentRecord],
    part_type: &str,
) -> Vec<&'a ComponentRecord> {
    records
        .iter()
        .filter(|r| r.str_field(fields::PART_TYPE) == Some(part_type))
        .collect()
}
