//! Brand/series override table
//!
//! A static, hand-curated table of field overrides keyed by brand and then by
//! series. Two reserved series keys hold per-brand defaults by component
//! kind: [`DEFAULT_RESISTOR_KEY`] and [`DEFAULT_COIL_KEY`].
//!
//! The table is built once and passed by reference into the enrichment
//! rules; nothing mutates it afterwards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::error::{EnrichError, Result};
use crate::entities::component::LeadPattern;

/// Reserved series key for a brand's resistor defaults
pub const DEFAULT_RESISTOR_KEY: &str = "_default_resistor";

/// Reserved series key for a brand's coil defaults
pub const DEFAULT_COIL_KEY: &str = "_default_coil";

/// Field overrides for one series (or one reserved default key)
///
/// Only `end_inset_mm` and `lead_pattern` feed the enrichment rules. Any
/// other field of an injected table is carried in `extra` so the written
/// artifact is the table that was used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesOverride {
    /// Distance from body end to the hole centre for axial parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_inset_mm: Option<f64>,

    /// Coil lead exit pattern, copied into the record as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_pattern: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeriesOverride {
    fn end_inset(mm: f64) -> Self {
        Self {
            end_inset_mm: Some(mm),
            ..Default::default()
        }
    }

    fn lead_pattern(pattern: LeadPattern) -> Self {
        Self {
            lead_pattern: Some(pattern.as_str().to_string()),
            ..Default::default()
        }
    }
}

/// Brand → series → overrides. Serializes as a plain nested JSON object
/// with sorted keys, so the artifact is identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideTable {
    brands: BTreeMap<String, BTreeMap<String, SeriesOverride>>,
}

impl OverrideTable {
    /// An empty table; every lookup falls through to the generic defaults
    pub fn empty() -> Self {
        Self::default()
    }

    /// The curated table shipped with the tool
    pub fn builtin() -> Self {
        let mut table = Self::empty();

        table.insert("Jantzen Audio", "Superior Z-Cap", SeriesOverride::end_inset(3.0));
        table.insert("Jantzen Audio", "Alumen Z-Cap", SeriesOverride::end_inset(2.5));
        table.insert(
            "Jantzen Audio",
            "Cross Coil",
            SeriesOverride::lead_pattern(LeadPattern::Adjacent),
        );
        table.insert(
            "Jantzen Audio",
            "Wax Coil",
            SeriesOverride::lead_pattern(LeadPattern::Adjacent),
        );

        table.insert("AUDYN", "True Copper Cap", SeriesOverride::end_inset(2.5));
        table.insert("AUDYN", "CAP PLUS", SeriesOverride::end_inset(2.5));

        table.insert("Mundorf", "MResist", SeriesOverride::end_inset(2.0));
        table.insert("Mundorf", "MOX", SeriesOverride::end_inset(2.0));

        table.insert("Intertechnik", DEFAULT_RESISTOR_KEY, SeriesOverride::end_inset(2.0));
        table.insert(
            "Intertechnik",
            DEFAULT_COIL_KEY,
            SeriesOverride::lead_pattern(LeadPattern::Opposite),
        );

        table
    }

    /// Load a table with the same shape as the serialized builtin one
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| EnrichError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            EnrichError::malformed(format!("override table is not brand → series → fields: {}", e))
        })
    }

    pub fn insert(&mut self, brand: &str, series: &str, overrides: SeriesOverride) {
        self.brands
            .entry(brand.to_string())
            .or_default()
            .insert(series.to_string(), overrides);
    }

    /// Exact-match lookup of a brand and series entry
    pub fn series(&self, brand: &str, series: &str) -> Option<&SeriesOverride> {
        self.brands.get(brand).and_then(|b| b.get(series))
    }

    /// Series-level end inset only; `_default_resistor` entries are not
    /// consulted.
    pub fn end_inset_mm(&self, brand: &str, series: &str) -> Option<f64> {
        self.series(brand, series).and_then(|s| s.end_inset_mm)
    }

    /// Coil lead pattern: the series entry first, then the brand's
    /// `_default_coil` entry.
    pub fn lead_pattern(&self, brand: &str, series: &str) -> Option<&str> {
        let entries = self.brands.get(brand)?;
        if let Some(pattern) = entries.get(series).and_then(|s| s.lead_pattern.as_deref()) {
            return Some(pattern);
        }
        entries
            .get(DEFAULT_COIL_KEY)
            .and_then(|s| s.lead_pattern.as_deref())
    }

    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.brands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.brands.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_series_lookup() {
        let table = OverrideTable::builtin();
        assert_eq!(table.end_inset_mm("Jantzen Audio", "Superior Z-Cap"), Some(3.0));
        assert_eq!(table.end_inset_mm("Mundorf", "MOX"), Some(2.0));
        assert_eq!(table.end_inset_mm("AUDYN", "CAP PLUS"), Some(2.5));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = OverrideTable::builtin();
        assert_eq!(table.end_inset_mm("jantzen audio", "Superior Z-Cap"), None);
        assert_eq!(table.end_inset_mm("Jantzen Audio", "Superior Z-Cap "), None);
        assert_eq!(table.end_inset_mm("", ""), None);
    }

    #[test]
    fn test_end_inset_ignores_resistor_default() {
        let table = OverrideTable::builtin();
        assert_eq!(table.end_inset_mm("Intertechnik", "MOX"), None);
        assert_eq!(table.end_inset_mm("Intertechnik", DEFAULT_RESISTOR_KEY), Some(2.0));
    }

    #[test]
    fn test_lead_pattern_tiers() {
        let table = OverrideTable::builtin();
        assert_eq!(
            table.lead_pattern("Jantzen Audio", "Wax Coil"),
            Some("adjacent")
        );
        assert_eq!(
            table.lead_pattern("Intertechnik", "Unlisted Coil"),
            Some("opposite")
        );
        // series entry exists but carries no pattern, and the brand has no coil default
        assert_eq!(table.lead_pattern("Jantzen Audio", "Superior Z-Cap"), None);
        assert_eq!(table.lead_pattern("Unknown Brand", "Wax Coil"), None);
    }

    #[test]
    fn test_series_pattern_wins_over_coil_default() {
        let mut table = OverrideTable::builtin();
        table.insert(
            "Intertechnik",
            "Air Core",
            SeriesOverride::lead_pattern(LeadPattern::Adjacent),
        );
        assert_eq!(
            table.lead_pattern("Intertechnik", "Air Core"),
            Some("adjacent")
        );
    }

    #[test]
    fn test_builtin_entry_count() {
        let table = OverrideTable::builtin();
        assert_eq!(table.len(), 10);
        let brands: Vec<&str> = table.brands().collect();
        assert_eq!(brands, vec!["AUDYN", "Intertechnik", "Jantzen Audio", "Mundorf"]);
    }

    #[test]
    fn test_builtin_is_reproducible() {
        let first = OverrideTable::builtin().to_json_pretty().unwrap();
        let second = OverrideTable::builtin().to_json_pretty().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_shape() {
        let json = OverrideTable::builtin().to_json_pretty().unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "AUDYN": {
            "CAP PLUS": {
              "end_inset_mm": 2.5
            },
            "True Copper Cap": {
              "end_inset_mm": 2.5
            }
          },
          "Intertechnik": {
            "_default_coil": {
              "lead_pattern": "opposite"
            },
            "_default_resistor": {
              "end_inset_mm": 2.0
            }
          },
          "Jantzen Audio": {
            "Alumen Z-Cap": {
              "end_inset_mm": 2.5
            },
            "Cross Coil": {
              "lead_pattern": "adjacent"
            },
            "Superior Z-Cap": {
              "end_inset_mm": 3.0
            },
            "Wax Coil": {
              "lead_pattern": "adjacent"
            }
          },
          "Mundorf": {
            "MOX": {
              "end_inset_mm": 2.0
            },
            "MResist": {
              "end_inset_mm": 2.0
            }
          }
        }
        "#);
    }

    #[test]
    fn test_from_json_roundtrip() {
        let table = OverrideTable::builtin();
        let parsed = OverrideTable::from_json(&table.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let err = OverrideTable::from_json(r#"["not", "a", "table"]"#).unwrap_err();
        assert!(matches!(err, EnrichError::MalformedInput { .. }));
    }

    #[test]
    fn test_injected_table_keeps_unknown_fields() {
        let content = r#"{"Acme": {"Gold": {"end_inset_mm": 1.5, "hole_edge_offset_mm": 3.0}}}"#;
        let table = OverrideTable::from_json(content).unwrap();
        assert_eq!(table.end_inset_mm("Acme", "Gold"), Some(1.5));

        let written: Value = serde_json::from_str(&table.to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({"Acme": {"Gold": {"end_inset_mm": 1.5, "hole_edge_offset_mm": 3.0}}})
        );
    }

    #[test]
    fn test_injected_lead_pattern_passes_through() {
        let table = OverrideTable::from_json(
            r#"{"Acme": {"_default_coil": {"lead_pattern": "staggered"}}}"#,
        )
        .unwrap();
        assert_eq!(table.lead_pattern("Acme", "Any Coil"), Some("staggered"));
    }
}
