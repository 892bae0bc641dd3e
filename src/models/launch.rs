use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Binary launch outcome as recorded in the dataset's `class` column.
///
/// Serialised as the integer it was loaded from (`1` for success, `0` for
/// failure) so chart consumers see the same values the dataset uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Failure),
            1 => Ok(Self::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.as_u8()
    }
}

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Sequential flight number, when the dataset carries one.
    pub flight_number: Option<u32>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    /// Full booster version string (e.g. `F9 v1.0  B0003`), when present.
    pub booster_version: Option<String>,
    /// Coarse booster family used only for colouring chart points.
    pub booster_version_category: String,
    pub outcome_class: OutcomeClass,
}

/// The full set of launch records, loaded once at startup.
///
/// Cloning is cheap: the records live behind an [`Arc`] and are never
/// mutated after construction. Payload bounds and the distinct site list
/// are computed once here so the page layout and the HTTP surface can read
/// them without rescanning.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    inner: Arc<TableData>,
}

#[derive(Debug)]
struct TableData {
    records: Vec<LaunchRecord>,
    min_payload_mass_kg: f64,
    max_payload_mass_kg: f64,
    sites: Vec<String>,
}

impl LaunchTable {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let (min_payload_mass_kg, max_payload_mass_kg) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg))
            })
        };

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        Self {
            inner: Arc::new(TableData {
                records,
                min_payload_mass_kg,
                max_payload_mass_kg,
                sites,
            }),
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.inner.records
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    pub fn min_payload_mass_kg(&self) -> f64 {
        self.inner.min_payload_mass_kg
    }

    pub fn max_payload_mass_kg(&self) -> f64 {
        self.inner.max_payload_mass_kg
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.inner.sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, class: OutcomeClass) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version: None,
            booster_version_category: "FT".to_string(),
            outcome_class: class,
        }
    }

    #[test]
    fn empty_table_has_zero_bounds() {
        let table = LaunchTable::new(vec![]);
        assert!(table.is_empty());
        assert_eq!(table.min_payload_mass_kg(), 0.0);
        assert_eq!(table.max_payload_mass_kg(), 0.0);
        assert!(table.sites().is_empty());
    }

    #[test]
    fn computes_bounds_and_distinct_sites_in_order() {
        let table = LaunchTable::new(vec![
            record("KSC LC-39A", 5300.0, OutcomeClass::Success),
            record("CCAFS LC-40", 0.0, OutcomeClass::Failure),
            record("KSC LC-39A", 9600.0, OutcomeClass::Success),
        ]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.min_payload_mass_kg(), 0.0);
        assert_eq!(table.max_payload_mass_kg(), 9600.0);
        assert_eq!(table.sites(), &["KSC LC-39A", "CCAFS LC-40"]);
    }

    #[test]
    fn clones_share_records() {
        let table = LaunchTable::new(vec![record("VAFB SLC-4E", 500.0, OutcomeClass::Failure)]);
        let clone = table.clone();
        assert!(std::ptr::eq(table.records(), clone.records()));
    }

    #[test]
    fn outcome_class_round_trips_through_integer() {
        assert_eq!(OutcomeClass::try_from(1), Ok(OutcomeClass::Success));
        assert_eq!(OutcomeClass::try_from(0), Ok(OutcomeClass::Failure));
        assert!(OutcomeClass::try_from(2).is_err());
        assert_eq!(
            serde_json::to_value(OutcomeClass::Success).unwrap(),
            serde_json::json!(1)
        );
    }
}
