use serde::{Deserialize, Serialize};

use super::{LaunchRecord, LaunchTable};
use crate::error::DashboardError;

/// Dropdown value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// The launch site chosen in the dropdown.
///
/// Travels over the wire as the plain dropdown value: `"ALL"` or the exact
/// site identifier. Site identifiers are compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(site) => site,
        }
    }

    /// Human-readable name used in chart titles.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Sites",
            Self::Site(site) => site,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => record.launch_site == *site,
        }
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        Self::All
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

/// Inclusive payload mass interval selected on the range slider.
///
/// Serialised as the slider's two-element `[low, high]` value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, DashboardError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(DashboardError::InvalidInput(format!(
                "payload range bounds must be finite, got [{}, {}]",
                low, high
            )));
        }
        if low > high {
            return Err(DashboardError::InvalidInput(format!(
                "payload range low bound {} exceeds high bound {}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// The range covering every payload in `table`; `[0, 0]` when empty.
    pub fn spanning(table: &LaunchTable) -> Self {
        Self {
            low: table.min_payload_mass_kg(),
            high: table.max_payload_mass_kg(),
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = DashboardError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

/// A read-only view over some of a table's records, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct Subset<'a> {
    records: Vec<&'a LaunchRecord>,
}

impl<'a> Subset<'a> {
    pub fn new(records: Vec<&'a LaunchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LaunchRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_owned_records(&self) -> Vec<LaunchRecord> {
        self.records.iter().map(|r| (*r).clone()).collect()
    }
}

/// A subset paired with the title of the chart it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub subset: Subset<'a>,
    pub title: String,
}

/// Success and failure tallies over a subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub successes: usize,
    pub failures: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.successes + self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_selection_parses_sentinel() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value("all"),
            SiteSelection::Site("all".to_string())
        );
    }

    #[test]
    fn site_selection_serialises_as_dropdown_value() {
        let json = serde_json::to_value(SiteSelection::Site("KSC LC-39A".into())).unwrap();
        assert_eq!(json, serde_json::json!("KSC LC-39A"));

        let parsed: SiteSelection = serde_json::from_value(serde_json::json!("ALL")).unwrap();
        assert_eq!(parsed, SiteSelection::All);
    }

    #[test]
    fn payload_range_rejects_reversed_bounds() {
        assert!(PayloadRange::new(5000.0, 1000.0).is_err());
        assert!(PayloadRange::new(f64::NAN, 1000.0).is_err());
        assert!(PayloadRange::new(1000.0, 1000.0).is_ok());
    }

    #[test]
    fn payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn payload_range_deserialises_from_slider_value() {
        let range: PayloadRange = serde_json::from_value(serde_json::json!([0, 9600])).unwrap();
        assert_eq!(range.low(), 0.0);
        assert_eq!(range.high(), 9600.0);

        let reversed: Result<PayloadRange, _> =
            serde_json::from_value(serde_json::json!([9600, 0]));
        assert!(reversed.is_err());
    }
}
