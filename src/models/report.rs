use serde::{Deserialize, Serialize};

use super::{LaunchRecord, OutcomeCounts};

/// JSON view of an outcome breakdown selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeBreakdown {
    pub site: String,
    pub title: String,
    pub counts: OutcomeCounts,
    pub records: Vec<LaunchRecord>,
}

/// JSON view of a payload correlation selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadCorrelation {
    pub site: String,
    pub title: String,
    pub low: f64,
    pub high: f64,
    pub records: Vec<LaunchRecord>,
}

/// Summary returned by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub records: usize,
}
