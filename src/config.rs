//! Runtime configuration, read from command-line flags or the environment.
//!
//! Every setting has a default that reproduces the stock dashboard, so the
//! binary runs with no flags at all.

use std::path::PathBuf;

use clap::Args;

use crate::data::DEFAULT_DATA_PATH;
use crate::error::{DashboardError, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

/// Most ticks the payload slider may carry.
pub const MAX_SLIDER_MARKS: f64 = 1000.0;

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// CSV file holding the launch records
    #[arg(long, env = "LAUNCH_DASHBOARD_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, env = "LAUNCH_DASHBOARD_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for the HTTP server
    #[arg(short, long, env = "LAUNCH_DASHBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[command(flatten)]
    pub layout: LayoutConfig,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            layout: LayoutConfig::default(),
        }
    }
}

/// Page settings that do not depend on the loaded data.
#[derive(Debug, Clone, Args)]
pub struct LayoutConfig {
    /// Page heading
    #[arg(long, env = "LAUNCH_DASHBOARD_TITLE", default_value = "SpaceX Launch Records Dashboard")]
    pub title: String,

    /// Lowest tick on the payload slider
    #[arg(long, env = "LAUNCH_DASHBOARD_SLIDER_MIN", default_value_t = 0.0)]
    pub slider_min: f64,

    /// Highest tick on the payload slider
    #[arg(long, env = "LAUNCH_DASHBOARD_SLIDER_MAX", default_value_t = 10000.0)]
    pub slider_max: f64,

    /// Distance between slider ticks
    #[arg(long, env = "LAUNCH_DASHBOARD_SLIDER_STEP", default_value_t = 1000.0)]
    pub slider_step: f64,

    /// Launch sites offered in the dropdown, in order (defaults to the sites
    /// found in the data file)
    #[arg(long = "site", env = "LAUNCH_DASHBOARD_SITES", value_delimiter = ',')]
    pub sites: Vec<String>,
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.slider_min.is_finite() || !self.slider_max.is_finite() {
            return Err(DashboardError::Config(format!(
                "slider bounds must be finite, got {}..{}",
                self.slider_min, self.slider_max
            )));
        }
        if !(self.slider_step > 0.0) {
            return Err(DashboardError::Config(format!(
                "slider step must be positive, got {}",
                self.slider_step
            )));
        }
        if !(self.slider_min < self.slider_max) {
            return Err(DashboardError::Config(format!(
                "slider min {} must be below slider max {}",
                self.slider_min, self.slider_max
            )));
        }
        let ticks = (self.slider_max - self.slider_min) / self.slider_step;
        if !(ticks <= MAX_SLIDER_MARKS) {
            return Err(DashboardError::Config(format!(
                "slider range {}..{} with step {} needs {} ticks, at most {} allowed",
                self.slider_min, self.slider_max, self.slider_step, ticks, MAX_SLIDER_MARKS
            )));
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: "SpaceX Launch Records Dashboard".to_string(),
            slider_min: 0.0,
            slider_max: 10000.0,
            slider_step: 1000.0,
            sites: Vec::new(),
        }
    }
}
