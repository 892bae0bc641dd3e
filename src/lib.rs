//! Interactive dashboard over a static dataset of rocket launches.
//!
//! The launch table is loaded once at startup and shared read-only with
//! every request. The [`engine`] decides which records feed each chart,
//! [`charts`] turns those records into plotly figures, and [`api`] serves the
//! page together with the callback endpoint the page calls on every input
//! change.

pub mod api;
pub mod callbacks;
pub mod charts;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod layout;
pub mod models;
