//! Domain models for the launch dashboard.
//!
//! # Core Concepts
//!
//! - [`LaunchRecord`]: One launch attempt, one row of the dataset.
//! - [`LaunchTable`]: The immutable, shared sequence of records loaded at startup.
//! - [`SiteSelection`]: The dropdown input, either every site or one exact site.
//! - [`PayloadRange`]: The slider input, an inclusive payload mass interval.
//! - [`Subset`]: A read-only view over a table, produced by the selection engine.
//!
//! The report types are the JSON bodies of the `/api/v1` endpoints.

mod launch;
mod report;
mod selection;

pub use launch::*;
pub use report::*;
pub use selection::*;
