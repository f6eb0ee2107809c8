//! Report a single test run to the analytics ingestion endpoint.
//!
//! The binary parses the run parameters, derives properties from the event
//! name, the CI environment and the input/output files, and sends one
//! `track` event.

pub mod api;
pub mod ci;
pub mod cli_parser;
pub mod config;
pub mod error;
pub mod metrics;
pub mod reporter;
pub mod utils;

pub use api::{ApiClient, EventSink, TrackEvent};
pub use config::Config;
pub use error::TrackError;
pub use reporter::{TrackArgs, report};
