//! Derivation of the tracked property set.
//!
//! The pieces here are pure apart from [`files::FileStat::from_path`]; the
//! reporter assembles them into a single [`TrackProperties`] value.

pub mod attrs;
pub mod event_name;
pub mod files;

pub use attrs::{TrackProperties, prop};
pub use event_name::{EventNameParts, Marker};
pub use files::{FileStat, compression_ratio};
