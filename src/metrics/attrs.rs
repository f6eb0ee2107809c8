//! Property set attached to a tracked event.

use serde::Serialize;
use serde_json::{Map, Value};

/// Property names as they appear in the analytics project.
pub mod prop {
    pub const ELAPSED_TIME: &str = "Elapsed Time";
    pub const COMMAND: &str = "Command";
    pub const FILE: &str = "File";
    pub const OPEN_MODE: &str = "Open Mode";
    pub const COMPRESSION_LEVEL: &str = "Compression Level";
    pub const TEST: &str = "Test";
    pub const FULL_COMMAND: &str = "Full Command";
    pub const COMMAND_RESULT: &str = "Command Result";
    pub const EXIT_RESULT: &str = "Exit Result";
    pub const INPUT_FILE: &str = "Input File";
    pub const INPUT_FILE_SIZE: &str = "Input File Size";
    pub const OUTPUT_FILE: &str = "Output File";
    pub const OUTPUT_FILE_SIZE: &str = "Output File Size";
    pub const RATIO: &str = "Ratio";
}

/// Ordered string/number map. Keys keep insertion order on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TrackProperties {
    map: Map<String, Value>,
}

impl TrackProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, key: &str, value: impl Into<String>) -> Self {
        self.map.insert(key.to_string(), Value::String(value.into()));
        self
    }

    pub fn string_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.string(key, v),
            None => self,
        }
    }

    pub fn number(mut self, key: &str, value: u64) -> Self {
        self.map.insert(key.to_string(), Value::from(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.map.get(key).and_then(|v| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }
}
