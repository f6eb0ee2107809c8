use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::metrics::TrackProperties;

/// Library name reported in `mp_lib`
pub const LIB_NAME: &str = "rust";

/// A single `track` call in the ingestion wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackEvent {
    pub event: String,
    pub properties: Map<String, Value>,
}

impl TrackEvent {
    /// Build an event stamped with the current time and a fresh insert id.
    pub fn new(token: &str, distinct_id: &str, event_name: &str, props: TrackProperties) -> Self {
        Self::with_stamp(
            token,
            distinct_id,
            event_name,
            props,
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4().simple().to_string(),
        )
    }

    /// Build an event with an explicit timestamp (unix millis) and insert id.
    ///
    /// User properties are applied after the library fields and win on
    /// key collisions.
    pub fn with_stamp(
        token: &str,
        distinct_id: &str,
        event_name: &str,
        props: TrackProperties,
        time_ms: i64,
        insert_id: String,
    ) -> Self {
        let mut properties = Map::new();
        properties.insert("token".to_string(), Value::from(token));
        properties.insert("distinct_id".to_string(), Value::from(distinct_id));
        properties.insert("time".to_string(), Value::from(time_ms));
        properties.insert("$insert_id".to_string(), Value::from(insert_id));
        properties.insert("mp_lib".to_string(), Value::from(LIB_NAME));
        properties.insert(
            "$lib_version".to_string(),
            Value::from(env!("CARGO_PKG_VERSION")),
        );
        properties.extend(props.into_map());

        TrackEvent {
            event: event_name.to_string(),
            properties,
        }
    }

    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_str())
    }
}

/// Body returned by the ingestion endpoint when `verbose=1` is requested.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackResponse {
    pub status: i32,
    #[serde(default)]
    pub error: Option<String>,
}

impl TrackResponse {
    pub fn is_success(&self) -> bool {
        self.status == 1
    }
}
