//! Event ingestion endpoint

use crate::api::client::ApiClient;
use crate::api::types::{TrackEvent, TrackResponse};
use crate::error::TrackError;
use crate::utils::debug_log;

/// Anything that can accept a tracked event.
pub trait EventSink {
    fn track(&self, event: &TrackEvent) -> Result<(), TrackError>;
}

/// Event ingestion endpoint
impl ApiClient {
    /// Send a single event to `/track`.
    ///
    /// # Returns
    /// * `Ok(TrackResponse)` - The endpoint accepted the event
    /// * `Err(TrackError)` - Transport failure, non-200 status, or a rejected event
    pub fn send_event(&self, event: &TrackEvent) -> Result<TrackResponse, TrackError> {
        let data = serde_json::to_string(&[event])?;
        let response =
            self.post_form("track", &[("data", data.as_str()), ("verbose", "1"), ("ip", "0")])?;
        let status_code = response.status_code;
        debug_log(&format!("Ingestion endpoint responded with {}", status_code));

        let body = response
            .as_str()
            .map_err(|e| TrackError::HttpError(format!("Failed to read response body: {}", e)))?;

        match status_code {
            200 => {
                let track_response: TrackResponse = serde_json::from_str(body)?;
                if track_response.is_success() {
                    Ok(track_response)
                } else {
                    Err(TrackError::ApiError {
                        status: status_code,
                        message: track_response
                            .error
                            .unwrap_or_else(|| "event rejected".to_string()),
                    })
                }
            }
            _ => Err(TrackError::ApiError {
                status: status_code,
                message: body.trim().to_string(),
            }),
        }
    }
}

impl EventSink for ApiClient {
    fn track(&self, event: &TrackEvent) -> Result<(), TrackError> {
        self.send_event(event).map(|_| ())
    }
}
