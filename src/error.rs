use std::fmt;

#[derive(Debug)]
pub enum TrackError {
    JsonError(serde_json::Error),
    /// Environment could not be deserialized into the config struct
    EnvError(envy::Error),
    /// `MIXPANEL_TOKEN` is unset or empty
    MissingToken,
    /// A supplied input/output file could not be inspected
    FileError {
        path: String,
        source: std::io::Error,
    },
    /// Transport-level failure talking to the ingestion endpoint
    HttpError(String),
    /// The ingestion endpoint answered but rejected the event
    ApiError {
        status: i32,
        message: String,
    },
    Generic(String),
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::JsonError(e) => write!(f, "JSON error: {}", e),
            TrackError::EnvError(e) => write!(f, "Environment error: {}", e),
            TrackError::MissingToken => write!(f, "No mixpanel project token found"),
            TrackError::FileError { path, source } => {
                write!(f, "Cannot read file '{}': {}", path, source)
            }
            TrackError::HttpError(e) => write!(f, "HTTP request failed: {}", e),
            TrackError::ApiError { status, message } => {
                write!(f, "Ingestion API error ({}): {}", status, message)
            }
            TrackError::Generic(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackError::JsonError(e) => Some(e),
            TrackError::EnvError(e) => Some(e),
            TrackError::FileError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TrackError {
    fn from(err: serde_json::Error) -> Self {
        TrackError::JsonError(err)
    }
}

impl From<envy::Error> for TrackError {
    fn from(err: envy::Error) -> Self {
        TrackError::EnvError(err)
    }
}

impl From<minreq::Error> for TrackError {
    fn from(err: minreq::Error) -> Self {
        TrackError::HttpError(err.to_string())
    }
}
