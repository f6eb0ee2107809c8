use serde::Deserialize;

use crate::ci::GithubCiContext;
use crate::error::TrackError;

/// Default ingestion base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.mixpanel.com";

/// Runtime configuration, resolved once from the environment and passed
/// explicitly to the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    token: String,
    api_base_url: String,
    ci: GithubCiContext,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct EnvConfig {
    mixpanel_token: Option<String>,
    mixpanel_api_url: Option<String>,
}

impl Config {
    /// Build from the process environment. Variables whose name or value is
    /// not valid UTF-8 are skipped.
    pub fn from_env() -> Result<Self, TrackError> {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Build from an explicit set of variables.
    ///
    /// Fails with [`TrackError::MissingToken`] when `MIXPANEL_TOKEN` is unset or empty.
    pub fn from_vars<I>(vars: I) -> Result<Self, TrackError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();
        let env_cfg: EnvConfig = envy::from_iter(vars.iter().cloned())?;

        let token = env_cfg
            .mixpanel_token
            .filter(|s| !s.is_empty())
            .ok_or(TrackError::MissingToken)?;

        let api_base_url = env_cfg
            .mixpanel_api_url
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let ci = GithubCiContext::from_vars(vars)?;

        Ok(Config {
            token,
            api_base_url,
            ci,
        })
    }

    /// Build directly from parts, bypassing the environment.
    pub fn new(token: impl Into<String>, api_base_url: Option<String>, ci: GithubCiContext) -> Self {
        Config {
            token: token.into(),
            api_base_url: api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            ci,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn ci(&self) -> &GithubCiContext {
        &self.ci
    }
}
