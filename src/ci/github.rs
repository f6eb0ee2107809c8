use crate::error::TrackError;
use serde::Deserialize;

/// Raw view of the CI variables as envy sees them (keys are lowercased).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
struct GithubCiEnv {
    github_workflow: Option<String>,
    github_repo: Option<String>,
    github_repository: Option<String>,
    github_sha: Option<String>,
    github_ref: Option<String>,
    github_action: Option<String>,
    github_actor: Option<String>,
    matrix_name: Option<String>,
}

/// CI metadata attached to every tracked event.
///
/// Each field is independently present or absent. A variable that is set to
/// an empty string is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GithubCiContext {
    pub workflow: Option<String>,
    pub repository: Option<String>,
    pub sha: Option<String>,
    pub git_ref: Option<String>,
    pub action: Option<String>,
    pub actor: Option<String>,
    pub matrix_name: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl GithubCiContext {
    /// Build the context from an explicit set of environment variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, TrackError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env: GithubCiEnv = envy::from_iter(vars)?;

        Ok(GithubCiContext {
            workflow: non_empty(env.github_workflow),
            // GITHUB_REPO is the historical name used by our workflows;
            // fall back to the variable GitHub Actions sets itself.
            repository: non_empty(env.github_repo).or_else(|| non_empty(env.github_repository)),
            sha: non_empty(env.github_sha),
            git_ref: non_empty(env.github_ref),
            action: non_empty(env.github_action),
            actor: non_empty(env.github_actor),
            matrix_name: non_empty(env.matrix_name),
        })
    }

    /// Property name/value pairs for every field that is present, in a fixed order.
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub Workflow", &self.workflow),
            ("GitHub Repository", &self.repository),
            ("GitHub SHA", &self.sha),
            ("GitHub Ref", &self.git_ref),
            ("GitHub Action", &self.action),
            ("GitHub Actor", &self.actor),
            ("Matrix Name", &self.matrix_name),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.properties().is_empty()
    }
}
