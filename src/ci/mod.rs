pub mod github;

pub use github::GithubCiContext;
