// HTTP boundary for the GitHub REST API - one client, three read endpoints
pub mod github;
pub mod models;
pub mod query;

// Re-export common types
pub use github::{GitHubClient, GitHubError, Resource};
pub use models::{GitHubRepo, LanguageBreakdown, License, Owner};
pub use query::{RepoListQuery, RepoSort, RepoType, SortDirection};
