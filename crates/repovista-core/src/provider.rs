// Bridges the GitHub API client into the domain model
use async_trait::async_trait;
use repovista_api::{GitHubClient, LanguageBreakdown, RepoListQuery};

use crate::{models::Repository, Result};

/// Seam between the data layer and whatever renders it.
///
/// There is only one real implementation, but the trait keeps view code
/// testable without a network.
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    async fn list_repositories(&self, query: &RepoListQuery) -> Result<Vec<Repository>>;
    async fn repository_details(&self, name: &str) -> Result<Repository>;
    async fn repository_languages(&self, name: &str) -> Result<LanguageBreakdown>;
}

/// The GitHub-backed provider - a thin adapter over [`GitHubClient`].
pub struct GitHubProvider {
    client: GitHubClient,
}

impl GitHubProvider {
    pub fn new() -> Self {
        Self {
            client: GitHubClient::new(),
        }
    }

    pub fn with_client(client: GitHubClient) -> Self {
        Self { client }
    }
}

impl Default for GitHubProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryProvider for GitHubProvider {
    async fn list_repositories(&self, query: &RepoListQuery) -> Result<Vec<Repository>> {
        let repos = self.client.list_repositories(query).await?;
        tracing::debug!(count = repos.len(), "fetched repository page");
        Ok(repos.into_iter().map(Repository::from).collect())
    }

    async fn repository_details(&self, name: &str) -> Result<Repository> {
        let repo = self.client.get_repository(name).await?;
        Ok(Repository::from(repo))
    }

    async fn repository_languages(&self, name: &str) -> Result<LanguageBreakdown> {
        // Byte counts pass through untouched; percentage math happens in
        // format::language_percentages when a view asks for it.
        Ok(self.client.get_repository_languages(name).await?)
    }
}
