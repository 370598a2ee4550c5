use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{GitHubRepo, LanguageBreakdown};
use crate::query::RepoListQuery;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// The organization whose repositories we browse. Fixed at compile time;
/// there is no multi-org support and no auth, these are public endpoints.
pub const ORGANIZATION: &str = "godaddy";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("{0} not found")]
    NotFound(Resource),

    // 403 on these unauthenticated endpoints means the anonymous rate
    // limit kicked in, not an actual permissions problem
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Error fetching {context}: {status_text}")]
    Upstream {
        context: &'static str,
        status_text: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What a 404 was addressing, so the message names the right thing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Repository,
    Organization,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Repository => write!(f, "Repository"),
            Resource::Organization => write!(f, "Organization"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    org: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE.to_string(), ORGANIZATION.to_string())
    }

    /// For GitHub Enterprise or testing with a mock server
    pub fn with_base_url(base_url: String, org: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("repovista/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            org,
        }
    }

    /// Fetch one repository's metadata.
    pub async fn get_repository(&self, name: &str) -> Result<GitHubRepo> {
        let url = format!("{}/repos/{}/{}", self.base_url, self.org, name);

        self.get_json(
            self.client.get(&url),
            Resource::Repository,
            "repository details",
        )
        .await
        .map_err(|e| {
            tracing::error!(repo = %name, error = %e, "failed to fetch repository details");
            e
        })
    }

    /// Fetch one repository's language byte counts.
    pub async fn get_repository_languages(&self, name: &str) -> Result<LanguageBreakdown> {
        let url = format!("{}/repos/{}/{}/languages", self.base_url, self.org, name);

        self.get_json(
            self.client.get(&url),
            Resource::Repository,
            "repository languages",
        )
        .await
        .map_err(|e| {
            tracing::error!(repo = %name, error = %e, "failed to fetch repository languages");
            e
        })
    }

    /// List the organization's repositories under the given query.
    ///
    /// Defaults are filled in for unset query fields; the result array is
    /// returned exactly as upstream sorted and paginated it.
    pub async fn list_repositories(&self, query: &RepoListQuery) -> Result<Vec<GitHubRepo>> {
        let url = format!("{}/orgs/{}/repos", self.base_url, self.org);
        let params = query.to_query_params();

        self.get_json(
            self.client.get(&url).query(&params),
            Resource::Organization,
            "repositories",
        )
        .await
        .map_err(|e| {
            tracing::error!(org = %self.org, error = %e, "failed to fetch repositories");
            e
        })
    }

    /// Shared GET plumbing: status mapping first, body parsing second.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        resource: Resource,
        context: &'static str,
    ) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound(resource));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(GitHubError::RateLimited);
        }

        if !status.is_success() {
            return Err(GitHubError::Upstream {
                context,
                status_text: status_text(status),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo_body(name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": 101,
            "name": name,
            "full_name": format!("godaddy/{name}"),
            "owner": { "login": "godaddy", "avatar_url": null, "html_url": "https://github.com/godaddy" },
            "html_url": format!("https://github.com/godaddy/{name}"),
            "description": "An example repository",
            "fork": false,
            "homepage": null,
            "stargazers_count": 1200,
            "watchers_count": 1200,
            "forks_count": 140,
            "open_issues_count": 9,
            "language": "JavaScript",
            "topics": ["web", "tooling"],
            "license": { "key": "mit", "name": "MIT License", "spdx_id": "MIT" },
            "created_at": "2020-06-15T12:00:00Z",
            "updated_at": "2024-02-20T09:30:00Z",
            "pushed_at": "2024-02-19T22:11:00Z",
            "size": 4096,
            "default_branch": "main",
            "archived": false,
            "private": false
        })
    }

    async fn client_for(server: &MockServer) -> GitHubClient {
        GitHubClient::with_base_url(server.uri(), "godaddy".to_string())
    }

    #[tokio::test]
    async fn get_repository_returns_parsed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/godaddy/example-repo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(repo_body("example-repo")))
            .mount(&server)
            .await;

        let repo = client_for(&server)
            .await
            .get_repository("example-repo")
            .await
            .unwrap();

        assert_eq!(repo.full_name, "godaddy/example-repo");
        assert_eq!(repo.stargazers_count, 1200);
        assert_eq!(repo.license.unwrap().key, "mit");
        assert_eq!(repo.default_branch, "main");
    }

    #[tokio::test]
    async fn get_repository_maps_404_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/godaddy/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .get_repository("missing")
            .await
            .unwrap_err();

        assert!(matches!(err, GitHubError::NotFound(Resource::Repository)));
        assert_eq!(err.to_string(), "Repository not found");
    }

    #[tokio::test]
    async fn get_repository_maps_403_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/godaddy/example-repo"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .get_repository("example-repo")
            .await
            .unwrap_err();

        assert!(matches!(err, GitHubError::RateLimited));
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded. Please try again later."
        );
    }

    #[tokio::test]
    async fn get_repository_surfaces_other_statuses_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/godaddy/example-repo"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .get_repository("example-repo")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error fetching repository details: Internal Server Error"
        );
    }

    #[tokio::test]
    async fn get_repository_reports_malformed_bodies_as_parse_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/godaddy/example-repo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .get_repository("example-repo")
            .await
            .unwrap_err();

        assert!(matches!(err, GitHubError::Parse(_)));
    }

    #[tokio::test]
    async fn get_languages_returns_counts_in_wire_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/godaddy/example-repo/languages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(
                        r#"{"JavaScript": 3000, "TypeScript": 2000, "CSS": 500}"#,
                        "application/json",
                    ),
            )
            .mount(&server)
            .await;

        let languages = client_for(&server)
            .await
            .get_repository_languages("example-repo")
            .await
            .unwrap();

        let entries: Vec<_> = languages.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(
            entries,
            [("JavaScript", 3000), ("TypeScript", 2000), ("CSS", 500)]
        );
    }

    #[tokio::test]
    async fn get_languages_uses_its_own_upstream_wording() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/godaddy/example-repo/languages"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .get_repository_languages("example-repo")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error fetching repository languages: Bad Gateway"
        );
    }

    #[tokio::test]
    async fn list_repositories_sends_defaults_alongside_supplied_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/godaddy/repos"))
            .and(query_param("type", "all"))
            .and(query_param("sort", "created"))
            .and(query_param("direction", "desc"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "30"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([repo_body("one")])),
            )
            .mount(&server)
            .await;

        let query = RepoListQuery {
            page: Some(1),
            per_page: Some(30),
            ..Default::default()
        };

        // The mock only matches when the defaulted params are present; a
        // miss falls through to wiremock's 404 and fails the assertions.
        let repos = client_for(&server)
            .await
            .list_repositories(&query)
            .await
            .unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "one");
    }

    #[tokio::test]
    async fn list_repositories_maps_404_to_organization_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/godaddy/repos"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .list_repositories(&RepoListQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GitHubError::NotFound(Resource::Organization)));
        assert_eq!(err.to_string(), "Organization not found");
    }

    #[tokio::test]
    async fn list_repositories_wording_for_other_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/godaddy/repos"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .list_repositories(&RepoListQuery::default())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error fetching repositories: Service Unavailable"
        );
    }
}
