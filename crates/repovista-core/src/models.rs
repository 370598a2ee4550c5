use chrono::{DateTime, Utc};
use repovista_api::GitHubRepo;
use serde::{Deserialize, Serialize};

/// Repository as the rest of the app sees it - a flat projection of the
/// wire model with only the fields the views actually read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage_url: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
    pub open_issues: u32,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub license: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    /// Size in kilobytes, as upstream reports it
    pub size_kb: u64,
    pub default_branch: String,
    pub is_fork: bool,
    pub is_archived: bool,
}

impl From<GitHubRepo> for Repository {
    fn from(gh: GitHubRepo) -> Self {
        Repository {
            name: gh.name,
            full_name: gh.full_name,
            owner: gh.owner.login,
            description: gh.description,
            url: gh.html_url,
            homepage_url: gh.homepage,
            stars: gh.stargazers_count,
            forks: gh.forks_count,
            watchers: gh.watchers_count,
            open_issues: gh.open_issues_count,
            language: gh.language,
            topics: gh.topics,
            license: gh.license.map(|l| l.name),
            created_at: gh.created_at,
            updated_at: gh.updated_at,
            pushed_at: gh.pushed_at,
            size_kb: gh.size,
            default_branch: gh.default_branch,
            is_fork: gh.fork,
            is_archived: gh.archived,
        }
    }
}

/// One language's share of a repository, percentage pre-formatted to two
/// decimals. Computed on demand, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguagePercentage {
    pub language: String,
    pub percentage: String,
}
