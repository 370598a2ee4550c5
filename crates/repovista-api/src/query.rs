use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
/// Upstream rejects anything above 100 per page
pub const MAX_PER_PAGE: u32 = 100;

/// Which kinds of repositories the listing should return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    #[default]
    All,
    Public,
    Forks,
    Sources,
    Member,
}

impl RepoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoType::All => "all",
            RepoType::Public => "public",
            RepoType::Forks => "forks",
            RepoType::Sources => "sources",
            RepoType::Member => "member",
        }
    }
}

/// Property the listing is sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    #[default]
    Created,
    Updated,
    Pushed,
    FullName,
}

impl RepoSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoSort::Created => "created",
            RepoSort::Updated => "updated",
            RepoSort::Pushed => "pushed",
            RepoSort::FullName => "full_name",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

macro_rules! impl_display_and_from_str {
    ($ty:ty, $($text:literal => $variant:expr),+ $(,)?) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($variant),)+
                    other => Err(format!(
                        concat!("invalid ", stringify!($ty), ": {}"),
                        other
                    )),
                }
            }
        }
    };
}

impl_display_and_from_str!(RepoType,
    "all" => RepoType::All,
    "public" => RepoType::Public,
    "forks" => RepoType::Forks,
    "sources" => RepoType::Sources,
    "member" => RepoType::Member,
);

impl_display_and_from_str!(RepoSort,
    "created" => RepoSort::Created,
    "updated" => RepoSort::Updated,
    "pushed" => RepoSort::Pushed,
    "full_name" => RepoSort::FullName,
);

impl_display_and_from_str!(SortDirection,
    "asc" => SortDirection::Asc,
    "desc" => SortDirection::Desc,
);

/// Typed query for the organization listing endpoint.
///
/// Every field is optional; defaults are filled in when the query is
/// serialized, so `RepoListQuery::default()` is the plain first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoListQuery {
    pub repo_type: Option<RepoType>,
    pub sort: Option<RepoSort>,
    pub direction: Option<SortDirection>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl RepoListQuery {
    /// Serialize into URL query parameters with defaults applied.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let repo_type = self.repo_type.unwrap_or_default();
        let sort = self.sort.unwrap_or_default();
        let direction = self.direction.unwrap_or_default();
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let per_page = self
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);

        vec![
            ("type", repo_type.as_str().to_string()),
            ("sort", sort.as_str().to_string()),
            ("direction", direction.as_str().to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ]
    }
}
