// Domain layer - models, display formatting, and the provider seam
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod provider;

pub use error::Error;
pub use models::{LanguagePercentage, Repository};
pub use provider::{GitHubProvider, RepositoryProvider};

/// Result alias so callers don't spell out the error type everywhere
pub type Result<T> = std::result::Result<T, Error>;
