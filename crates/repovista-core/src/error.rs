use thiserror::Error;

/// All the ways browsing can go wrong.
///
/// The taxonomy is deliberately small: three read endpoints don't warrant a
/// full HTTP status enumeration. API errors keep their original display
/// text, which is what the UI layer shows the user.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] repovista_api::GitHubError),

    #[error("Unknown error occurred: {0}")]
    Unknown(String),
}
