use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the profile fetch operation.
///
/// The taxonomy is closed: a fetch either never reaches the service,
/// reaches it and gets refused, or gets a body that is not a profile
/// document. All three are handled at the page controller and never
/// propagate past it.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("profile service responded with status code {0}")]
    Fetch(StatusCode),
    #[error("failed to parse profile response: {0}")]
    Parse(#[from] serde_json::Error),
}
