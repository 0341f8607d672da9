// src/error.rs
// =============================================================================
// Error types for the GitHub client and the file resolver.
//
// Two layers:
// - ApiError: anything that went wrong talking to GitHub
// - ResolveError: the three ways "show me this file" can fail
//
// The degrade-to-empty policies (profile, repo list, languages, directory
// listings) live next to the code that applies them; see github/load.rs
// and languages/aggregate.rs. Only ResolveError::FetchFailed is meant to
// reach the user as a failure.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// GitHub answered with a non-2xx status
    #[error("GitHub returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a usable response (DNS, TLS, timeout, bad JSON)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// An endpoint could not be built from the configured base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status when GitHub answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidUrl(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ResolveError {
    /// The path names a directory; callers redirect to a listing instead
    #[error("{path} is a directory, not a file")]
    NotAFile { path: String },

    /// A single object came back, but not a base64 file blob
    #[error("{path} has no displayable content")]
    UnsupportedContent { path: String },

    /// The contents request itself failed
    #[error("Could not fetch file: {0}")]
    FetchFailed(#[from] ApiError),
}
