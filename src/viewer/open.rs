// src/viewer/open.rs
// =============================================================================
// What the file page does with each resolver outcome.
//
// - decoded text          -> show it
// - path is a directory   -> go back to a directory listing instead
// - unsupported content   -> show nothing (no viewer)
// - fetch failed          -> error, the user asked for this file
// =============================================================================

use tracing::{info, warn};

use super::resolve::{resolve_file, FileContent};
use crate::browser::NavigationPath;
use crate::error::{ApiError, ResolveError};
use crate::github::GithubApi;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome {
    Show(FileContent),
    /// The path was a directory; list this one instead
    RedirectToListing(NavigationPath),
    NothingToShow,
}

pub async fn open_file(
    api: &(impl GithubApi + ?Sized),
    repo: &str,
    file_path: &str,
) -> Result<ViewOutcome, ApiError> {
    match resolve_file(api, repo, file_path).await {
        Ok(content) => Ok(ViewOutcome::Show(content)),
        Err(ResolveError::NotAFile { path }) => {
            let parent = NavigationPath::parse(&path).parent();
            info!(repo, %path, listing = %parent, "Not a file, returning to listing");
            Ok(ViewOutcome::RedirectToListing(parent))
        }
        Err(ResolveError::UnsupportedContent { path }) => {
            warn!(repo, %path, "File has no displayable content");
            Ok(ViewOutcome::NothingToShow)
        }
        Err(ResolveError::FetchFailed(e)) => Err(e),
    }
}

/// Link to the file on github.com (default branch assumed to be main)
pub fn github_blob_url(username: &str, repo: &str, file_path: &str) -> String {
    format!(
        "https://github.com/{}/{}/blob/main/{}",
        username, repo, file_path
    )
}
