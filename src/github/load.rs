// src/github/load.rs
// =============================================================================
// Failure policies applied on top of the raw client.
//
// Each page of the explorer tolerates a different kind of failure:
// - profile:      missing profile -> None ("nothing to show yet")
// - repositories: failed list     -> empty list (account looks empty)
// - listing:      failed listing  -> empty directory
//
// All three log a warning so the failure is still visible with RUST_LOG.
// Per-repository language failures are handled in languages/aggregate.rs.
// =============================================================================

use tracing::warn;

use super::client::GithubApi;
use super::types::{Contents, DirectoryEntry, RepoSummary, UserProfile};

/// Profile of the configured account, or None if it could not be fetched.
pub async fn load_profile(api: &(impl GithubApi + ?Sized)) -> Option<UserProfile> {
    match api.fetch_user().await {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!(user = api.username(), status = ?e.status(), error = %e, "Could not fetch user profile");
            None
        }
    }
}

/// Repositories of the configured account; empty if the fetch failed.
pub async fn load_repositories(api: &(impl GithubApi + ?Sized)) -> Vec<RepoSummary> {
    match api.fetch_repositories().await {
        Ok(repos) => repos,
        Err(e) => {
            warn!(user = api.username(), status = ?e.status(), error = %e, "Could not fetch repositories");
            Vec::new()
        }
    }
}

/// Children of `path` inside `repo`; empty on any failure.
///
/// An error and a genuinely empty directory look the same to the caller.
pub async fn list_directory(
    api: &(impl GithubApi + ?Sized),
    repo: &str,
    path: &str,
) -> Vec<DirectoryEntry> {
    match api.fetch_contents(repo, path).await {
        Ok(Contents::Directory(entries)) => entries,
        Ok(Contents::File(blob)) => {
            warn!(repo, path, kind = %blob.kind, "Expected a directory listing, got a single object");
            Vec::new()
        }
        Err(e) => {
            warn!(repo, path, status = ?e.status(), error = %e, "Could not list directory");
            Vec::new()
        }
    }
}
