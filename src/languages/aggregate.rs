// src/languages/aggregate.rs
// =============================================================================
// Fetches every repository's language map and folds them into one tally.
//
// How it works:
// 1. Issue one languages request per repository, several at a time
// 2. Split the results into successes and failures
// 3. Log each failure (it contributes nothing)
// 4. Sum the successes
//
// `buffered` (not `buffer_unordered`) hands results back in repository
// order, which keeps the first-appearance order of the tally stable.
// =============================================================================

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use super::tally::LanguageTally;
use crate::error::ApiError;
use crate::github::{GithubApi, LanguageMap, RepoSummary};

/// How many language requests may be in flight at once
pub const LANGUAGE_CONCURRENCY: usize = 8;

/// A repository whose languages could not be fetched
#[derive(Debug)]
pub struct LanguageFailure {
    pub repo: String,
    pub error: ApiError,
}

/// Result of aggregating an account's languages
#[derive(Debug, Default)]
pub struct LanguageReport {
    pub tally: LanguageTally,
    pub failures: Vec<LanguageFailure>,
}

/// Fetches languages for every repository, one result per repository.
pub async fn fetch_all_languages(
    api: &(impl GithubApi + ?Sized),
    repos: &[RepoSummary],
) -> Vec<(String, Result<LanguageMap, ApiError>)> {
    let fetches = repos.iter().map(|repo| async move {
        debug!(repo = %repo.name, "Fetching languages");
        (repo.name.clone(), api.fetch_languages(repo).await)
    });

    stream::iter(fetches)
        .buffered(LANGUAGE_CONCURRENCY)
        .collect()
        .await
}

/// Aggregates the language byte counts of every repository.
///
/// A failed repository is logged and skipped; it never aborts the others.
pub async fn aggregate_languages(
    api: &(impl GithubApi + ?Sized),
    repos: &[RepoSummary],
) -> LanguageReport {
    // Step 1: One result per repository, in repository order
    let results = fetch_all_languages(api, repos).await;

    // Step 2: Partition; a failure is kept only to be logged
    let mut maps = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (repo, result) in results {
        match result {
            Ok(map) => maps.push(map),
            Err(error) => failures.push(LanguageFailure { repo, error }),
        }
    }

    // Step 3: Log
    for failure in &failures {
        warn!(repo = %failure.repo, error = %failure.error, "Could not fetch languages");
    }

    // Step 4: Fold the successes
    LanguageReport {
        tally: LanguageTally::from_maps(&maps),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::FakeGithub;
    use crate::github::load_repositories;

    #[tokio::test]
    async fn test_aggregates_all_repositories() {
        let api = FakeGithub::new()
            .with_repo(1, "a", 0, &[("JavaScript", 100), ("HTML", 50)])
            .with_repo(2, "b", 0, &[("JavaScript", 200)]);
        let repos = load_repositories(&api).await;

        let report = aggregate_languages(&api, &repos).await;

        assert!(report.failures.is_empty());
        assert_eq!(report.tally.get("JavaScript"), Some(300));
        assert_eq!(report.tally.get("HTML"), Some(50));
        let names: Vec<_> = report.tally.shares().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["JavaScript", "HTML"]);
    }

    #[tokio::test]
    async fn test_one_failed_repository_contributes_nothing() {
        let api = FakeGithub::new()
            .with_repo(1, "a", 0, &[("Rust", 10), ("Shell", 1)])
            .with_repo(2, "broken", 0, &[("Haskell", 99), ("Rust", 5)])
            .with_repo(3, "c", 0, &[("Rust", 2)])
            .failing_languages_for("broken");
        let repos = load_repositories(&api).await;

        let report = aggregate_languages(&api, &repos).await;

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].repo, "broken");
        assert_eq!(report.tally.get("Rust"), Some(12));
        assert_eq!(report.tally.get("Shell"), Some(1));
        assert_eq!(report.tally.get("Haskell"), None);
    }

    #[tokio::test]
    async fn test_results_follow_repository_order() {
        let api = FakeGithub::new()
            .with_repo(1, "first", 0, &[])
            .with_repo(2, "second", 0, &[])
            .with_repo(3, "third", 0, &[]);
        let repos = load_repositories(&api).await;

        let results = fetch_all_languages(&api, &repos).await;
        let names: Vec<_> = results.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_no_repositories_no_languages() {
        let api = FakeGithub::new();
        let report = aggregate_languages(&api, &[]).await;
        assert!(report.tally.is_empty());
        assert!(report.failures.is_empty());
    }
}
