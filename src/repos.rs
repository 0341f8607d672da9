// src/repos.rs
// =============================================================================
// Ordering and filtering of the repository grid.
//
// Repositories are shown most-starred first, and the list can be narrowed
// to repositories that have stars or forks at all.
// =============================================================================

use clap::ValueEnum;

use crate::github::RepoSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RepoFilter {
    /// Every repository
    #[default]
    All,
    /// Only repositories with at least one star
    Stars,
    /// Only repositories that have been forked
    Forks,
}

impl RepoFilter {
    pub fn matches(self, repo: &RepoSummary) -> bool {
        match self {
            RepoFilter::All => true,
            RepoFilter::Stars => repo.stargazers_count > 0,
            RepoFilter::Forks => repo.forks_count > 0,
        }
    }
}

/// Sorts by stars, descending. Equal counts keep their original order.
pub fn sort_by_stars(repos: &mut [RepoSummary]) {
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
}

/// Sorted and filtered copy, ready for display
pub fn select(repos: &[RepoSummary], filter: RepoFilter) -> Vec<RepoSummary> {
    let mut selected: Vec<_> = repos
        .iter()
        .filter(|repo| filter.matches(repo))
        .cloned()
        .collect();
    sort_by_stars(&mut selected);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::repo;

    fn names(repos: &[RepoSummary]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_stars_descending() {
        let mut repos = vec![repo(1, "x", 5, 0), repo(2, "y", 10, 0)];
        sort_by_stars(&mut repos);
        assert_eq!(names(&repos), vec!["y", "x"]);
    }

    #[test]
    fn test_ties_keep_order() {
        let mut repos = vec![repo(1, "a", 1, 0), repo(2, "b", 3, 0), repo(3, "c", 1, 0)];
        sort_by_stars(&mut repos);
        assert_eq!(names(&repos), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_filters() {
        let repos = vec![
            repo(1, "plain", 0, 0),
            repo(2, "starred", 4, 0),
            repo(3, "forked", 0, 2),
            repo(4, "both", 1, 1),
        ];
        assert_eq!(select(&repos, RepoFilter::All).len(), 4);
        assert_eq!(names(&select(&repos, RepoFilter::Stars)), vec!["starred", "both"]);
        assert_eq!(names(&select(&repos, RepoFilter::Forks)), vec!["forked", "both"]);
    }
}
