// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Submodules:
// - types:  the JSON shapes we read (profile, repos, contents)
// - client: GithubApi trait + the reqwest-backed GithubClient
// - load:   degrade-to-empty policies for profile, repos and listings
// - fake:   in-memory GithubApi for tests
// =============================================================================

mod client;
mod load;
mod types;

#[cfg(test)]
pub mod fake;

pub use client::{GithubApi, GithubClient};
pub use load::{list_directory, load_profile, load_repositories};
pub use types::{Contents, DirectoryEntry, EntryKind, FileBlob, LanguageMap, RepoSummary, UserProfile};
