// src/github/types.rs
// =============================================================================
// Data shapes returned by the GitHub REST API.
//
// Only the fields the explorer actually uses are declared; serde ignores
// everything else GitHub sends. Every type here is a plain value: it is
// created from one response and replaced (never mutated) by the next.
// =============================================================================

use serde::{Deserialize, Serialize};

/// GET /users/{username}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
}

/// One element of GET /users/{username}/repos
///
/// Identity is `id`; two summaries with the same id describe the same repo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub html_url: String,
    /// Where GET languages points; skipped in our own JSON output
    #[serde(default, skip_serializing)]
    pub languages_url: String,
}

/// Language name -> bytes of code, in the order GitHub listed them
pub type LanguageMap = Vec<(String, u64)>;

/// Kind of a directory entry. There are exactly two.
///
/// GitHub also reports "symlink" and "submodule"; both are treated as
/// files, since they cannot be entered as directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum EntryKind {
    File,
    Dir,
}

impl From<String> for EntryKind {
    fn from(kind: String) -> Self {
        if kind == "dir" {
            EntryKind::Dir
        } else {
            EntryKind::File
        }
    }
}

/// One child in a directory listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub url: String,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The single-object form of the contents API
///
/// `kind`, `encoding` and `content` are kept loose on purpose: the resolver
/// decides whether the blob is something it can show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileBlob {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

/// GET /repos/{owner}/{repo}/contents/{path}
///
/// GitHub answers with an array for directories and an object for
/// anything else. The distinction is made once, right after the HTTP call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    Directory(Vec<DirectoryEntry>),
    File(FileBlob),
}
