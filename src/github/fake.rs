// src/github/fake.rs
// =============================================================================
// In-memory GithubApi used by unit tests across the crate.
//
// Each endpoint is backed by a map; anything not registered answers with
// a 404, just like GitHub would. Failures can be injected per repository
// or per path to exercise the degrade policies.
// =============================================================================

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine;

use super::client::GithubApi;
use super::types::{Contents, DirectoryEntry, EntryKind, FileBlob, LanguageMap, RepoSummary, UserProfile};
use crate::error::ApiError;

#[derive(Default)]
pub struct FakeGithub {
    pub user: Option<UserProfile>,
    pub repos: Option<Vec<RepoSummary>>,
    pub languages: HashMap<String, LanguageMap>,
    pub failing_languages: HashSet<String>,
    pub contents: HashMap<(String, String), Contents>,
    /// Every contents path requested, in order
    pub requested: Mutex<Vec<String>>,
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: "Not Found".to_string(),
    }
}

impl FakeGithub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, id: u64, name: &str, stars: u64, languages: &[(&str, u64)]) -> Self {
        self.repos.get_or_insert_with(Vec::new).push(repo(id, name, stars, 0));
        self.languages.insert(
            name.to_string(),
            languages
                .iter()
                .map(|(language, bytes)| (language.to_string(), *bytes))
                .collect(),
        );
        self
    }

    pub fn failing_languages_for(mut self, name: &str) -> Self {
        self.failing_languages.insert(name.to_string());
        self
    }

    pub fn with_dir(mut self, repo: &str, path: &str, entries: Vec<DirectoryEntry>) -> Self {
        self.contents
            .insert((repo.to_string(), path.to_string()), Contents::Directory(entries));
        self
    }

    pub fn with_blob(mut self, repo: &str, blob: FileBlob) -> Self {
        self.contents
            .insert((repo.to_string(), blob.path.clone()), Contents::File(blob));
        self
    }

    pub fn with_text_file(self, repo: &str, path: &str, text: &str) -> Self {
        let blob = text_blob(path, text);
        self.with_blob(repo, blob)
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

pub fn repo(id: u64, name: &str, stars: u64, forks: u64) -> RepoSummary {
    RepoSummary {
        id,
        name: name.to_string(),
        description: None,
        language: None,
        stargazers_count: stars,
        forks_count: forks,
        html_url: format!("https://github.com/octo/{}", name),
        languages_url: format!("https://api.github.com/repos/octo/{}/languages", name),
    }
}

pub fn entry(parent: &str, name: &str, kind: EntryKind) -> DirectoryEntry {
    let path = if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    };
    DirectoryEntry {
        name: name.to_string(),
        url: format!("https://api.github.com/repos/octo/site/contents/{}", path),
        path,
        kind,
    }
}

// GitHub wraps base64 content at 60 columns; mimic that
pub fn text_blob(path: &str, text: &str) -> FileBlob {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    let wrapped = encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("\n");
    FileBlob {
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        path: path.to_string(),
        kind: "file".to_string(),
        encoding: Some("base64".to_string()),
        content: Some(serde_json::Value::String(wrapped)),
    }
}

#[async_trait]
impl GithubApi for FakeGithub {
    fn username(&self) -> &str {
        "octo"
    }

    async fn fetch_user(&self) -> Result<UserProfile, ApiError> {
        self.user.clone().ok_or_else(not_found)
    }

    async fn fetch_repositories(&self) -> Result<Vec<RepoSummary>, ApiError> {
        self.repos.clone().ok_or_else(not_found)
    }

    async fn fetch_languages(&self, repo: &RepoSummary) -> Result<LanguageMap, ApiError> {
        if self.failing_languages.contains(&repo.name) {
            return Err(ApiError::Status {
                status: 500,
                message: "Server Error".to_string(),
            });
        }
        self.languages.get(&repo.name).cloned().ok_or_else(not_found)
    }

    async fn fetch_contents(&self, repo: &str, path: &str) -> Result<Contents, ApiError> {
        self.requested.lock().unwrap().push(path.to_string());
        self.contents
            .get(&(repo.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(not_found)
    }
}
