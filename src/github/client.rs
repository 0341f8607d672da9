// src/github/client.rs
// =============================================================================
// A thin client for the four GitHub REST calls the explorer makes.
//
// Endpoints:
// - GET /users/{username}                        -> UserProfile
// - GET /users/{username}/repos?per_page=100     -> Vec<RepoSummary>
// - GET {repo.languages_url}                     -> LanguageMap
// - GET /repos/{username}/{repo}/contents/{path} -> Contents (dir or file)
//
// Every request carries the configured token (if any). There are no
// retries and no caching; a failed call is returned as an ApiError and the
// caller decides what that means (see github/load.rs).
//
// The GithubApi trait is the seam the rest of the crate is written
// against, so tests can swap in an in-memory fake.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types::{Contents, LanguageMap, RepoSummary, UserProfile};
use crate::config::Config;
use crate::error::ApiError;

/// A single page is assumed to be enough for one account
pub const REPOS_PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Everything the explorer needs from GitHub
//
// Implementations return raw results; degrade policies are applied by the
// callers, not here.
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Login of the explored account
    fn username(&self) -> &str;

    async fn fetch_user(&self) -> Result<UserProfile, ApiError>;

    async fn fetch_repositories(&self) -> Result<Vec<RepoSummary>, ApiError>;

    async fn fetch_languages(&self, repo: &RepoSummary) -> Result<LanguageMap, ApiError>;

    /// `path` is relative to the repository root; "" means the root itself
    async fn fetch_contents(&self, repo: &str, path: &str) -> Result<Contents, ApiError>;
}

// The real client, backed by reqwest
//
// Cloning is cheap: reqwest::Client is reference counted internally.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    config: Config,
}

impl GithubClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        // GitHub rejects requests without a User-Agent
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, config })
    }

    // Builds {api_base}/{segments...}, percent-encoding each segment
    fn endpoint<'a, I>(&self, segments: I) -> Result<Url, ApiError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        build_endpoint(&self.config.api_base, segments)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");

        // Step 1: Build the request, asking for the v3 JSON media type
        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github+json");

        // Step 2: Attach the token if there is one; otherwise go unauthenticated
        if let Some(auth) = self.config.authorization() {
            request = request.header(AUTHORIZATION, auth);
        }

        // Step 3: Send it. DNS, TLS and connection errors end up as Transport
        let response = request.send().await?;
        let status = response.status();

        // Step 4: Non-2xx -> Status error, keeping GitHub's own message if it sent one
        if !status.is_success() {
            // The body is only for the message; losing it is not worth a second error
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            debug!(%url, status = status.as_u16(), %message, "GitHub error response");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        // Step 5: Parse the body; a shape mismatch is a Transport error too
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    fn username(&self) -> &str {
        &self.config.username
    }

    async fn fetch_user(&self) -> Result<UserProfile, ApiError> {
        let url = self.endpoint(["users", self.config.username.as_str()])?;
        self.get_json(url).await
    }

    async fn fetch_repositories(&self) -> Result<Vec<RepoSummary>, ApiError> {
        let mut url = self.endpoint(["users", self.config.username.as_str(), "repos"])?;
        // One page of up to 100; accounts with more are cut off
        url.query_pairs_mut()
            .append_pair("per_page", &REPOS_PER_PAGE.to_string());
        self.get_json(url).await
    }

    async fn fetch_languages(&self, repo: &RepoSummary) -> Result<LanguageMap, ApiError> {
        // Older fixtures may lack languages_url; the endpoint is predictable anyway
        let url = if repo.languages_url.is_empty() {
            self.endpoint([
                "repos",
                self.config.username.as_str(),
                repo.name.as_str(),
                "languages",
            ])?
        } else {
            Url::parse(&repo.languages_url)?
        };

        // {"JavaScript": 12345, "HTML": 678}; preserve_order keeps GitHub's order
        let raw: serde_json::Map<String, serde_json::Value> = self.get_json(url).await?;
        Ok(raw
            .into_iter()
            .filter_map(|(language, bytes)| bytes.as_u64().map(|bytes| (language, bytes)))
            .collect())
    }

    async fn fetch_contents(&self, repo: &str, path: &str) -> Result<Contents, ApiError> {
        // Each path segment is encoded separately, so "/" stays a separator
        let mut segments = vec!["repos", self.config.username.as_str(), repo, "contents"];
        segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
        let url = self.endpoint(segments)?;
        self.get_json(url).await
    }
}

fn build_endpoint<'a, I>(base: &Url, segments: I) -> Result<Url, ApiError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

// GitHub error bodies look like {"message": "Not Found", "documentation_url": ...}
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|message| message.as_str())
        .map(str::to_string)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a trait?
//    - Everything above the client (aggregator, browser, resolver) only
//      needs "something that can answer these four questions"
//    - Tests implement GithubApi over a HashMap (see github/fake.rs)
//
// 2. Why #[async_trait]?
//    - It lets the trait have async methods and stay object safe, so
//      callers can take `&impl GithubApi` or `&dyn GithubApi` alike
//
// 3. path_segments_mut()
//    - Appends path segments and percent-encodes each one, so a file
//      called "my notes.md" becomes "my%20notes.md" in the request
// -----------------------------------------------------------------------------
