// src/browser/location.rs
// =============================================================================
// The page URL, treated as an external store.
//
// The browser reads it exactly once (to seed its path when it mounts) and
// afterwards only writes to it. Writes either replace the current entry
// (browser navigation) or push a new one (opening a file), mirroring how
// a web router manages history.
//
// URL shapes:
//   {site}/github/{repo}?path={dir}          directory browser
//   {site}/github/{repo}/view?path={file}    file viewer
//
// The path is form-encoded by the url crate, so any segment name
// (spaces, '&', '#', unicode) survives a write/read round trip.
// =============================================================================

use url::Url;

use super::path::NavigationPath;

/// Query parameter carrying the path
pub const PATH_PARAM: &str = "path";

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    current: Url,
    // Earlier entries, oldest first
    history: Vec<Url>,
}

impl Location {
    pub fn new(url: Url) -> Self {
        Self {
            current: url,
            history: Vec::new(),
        }
    }

    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?))
    }

    pub fn current(&self) -> &Url {
        &self.current
    }

    /// Overwrites the current entry; history length is unchanged.
    pub fn replace(&mut self, url: Url) {
        self.current = url;
    }

    /// Moves to a new entry, keeping the current one for `back`.
    pub fn push(&mut self, url: Url) {
        let previous = std::mem::replace(&mut self.current, url);
        self.history.push(previous);
    }

    /// Returns to the previous entry. False if there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Number of entries, counting the current one
    pub fn history_len(&self) -> usize {
        self.history.len() + 1
    }
}

fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn page_url(site: &Url, segments: &[&str], path: &str) -> Url {
    let mut url = site.clone();
    if let Ok(mut path_segments) = url.path_segments_mut() {
        path_segments.pop_if_empty().extend(segments);
    }
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut().append_pair(PATH_PARAM, path);
    url
}

/// Shareable link to a directory of `repo`
pub fn browser_url(site: &Url, repo: &str, path: &NavigationPath) -> Url {
    page_url(site, &["github", repo], &path.to_string())
}

/// Shareable link to a file of `repo`
pub fn viewer_url(site: &Url, repo: &str, file_path: &str) -> Url {
    page_url(site, &["github", repo, "view"], file_path)
}

/// Repository segment of a `/github/{repo}` link, still percent-encoded
pub fn linked_repo(url: &Url) -> Option<&str> {
    let mut segments = url.path_segments()?;
    segments.find(|segment| *segment == "github")?;
    segments.next().filter(|segment| !segment.is_empty())
}

/// False only when `url` is a browser or viewer link for another repository.
///
/// Links without the `/github/{repo}` shape carry just a path and fit any repo.
pub fn links_to_repo(url: &Url, repo: &str) -> bool {
    let Some(linked) = linked_repo(url) else {
        return true;
    };

    // Encode `repo` the same way page_url does, then compare segments
    let mut expected = url.clone();
    match expected.path_segments_mut() {
        Ok(mut segments) => {
            segments.clear().push(repo);
        }
        Err(_) => return false,
    }
    expected.path_segments().and_then(|mut segments| segments.next()) == Some(linked)
}

/// Path carried by a browser or viewer link; the root if absent.
pub fn path_from_url(url: &Url) -> NavigationPath {
    query_param(url, PATH_PARAM)
        .map(|path| NavigationPath::parse(&path))
        .unwrap_or_default()
}
