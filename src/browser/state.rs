// src/browser/state.rs
// =============================================================================
// RepoBrowser: the directory browser for one repository.
//
// The browser owns the current NavigationPath. Every navigation:
// 1. moves to the new path
// 2. rewrites the page URL (replace, never push)
// 3. switches the listing to Loading
// 4. bumps the navigation generation
// 5. hands back a PendingListing describing the fetch to perform
//
// The fetch itself happens outside the browser. Its result is applied
// with `commit`, which drops it unless it was issued by the latest
// navigation, so after A -> root -> A the first fetch for A is dropped
// even though its path matches.
//
// Opening a file is the one write that pushes: the viewer link becomes a
// new history entry, and `close_file` steps back to the directory.
// =============================================================================

use tracing::debug;
use url::Url;

use super::location::{browser_url, path_from_url, viewer_url, Location};
use super::path::NavigationPath;
use crate::github::{list_directory, DirectoryEntry, GithubApi};

/// What the browser is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Loading,
    Ready(Vec<DirectoryEntry>),
}

/// A directory fetch requested by a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a navigation is only visible once its listing is fetched and committed"]
pub struct PendingListing {
    repo: String,
    path: NavigationPath,
    // Navigation that issued this fetch
    generation: u64,
}

impl PendingListing {
    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Performs the fetch. Failures come back as an empty listing.
    pub async fn fetch(&self, api: &(impl GithubApi + ?Sized)) -> Vec<DirectoryEntry> {
        list_directory(api, &self.repo, &self.path.to_string()).await
    }
}

/// One clickable piece of the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub index: usize,
    /// Decoded, human-readable segment name
    pub label: String,
    /// Where clicking it leads
    pub path: NavigationPath,
}

/// Outcome of activating a directory entry
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// A directory was entered; its listing must be fetched
    Entered(PendingListing),
    /// A file was chosen; the viewer link was pushed onto the history
    OpenFile { path: String, url: Url },
}

#[derive(Debug, Clone)]
pub struct RepoBrowser {
    repo: String,
    site_base: Url,
    path: NavigationPath,
    location: Location,
    listing: Listing,
    // Bumped by every navigation
    generation: u64,
}

impl RepoBrowser {
    /// Creates a browser seeded from the `path` parameter of `location`.
    ///
    /// This is the only time the URL is read.
    pub fn mount(
        repo: impl Into<String>,
        site_base: Url,
        location: Location,
    ) -> (Self, PendingListing) {
        let path = path_from_url(location.current());
        let mut browser = Self {
            repo: repo.into(),
            site_base,
            path: NavigationPath::root(),
            location,
            listing: Listing::Loading,
            generation: 0,
        };
        let pending = browser.navigate_to(path);
        (browser, pending)
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.listing, Listing::Loading)
    }

    /// Entries of the committed listing (empty while loading)
    pub fn entries(&self) -> &[DirectoryEntry] {
        match &self.listing {
            Listing::Ready(entries) => entries,
            Listing::Loading => &[],
        }
    }

    pub fn enter_directory(&mut self, folder: &str) -> PendingListing {
        self.navigate_to(self.path.child(folder))
    }

    /// Jumps to the ancestor made of the first `index + 1` segments.
    pub fn go_to_segment(&mut self, index: usize) -> PendingListing {
        self.navigate_to(self.path.ancestor(index))
    }

    pub fn go_to_root(&mut self) -> PendingListing {
        self.navigate_to(NavigationPath::root())
    }

    /// Drops the last segment; at the root this stays at the root.
    pub fn go_up_one_level(&mut self) -> PendingListing {
        self.navigate_to(self.path.parent())
    }

    /// Moves to an arbitrary path, e.g. when a file link turned out to be a directory.
    pub fn navigate_to(&mut self, path: NavigationPath) -> PendingListing {
        debug!(repo = %self.repo, from = %self.path, to = %path, "Navigating");
        self.path = path;

        // The URL follows the path, without adding a history entry
        self.location
            .replace(browser_url(&self.site_base, &self.repo, &self.path));

        // Whatever was in flight before is now superseded
        self.listing = Listing::Loading;
        self.generation += 1;

        PendingListing {
            repo: self.repo.clone(),
            path: self.path.clone(),
            generation: self.generation,
        }
    }

    /// Applies a fetched listing if it was issued by the latest navigation.
    ///
    /// Returns false (and changes nothing) for a stale result.
    pub fn commit(&mut self, pending: PendingListing, entries: Vec<DirectoryEntry>) -> bool {
        let is_current = pending.generation == self.generation
            && pending.repo == self.repo
            && pending.path == self.path;

        if !is_current {
            debug!(
                stale = %pending.path,
                stale_generation = pending.generation,
                current = %self.path,
                current_generation = self.generation,
                "Discarding listing from a superseded navigation"
            );
            return false;
        }

        self.listing = Listing::Ready(entries);
        true
    }

    /// Fetches and commits in one step.
    pub async fn load(&mut self, api: &(impl GithubApi + ?Sized), pending: PendingListing) -> bool {
        let entries = pending.fetch(api).await;
        self.commit(pending, entries)
    }

    /// Directories are entered; files are opened in the viewer.
    pub fn activate(&mut self, entry: &DirectoryEntry) -> Activation {
        if entry.is_dir() {
            Activation::Entered(self.enter_directory(&entry.name))
        } else {
            let path = self.path.join(&entry.name);
            let url = self.open_file(&path);
            Activation::OpenFile { path, url }
        }
    }

    /// Pushes the viewer link for `file_path` and returns it.
    ///
    /// The path and listing stay as they are; only the history grows.
    pub fn open_file(&mut self, file_path: &str) -> Url {
        let url = viewer_url(&self.site_base, &self.repo, file_path);
        self.location.push(url.clone());
        debug!(
            repo = %self.repo,
            file = file_path,
            %url,
            history = self.location.history_len(),
            "Opening file"
        );
        url
    }

    /// Leaves the viewer by stepping back in the history.
    ///
    /// False if there was no earlier entry to return to.
    pub fn close_file(&mut self) -> bool {
        self.location.back()
    }

    /// Finds a committed entry by name.
    pub fn entry(&self, name: &str) -> Option<&DirectoryEntry> {
        self.entries().iter().find(|entry| entry.name == name)
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.path
            .segments()
            .iter()
            .enumerate()
            .map(|(index, label)| Breadcrumb {
                index,
                label: label.clone(),
                path: self.path.ancestor(index),
            })
            .collect()
    }
}
