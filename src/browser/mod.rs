// src/browser/mod.rs
// =============================================================================
// Directory browsing inside one repository.
//
// Submodules:
// - path:     NavigationPath (list of segments, "" = root)
// - location: the page URL the browser mirrors its path into
// - state:    RepoBrowser, the navigation state machine
// =============================================================================

mod location;
mod path;
mod state;

pub use location::{browser_url, linked_repo, links_to_repo, Location};
pub use path::NavigationPath;
pub use state::{Activation, Breadcrumb, Listing, PendingListing, RepoBrowser};
