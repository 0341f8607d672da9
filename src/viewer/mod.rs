// src/viewer/mod.rs
// =============================================================================
// Viewing a single file from a repository.
//
// Submodules:
// - resolve: fetch + base64 decode, with NotAFile / UnsupportedContent
// - open:    what the file page does with each outcome
// - syntax:  extension -> highlighter language
// =============================================================================

mod open;
mod resolve;
mod syntax;

pub use open::{github_blob_url, open_file, ViewOutcome};
pub use resolve::FileContent;
