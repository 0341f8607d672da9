// src/languages/mod.rs
// =============================================================================
// Account-wide language statistics.
//
// Submodules:
// - tally:     LanguageTally, an insertion-ordered byte counter
// - aggregate: fetches every repository's languages and sums them
// =============================================================================

mod aggregate;
mod tally;

pub use aggregate::aggregate_languages;
pub use tally::{LanguageShare, LanguageTally};
