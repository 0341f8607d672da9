// src/viewer/resolve.rs
// =============================================================================
// Turns "repo + file path" into readable text.
//
// Steps:
// 1. Ask the contents API for the path
// 2. An array means the path is a directory        -> NotAFile
// 3. Anything but a base64 "file" object            -> UnsupportedContent
// 4. Decode the base64 payload (GitHub wraps it at 60 columns)
// 5. Empty text is replaced by a visible placeholder
//
// Network/API errors are passed through as FetchFailed. Binary files are
// decoded lossily and may show up garbled; that is accepted.
// =============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use super::syntax::language_for_extension;
use crate::error::ResolveError;
use crate::github::{Contents, FileBlob, GithubApi};

/// Shown instead of nothing when a file has no content
pub const EMPTY_FILE_PLACEHOLDER: &str = "// (empty file)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileContent {
    pub path: String,
    pub name: String,
    /// Text after the last '.', or "" when the name has none
    pub extension: String,
    /// Syntax-highlighting hint derived from the extension
    pub language: &'static str,
    pub text: String,
}

pub async fn resolve_file(
    api: &(impl GithubApi + ?Sized),
    repo: &str,
    file_path: &str,
) -> Result<FileContent, ResolveError> {
    // A request failure becomes FetchFailed through `?`
    let blob = match api.fetch_contents(repo, file_path).await? {
        // An array back means the path is a directory
        Contents::Directory(_) => {
            return Err(ResolveError::NotAFile {
                path: file_path.to_string(),
            })
        }
        Contents::File(blob) => blob,
    };

    // Symlinks, submodules and non-base64 blobs have nothing to decode
    let text = decode_blob(&blob).ok_or_else(|| ResolveError::UnsupportedContent {
        path: file_path.to_string(),
    })?;

    Ok(FileContent::new(&blob.path, &blob.name, text))
}

impl FileContent {
    fn new(path: &str, name: &str, text: String) -> Self {
        let extension = extension_of(name).to_string();
        let text = if text.is_empty() {
            EMPTY_FILE_PLACEHOLDER.to_string()
        } else {
            text
        };
        Self {
            path: path.to_string(),
            name: name.to_string(),
            language: language_for_extension(&extension),
            extension,
            text,
        }
    }
}

/// Text of a base64 file blob, or None if the blob is not one.
pub fn decode_blob(blob: &FileBlob) -> Option<String> {
    if blob.kind != "file" || blob.encoding.as_deref() != Some("base64") {
        return None;
    }
    let content = blob.content.as_ref()?.as_str()?;
    decode_base64_text(content)
}

/// Decodes base64 that may contain line breaks into (lossy) UTF-8 text.
pub fn decode_base64_text(content: &str) -> Option<String> {
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}
