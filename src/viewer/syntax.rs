// src/viewer/syntax.rs
// Maps file extensions to syntax-highlighting language names.

/// Highlighter language for an extension; "plaintext" when unknown.
pub fn language_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "java" => "java",
        "c" => "c",
        "cpp" => "cpp",
        "html" => "html",
        "css" => "css",
        "json" => "json",
        "md" => "markdown",
        "sh" => "bash",
        "yml" | "yaml" => "yaml",
        "go" => "go",
        "rs" => "rust",
        "php" => "php",
        "rb" => "ruby",
        "cs" => "csharp",
        "sql" => "sql",
        _ => "plaintext",
    }
}
