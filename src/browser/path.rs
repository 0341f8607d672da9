// src/browser/path.rs
// =============================================================================
// NavigationPath: where inside a repository the browser currently is.
//
// A path is a list of segment names; the empty list is the repository
// root. Segments never contain '/', so joining with '/' and splitting
// again always gives back the same list.
// =============================================================================

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NavigationPath {
    segments: Vec<String>,
}

impl NavigationPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses "a/b/c". Empty pieces ("a//b", leading or trailing '/') are dropped.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: split_segments(path).collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path one level deeper.
    ///
    /// A name containing '/' is treated as several nested directories.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(split_segments(name));
        Self { segments }
    }

    /// All segments except the last. The parent of the root is the root.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// The first `index + 1` segments, or the path itself if it is not that deep.
    pub fn ancestor(&self, index: usize) -> Self {
        let keep = (index + 1).min(self.segments.len());
        Self {
            segments: self.segments[..keep].to_vec(),
        }
    }

    /// "dir/name" as a repository-relative string
    pub fn join(&self, name: &str) -> String {
        self.child(name).to_string()
    }
}

impl fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl From<&str> for NavigationPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = String> + '_ {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty_string() {
        let root = NavigationPath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
        assert_eq!(NavigationPath::parse(""), root);
    }

    #[test]
    fn test_child_and_parent() {
        let path = NavigationPath::root().child("src").child("lib");
        assert_eq!(path.to_string(), "src/lib");
        assert_eq!(path.parent().to_string(), "src");
        assert_eq!(path.parent().parent(), NavigationPath::root());
        assert_eq!(NavigationPath::root().parent(), NavigationPath::root());
    }

    #[test]
    fn test_ancestor() {
        let path = NavigationPath::parse("a/b/c");
        assert_eq!(path.ancestor(0).to_string(), "a");
        assert_eq!(path.ancestor(1).to_string(), "a/b");
        assert_eq!(path.ancestor(2).to_string(), "a/b/c");
        assert_eq!(path.ancestor(9).to_string(), "a/b/c");
    }

    #[test]
    fn test_parse_drops_empty_pieces() {
        let path = NavigationPath::parse("/a//b/");
        assert_eq!(path.segments(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_child_with_slash_splits() {
        let path = NavigationPath::root().child("docs/api");
        assert_eq!(path.depth(), 2);
        assert_eq!(NavigationPath::parse(&path.to_string()), path);
    }

    #[test]
    fn test_join() {
        let path = NavigationPath::parse("src");
        assert_eq!(path.join("main.rs"), "src/main.rs");
        assert_eq!(NavigationPath::root().join("README.md"), "README.md");
        assert_eq!(path.depth(), 1);
    }
}
