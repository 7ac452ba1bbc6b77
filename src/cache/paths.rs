// Cache path utilities.
// Constructs filesystem paths namespaced by subject and data kind.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Category of cached data for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Profile,
    Repos,
    ProfileReadme,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Profile => "profile",
            Kind::Repos => "repos",
            Kind::ProfileReadme => "profileReadme",
        }
    }
}

/// Get the base cache directory (~/.cache/gitfolio on macOS/Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gitfolio").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to a subject's directory under a cache root.
pub fn subject_dir(root: &Path, subject: &str) -> PathBuf {
    root.join("subjects").join(sanitize_name(subject))
}

/// Path to the entry file for one (subject, kind) pair.
pub fn entry_path(root: &Path, subject: &str, kind: Kind) -> PathBuf {
    subject_dir(root, subject).join(format!("{}.json", kind.as_str()))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("simple"), "simple");
        assert_eq!(sanitize_name("with/slash"), "with_slash");
        assert_eq!(sanitize_name("a:b"), "a_b");
    }

    #[test]
    fn test_entry_paths_are_namespaced() {
        let root = Path::new("/tmp/cache");

        let p = entry_path(root, "octocat", Kind::Profile);
        assert!(p.ends_with("subjects/octocat/profile.json"));

        let r = entry_path(root, "octocat", Kind::Repos);
        assert!(r.ends_with("subjects/octocat/repos.json"));

        let m = entry_path(root, "octocat", Kind::ProfileReadme);
        assert!(m.ends_with("subjects/octocat/profileReadme.json"));

        // Different subjects never share a directory.
        let other = entry_path(root, "monalisa", Kind::Profile);
        assert_ne!(p, other);
    }
}
