use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// What the user asked for: the raw `<project-directory>` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    raw_name: String,
}

impl ProjectRequest {
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
        }
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Resolve the request against `base_dir` (normally the current directory).
    ///
    /// The path is normalised lexically, so `../foo/./bar` becomes the sibling
    /// `foo/bar` of `base_dir` without touching the filesystem. The project
    /// name is the last component of the resulting path.
    pub fn resolve(&self, base_dir: &Path) -> Result<ResolvedProject, DomainError> {
        let absolute_path = normalize(&base_dir.join(&self.raw_name));

        let name = absolute_path
            .file_name()
            .ok_or_else(|| DomainError::UnresolvableProjectName {
                input: self.raw_name.clone(),
                reason: "path has no final component".into(),
            })?
            .to_str()
            .ok_or_else(|| DomainError::UnresolvableProjectName {
                input: self.raw_name.clone(),
                reason: "directory name is not valid UTF-8".into(),
            })?
            .to_owned();

        Ok(ResolvedProject {
            absolute_path,
            name,
        })
    }
}

/// A project location derived once from a [`ProjectRequest`].
///
/// Invariant: `name` is the final component of `absolute_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    absolute_path: PathBuf,
    name: String,
}

impl ResolvedProject {
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the project is created in.
    pub fn parent(&self) -> Option<&Path> {
        self.absolute_path.parent()
    }
}

impl fmt::Display for ResolvedProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.absolute_path.display())
    }
}

/// Lexically remove `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PathBuf {
        PathBuf::from("/work")
    }

    #[test]
    fn simple_name_resolves_under_base() {
        let project = ProjectRequest::new("my-app").resolve(&base()).unwrap();
        assert_eq!(project.name(), "my-app");
        assert_eq!(project.absolute_path(), Path::new("/work/my-app"));
        assert_eq!(project.parent(), Some(Path::new("/work")));
    }

    #[test]
    fn relative_segments_are_normalised() {
        let project = ProjectRequest::new("../apps/./my-app")
            .resolve(&base())
            .unwrap();
        assert_eq!(project.absolute_path(), Path::new("/apps/my-app"));
        assert_eq!(project.name(), "my-app");
    }

    #[test]
    fn trailing_separator_keeps_name() {
        let project = ProjectRequest::new("my-app/").resolve(&base()).unwrap();
        assert_eq!(project.name(), "my-app");
    }

    #[test]
    fn absolute_request_ignores_base() {
        let project = ProjectRequest::new("/tmp/site").resolve(&base()).unwrap();
        assert_eq!(project.absolute_path(), Path::new("/tmp/site"));
    }

    #[test]
    fn dot_takes_base_name() {
        let project = ProjectRequest::new(".").resolve(&base()).unwrap();
        assert_eq!(project.name(), "work");
    }

    #[test]
    #[cfg(unix)]
    fn root_has_no_name() {
        let err = ProjectRequest::new("/").resolve(&base()).unwrap_err();
        assert!(matches!(err, DomainError::UnresolvableProjectName { .. }));
    }

    #[test]
    fn name_matches_basename_invariant() {
        for raw in ["a", "x/y/z", "../q", "deep/./er/"] {
            let project = ProjectRequest::new(raw).resolve(&base()).unwrap();
            let file_name = project.absolute_path().file_name().unwrap();
            assert_eq!(file_name.to_str(), Some(project.name()));
        }
    }
}
