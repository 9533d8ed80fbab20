use std::fmt;
use std::path::{Path, PathBuf};

/// Where the template tree copied into a new project comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The template compiled into the binary.
    #[default]
    Bundled,
    /// A template directory on disk.
    Directory(PathBuf),
}

impl TemplateSource {
    /// The template root on disk, if any.
    pub fn directory(&self) -> Option<&Path> {
        match self {
            Self::Bundled => None,
            Self::Directory(root) => Some(root),
        }
    }
}

impl From<PathBuf> for TemplateSource {
    fn from(root: PathBuf) -> Self {
        Self::Directory(root)
    }
}

impl From<&Path> for TemplateSource {
    fn from(root: &Path) -> Self {
        Self::Directory(root.to_path_buf())
    }
}

impl From<&str> for TemplateSource {
    fn from(root: &str) -> Self {
        Self::Directory(PathBuf::from(root))
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled template"),
            Self::Directory(root) => write!(f, "{}", root.display()),
        }
    }
}
