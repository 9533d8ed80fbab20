use std::fmt;

/// Packages needed when the application runs.
pub const RUNTIME_PACKAGES: &[&str] = &["react", "react-dom"];

/// Packages needed only for building and linting.
pub const DEVELOPMENT_PACKAGES: &[&str] = &["parcel", "eslint", "eslint-plugin-react"];

/// Which manifest section an install lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Runtime,
    Development,
}

impl DependencyKind {
    /// Installer flag selecting the manifest section.
    pub fn save_flag(self) -> &'static str {
        match self {
            Self::Runtime => "--save",
            Self::Development => "--save-dev",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runtime => write!(f, "runtime"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// An ordered group of package identifiers installed in one call.
///
/// An empty set means "install nothing" for that phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySet {
    kind: DependencyKind,
    packages: Vec<String>,
}

impl DependencySet {
    pub fn new<I, S>(kind: DependencyKind, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty(kind: DependencyKind) -> Self {
        Self {
            kind,
            packages: Vec::new(),
        }
    }

    /// The fixed runtime set.
    pub fn runtime() -> Self {
        Self::new(DependencyKind::Runtime, RUNTIME_PACKAGES.iter().copied())
    }

    /// The fixed development set.
    pub fn development() -> Self {
        Self::new(
            DependencyKind::Development,
            DEVELOPMENT_PACKAGES.iter().copied(),
        )
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sets_are_not_empty() {
        assert_eq!(DependencySet::runtime().packages(), ["react", "react-dom"]);
        let development = DependencySet::development();
        assert!(!development.is_empty());
        assert_eq!(development.kind(), DependencyKind::Development);
    }

    #[test]
    fn empty_set_keeps_kind() {
        let set = DependencySet::empty(DependencyKind::Development);
        assert!(set.is_empty());
        assert_eq!(set.kind(), DependencyKind::Development);
    }

    #[test]
    fn save_flags() {
        assert_eq!(DependencyKind::Runtime.save_flag(), "--save");
        assert_eq!(DependencyKind::Development.save_flag(), "--save-dev");
    }

    #[test]
    fn package_order_is_preserved() {
        let set = DependencySet::new(DependencyKind::Runtime, ["b", "a", "c"]);
        assert_eq!(set.packages(), ["b", "a", "c"]);
    }
}
