/// A literal file-name substitution applied while copying the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRule {
    pub from: String,
    pub to: String,
}

impl RenameRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Ordered set of [`RenameRule`]s, matched by exact base file name.
///
/// Dotfiles are stored without their leading dot in the template so that
/// packaging tools don't drop or act on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameTable {
    rules: Vec<RenameRule>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules applied to the bundled template.
    pub fn standard() -> Self {
        Self::new()
            .with_rule("gitignore", ".gitignore")
            .with_rule("eslintrc", ".eslintrc")
            .with_rule("README-template.md", "README.md")
    }

    pub fn with_rule(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rules.push(RenameRule::new(from, to));
        self
    }

    /// Destination name for `file_name`; the first matching rule wins.
    pub fn resolve<'a>(&'a self, file_name: &'a str) -> &'a str {
        self.rules
            .iter()
            .find(|rule| rule.from == file_name)
            .map_or(file_name, |rule| rule.to.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
