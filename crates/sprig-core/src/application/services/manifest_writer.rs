//! Manifest Writer - synthesises and persists `package.json`.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{LINE_ENDING, MANIFEST_FILE_NAME, Manifest},
    error::SprigResult,
};

/// Writes a fresh manifest into a project root.
///
/// Any existing manifest is replaced, never merged.
pub struct ManifestWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ManifestWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write the manifest for `name` to `<root>/package.json`.
    ///
    /// Returns the path written.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn write(&self, root: &Path, name: &str) -> SprigResult<PathBuf> {
        let path = root.join(MANIFEST_FILE_NAME);
        let content = Self::render(&Manifest::new(name))?;

        self.filesystem.write_file(&path, &content)?;
        debug!(path = %path.display(), bytes = content.len(), "Manifest written");

        Ok(path)
    }

    /// Two-space indented JSON followed by the platform line ending.
    pub fn render(manifest: &Manifest) -> SprigResult<String> {
        let mut json = serde_json::to_string_pretty(manifest).map_err(|e| {
            ApplicationError::SerializationFailed {
                reason: e.to_string(),
            }
        })?;
        json.push_str(LINE_ENDING);
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use mockall::predicate::{always, eq};

    #[test]
    fn render_is_indented_with_trailing_line_ending() {
        let text = ManifestWriter::render(&Manifest::new("my-app")).unwrap();
        assert!(text.starts_with("{\n  \"name\": \"my-app\","));
        assert!(text.contains("\n  \"scripts\": {\n    \"start\": "));
        assert!(text.ends_with(&format!("}}{LINE_ENDING}")));
    }

    #[test]
    fn render_round_trips_fixed_fields() {
        let text = ManifestWriter::render(&Manifest::new("my-app")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "my-app");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["private"], true);
        assert!(value["scripts"]["start"].is_string());
        assert!(value["scripts"]["build"].is_string());
    }

    #[test]
    fn write_targets_manifest_file_in_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .with(eq(Path::new("/work/my-app/package.json")), always())
            .times(1)
            .returning(|_, content| {
                assert!(content.contains("\"name\": \"my-app\""));
                Ok(())
            });

        let path = ManifestWriter::new(&fs)
            .write(Path::new("/work/my-app"), "my-app")
            .unwrap();
        assert_eq!(path, PathBuf::from("/work/my-app/package.json"));
    }

    #[test]
    fn write_propagates_filesystem_errors() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let err = ManifestWriter::new(&fs)
            .write(Path::new("/work/my-app"), "my-app")
            .unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
