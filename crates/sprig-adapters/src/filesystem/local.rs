//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use sprig_core::{application::ports::Filesystem, error::SprigResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_writable(&self, dir: &Path) -> bool {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "Not a directory");
            return false;
        }
        // Try an anonymous file, unlinked on drop.
        match tempfile::tempfile_in(dir) {
            Ok(_) => true,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Test write failed");
                false
            }
        }
    }

    fn create_dir_all(&self, path: &Path) -> SprigResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SprigResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> sprig_core::error::SprigError {
    use sprig_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_directory_is_writable() {
        let temp = TempDir::new().unwrap();
        assert!(LocalFilesystem::new().is_writable(temp.path()));
    }

    #[test]
    fn writability_check_leaves_no_files_behind() {
        let temp = TempDir::new().unwrap();
        LocalFilesystem::new().is_writable(temp.path());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_directory_is_not_writable() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        assert!(!LocalFilesystem::new().is_writable(&missing));
    }

    #[test]
    fn file_is_not_a_writable_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(!LocalFilesystem::new().is_writable(&file));
    }

    #[test]
    #[cfg(unix)]
    fn read_only_directory_is_not_writable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users bypass permission bits; only assert when the
        // restriction is actually in force.
        let enforced = std::fs::write(locked.join("marker"), "x").is_err();
        if enforced {
            assert!(!LocalFilesystem::new().is_writable(&locked));
        } else {
            assert!(LocalFilesystem::new().is_writable(&locked));
        }

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn write_file_overwrites() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("package.json");

        fs.write_file(&path, "old").unwrap();
        fs.write_file(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn create_dir_all_is_recursive_and_repeatable() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = temp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.is_dir(&nested));
    }

    #[test]
    fn write_into_missing_directory_fails_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/package.json");
        let err = LocalFilesystem::new().write_file(&path, "{}").unwrap_err();
        assert!(err.to_string().contains("package.json"));
    }
}
