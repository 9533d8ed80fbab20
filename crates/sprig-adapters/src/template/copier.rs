//! Template materializer for the bundled template and template directories.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rust_embed::RustEmbed;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use sprig_core::{
    application::{ApplicationError, ports::TemplateMaterializer},
    domain::{RenameTable, TemplateSource},
    error::{SprigError, SprigResult},
};

/// Template tree compiled into the binary.
#[derive(RustEmbed)]
#[folder = "template/"]
struct BundledTemplate;

/// Copies a template tree into a project, file by file.
///
/// Existing files at the destination are overwritten, so running twice
/// yields the same tree. Symlinks in template directories are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCopier;

impl TemplateCopier {
    pub fn new() -> Self {
        Self
    }

    /// Destination for a template file at `relative` (relative to the
    /// template root) after applying `renames` to its base name.
    fn destination(dest_root: &Path, relative: &Path, renames: &RenameTable) -> PathBuf {
        let target = dest_root.join(relative);
        match relative.file_name().and_then(|n| n.to_str()) {
            Some(name) => {
                let renamed = renames.resolve(name);
                if renamed != name {
                    debug!(from = name, to = renamed, "Renaming template file");
                }
                target.with_file_name(renamed)
            }
            None => target,
        }
    }

    fn copy_bundled(dest_root: &Path, renames: &RenameTable) -> SprigResult<usize> {
        let files = bundled_files();

        for relative in &files {
            let Some(file) = BundledTemplate::get(relative) else {
                return Err(ApplicationError::MaterializeFailed {
                    path: PathBuf::from(relative),
                    reason: "missing from the bundled template".into(),
                }
                .into());
            };

            let target = Self::destination(dest_root, Path::new(relative), renames);
            create_parent(&target)?;
            fs::write(&target, &file.data).map_err(|e| write_error(&target, e))?;
        }

        Ok(files.len())
    }

    fn copy_directory(
        template_root: &Path,
        dest_root: &Path,
        renames: &RenameTable,
    ) -> SprigResult<usize> {
        if !template_root.is_dir() {
            return Err(ApplicationError::MaterializeFailed {
                path: template_root.to_path_buf(),
                reason: "template directory not found".into(),
            }
            .into());
        }

        let mut copied = 0usize;

        for walk_entry in WalkDir::new(template_root).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::MaterializeFailed {
                path: e
                    .path()
                    .map_or_else(|| template_root.to_path_buf(), Path::to_path_buf),
                reason: format!("directory walk error: {e}"),
            })?;
            let source = walk_entry.path();
            let relative = source.strip_prefix(template_root).map_err(|_| {
                ApplicationError::MaterializeFailed {
                    path: source.to_path_buf(),
                    reason: format!("not inside {}", template_root.display()),
                }
            })?;

            if walk_entry.file_type().is_dir() {
                let dir = dest_root.join(relative);
                fs::create_dir_all(&dir).map_err(|e| write_error(&dir, e))?;
                continue;
            }

            if !walk_entry.file_type().is_file() {
                debug!(path = %source.display(), "Skipping non-regular file");
                continue;
            }

            let target = Self::destination(dest_root, relative, renames);
            create_parent(&target)?;
            fs::copy(source, &target).map_err(|e| write_error(&target, e))?;
            copied += 1;
        }

        Ok(copied)
    }
}

impl TemplateMaterializer for TemplateCopier {
    #[instrument(skip_all, fields(template = %template, dest = %dest_root.display()))]
    fn materialize(
        &self,
        template: &TemplateSource,
        dest_root: &Path,
        renames: &RenameTable,
    ) -> SprigResult<()> {
        let copied = match template {
            TemplateSource::Bundled => Self::copy_bundled(dest_root, renames)?,
            TemplateSource::Directory(root) => Self::copy_directory(root, dest_root, renames)?,
        };

        info!(files = copied, "Template copied");
        Ok(())
    }
}

/// Relative paths of the bundled template files, `/`-separated and sorted.
fn bundled_files() -> Vec<String> {
    let mut files: Vec<String> = BundledTemplate::iter().map(|p| p.into_owned()).collect();
    files.sort();
    files
}

fn create_parent(target: &Path) -> SprigResult<()> {
    match target.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(|e| write_error(parent, e)),
        None => Ok(()),
    }
}

fn write_error(path: &Path, e: io::Error) -> SprigError {
    ApplicationError::MaterializeFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn make_template(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (path, content) in files {
            let full = temp.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        temp
    }

    fn copy(template: impl Into<TemplateSource>, dest: &Path) -> SprigResult<()> {
        let renames = RenameTable::standard();
        TemplateCopier::new().materialize(&template.into(), dest, &renames)
    }

    /// Relative path → content for every file under `root`.
    fn snapshot(root: &Path) -> BTreeMap<String, String> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e.path().strip_prefix(root).unwrap();
                (
                    rel.to_string_lossy().replace('\\', "/"),
                    fs::read_to_string(e.path()).unwrap(),
                )
            })
            .collect()
    }

    fn standard_template() -> TempDir {
        make_template(&[
            ("gitignore", "node_modules\n"),
            ("eslintrc", "{}\n"),
            ("README-template.md", "# App\n"),
            ("src/index.html", "<html></html>\n"),
            ("src/nested/gitignore", "dist\n"),
        ])
    }

    #[test]
    fn copies_tree_with_renames() {
        let template = standard_template();
        let dest = TempDir::new().unwrap();

        copy(template.path(), dest.path()).unwrap();

        let tree = snapshot(dest.path());
        let names: Vec<_> = tree.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                ".eslintrc",
                ".gitignore",
                "README.md",
                "src/index.html",
                "src/nested/.gitignore",
            ]
        );
        assert_eq!(tree[".gitignore"], "node_modules\n");
    }

    #[test]
    fn second_run_produces_identical_tree() {
        let template = standard_template();
        let dest = TempDir::new().unwrap();

        copy(template.path(), dest.path()).unwrap();
        let first = snapshot(dest.path());

        copy(template.path(), dest.path()).unwrap();
        assert_eq!(snapshot(dest.path()), first);
    }

    #[test]
    fn existing_files_are_overwritten() {
        let template = make_template(&[("src/App.jsx", "new")]);
        let dest = TempDir::new().unwrap();
        fs::create_dir_all(dest.path().join("src")).unwrap();
        fs::write(dest.path().join("src/App.jsx"), "old").unwrap();
        fs::write(dest.path().join("package.json"), "{}").unwrap();

        copy(template.path(), dest.path()).unwrap();

        let app = fs::read_to_string(dest.path().join("src/App.jsx")).unwrap();
        assert_eq!(app, "new");
        // files outside the template are left alone
        let manifest = fs::read_to_string(dest.path().join("package.json")).unwrap();
        assert_eq!(manifest, "{}");
    }

    #[test]
    fn empty_rename_table_keeps_names() {
        let template = make_template(&[("gitignore", "x")]);
        let dest = TempDir::new().unwrap();
        let source = TemplateSource::from(template.path());

        TemplateCopier::new()
            .materialize(&source, dest.path(), &RenameTable::new())
            .unwrap();

        assert!(dest.path().join("gitignore").is_file());
        assert!(!dest.path().join(".gitignore").exists());
    }

    #[test]
    fn empty_directories_are_recreated() {
        let template = TempDir::new().unwrap();
        fs::create_dir_all(template.path().join("public/assets")).unwrap();
        let dest = TempDir::new().unwrap();

        copy(template.path(), dest.path()).unwrap();

        assert!(dest.path().join("public/assets").is_dir());
    }

    #[test]
    fn missing_template_root_fails() {
        let dest = TempDir::new().unwrap();
        let missing = dest.path().join("no-template");

        let err = copy(missing.as_path(), dest.path()).unwrap_err();

        assert!(matches!(
            err,
            SprigError::Application(ApplicationError::MaterializeFailed { ref path, .. })
                if path == &missing
        ));
    }

    #[test]
    fn destination_rename_uses_base_name_only() {
        let renames = RenameTable::standard();
        let dest = Path::new("/p");
        assert_eq!(
            TemplateCopier::destination(dest, Path::new("a/gitignore"), &renames),
            PathBuf::from("/p/a/.gitignore")
        );
        assert_eq!(
            TemplateCopier::destination(dest, Path::new("gitignore/x"), &renames),
            PathBuf::from("/p/gitignore/x")
        );
    }

    #[test]
    fn bundled_template_ships_starter_files() {
        let files = bundled_files();
        for file in [
            "README-template.md",
            "eslintrc",
            "gitignore",
            "src/App.jsx",
            "src/index.html",
            "src/index.jsx",
        ] {
            assert!(files.iter().any(|f| f == file), "missing {file}");
        }
    }

    #[test]
    fn bundled_template_is_copied_with_renames() {
        let dest = TempDir::new().unwrap();

        copy(TemplateSource::Bundled, dest.path()).unwrap();

        let tree = snapshot(dest.path());
        assert!(tree.contains_key(".gitignore"));
        assert!(tree.contains_key(".eslintrc"));
        assert!(tree.contains_key("README.md"));
        assert!(tree.contains_key("src/index.html"));
        assert!(!tree.contains_key("gitignore"));
        assert!(!tree.contains_key("README-template.md"));
    }

    #[test]
    fn bundled_template_copy_is_idempotent() {
        let dest = TempDir::new().unwrap();

        copy(TemplateSource::Bundled, dest.path()).unwrap();
        let first = snapshot(dest.path());

        copy(TemplateSource::Bundled, dest.path()).unwrap();
        assert_eq!(snapshot(dest.path()), first);
    }
}
