//! Resolved run configuration.
//!
//! Values come from CLI flags, which clap backs with `MODELDOC_*` environment
//! variables (a `.env` file is loaded into the environment first, in
//! `main`). Anything still unset falls back to the defaults below, resolved
//! against the project root.

use std::path::{Component, Path, PathBuf};

use crate::cli::Options;
use crate::dictionary::{self, Locale};

/// Default model manifest filename.
pub const DEFAULT_MANIFEST: &str = "models.yaml";

/// Default diagram output filename.
pub const DEFAULT_DIAGRAM: &str = "result.puml";

/// Default dictionary output filename.
pub const DEFAULT_DICTIONARY: &str = "data_dict.md";

/// Project name used when the root directory has no usable basename.
const FALLBACK_PROJECT_NAME: &str = "project";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the relative paths below are resolved against.
    pub project_root: PathBuf,
    /// Project name, used for the document title.
    pub project_name: String,
    /// Model manifest written by the host framework.
    pub manifest: PathBuf,
    /// Diagram file: extractor output, dictionary input.
    pub diagram: PathBuf,
    /// Dictionary output file.
    pub dictionary: PathBuf,
    /// Explicit document title; derived from the project name when unset.
    pub title: Option<String>,
    /// Wording of the dictionary document.
    pub locale: Locale,
    /// Widen permissions of written files.
    pub editable: bool,
}

impl Config {
    /// Resolves options against `current_dir`.
    #[must_use]
    pub fn resolve(options: &Options, current_dir: &Path) -> Self {
        let project_root = normalize(&match &options.project_root {
            Some(root) => current_dir.join(root),
            None => current_dir.to_path_buf(),
        });
        let project_name = options.project_name.clone().unwrap_or_else(|| {
            project_root
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(FALLBACK_PROJECT_NAME)
                .to_string()
        });
        let in_root = |path: &Option<PathBuf>, default: &str| match path {
            Some(path) => project_root.join(path),
            None => project_root.join(default),
        };

        Self {
            manifest: in_root(&options.manifest, DEFAULT_MANIFEST),
            diagram: in_root(&options.diagram, DEFAULT_DIAGRAM),
            dictionary: in_root(&options.output, DEFAULT_DICTIONARY),
            title: options.title.clone(),
            locale: options.locale.unwrap_or_default(),
            editable: options.editable,
            project_name,
            project_root,
        }
    }

    /// Title for the dictionary document.
    #[must_use]
    pub fn document_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => dictionary::document_title(&self.project_name),
        }
    }
}

/// Resolves `.` and `..` so the root has a real basename.
///
/// Existing directories are canonicalized; anything else is cleaned up
/// lexically.
fn normalize(root: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(root) {
        return canonical;
    }
    let mut cleaned = PathBuf::new();
    for component in root.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Options {
        Options {
            project_root: None,
            project_name: None,
            manifest: None,
            diagram: None,
            output: None,
            title: None,
            locale: None,
            editable: true,
        }
    }

    #[test]
    fn defaults_resolve_in_current_dir() {
        let config = Config::resolve(&options(), Path::new("/work/myshop"));
        assert_eq!(config.project_root, Path::new("/work/myshop"));
        assert_eq!(config.project_name, "myshop");
        assert_eq!(config.manifest, Path::new("/work/myshop/models.yaml"));
        assert_eq!(config.diagram, Path::new("/work/myshop/result.puml"));
        assert_eq!(config.dictionary, Path::new("/work/myshop/data_dict.md"));
        assert_eq!(config.locale, Locale::En);
        assert!(config.editable);
        assert_eq!(config.document_title(), "Myshop");
    }

    #[test]
    fn relative_root_joins_current_dir() {
        let opts = Options { project_root: Some("apps/blog".into()), ..options() };
        let config = Config::resolve(&opts, Path::new("/work"));
        assert_eq!(config.project_root, Path::new("/work/apps/blog"));
        assert_eq!(config.project_name, "blog");
        assert_eq!(config.diagram, Path::new("/work/apps/blog/result.puml"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let opts = Options {
            diagram: Some("/tmp/out/schema.puml".into()),
            output: Some("docs/dictionary.md".into()),
            ..options()
        };
        let config = Config::resolve(&opts, Path::new("/work/shop"));
        assert_eq!(config.diagram, Path::new("/tmp/out/schema.puml"));
        assert_eq!(config.dictionary, Path::new("/work/shop/docs/dictionary.md"));
    }

    #[test]
    fn explicit_title_and_name_win() {
        let opts = Options {
            project_name: Some("store".into()),
            title: Some("Store Schema".into()),
            ..options()
        };
        let config = Config::resolve(&opts, Path::new("/work/shop"));
        assert_eq!(config.project_name, "store");
        assert_eq!(config.document_title(), "Store Schema");
    }

    #[test]
    fn parent_dir_root_takes_the_parent_name() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("inventory");
        let child = parent.join("backend");
        std::fs::create_dir_all(&child).unwrap();

        let opts = Options { project_root: Some("..".into()), ..options() };
        let config = Config::resolve(&opts, &child);
        assert_eq!(config.project_name, "inventory");
        assert_eq!(config.document_title(), "Inventory");
        assert_eq!(config.project_root, std::fs::canonicalize(&parent).unwrap());
    }

    #[test]
    fn dotted_root_is_cleaned_when_missing() {
        let opts = Options { project_root: Some("./apps/../shop".into()), ..options() };
        let config = Config::resolve(&opts, Path::new("/nonexistent-modeldoc/work"));
        assert_eq!(config.project_root, Path::new("/nonexistent-modeldoc/work/shop"));
        assert_eq!(config.project_name, "shop");
    }

    #[test]
    fn root_without_basename_uses_fallback() {
        let config = Config::resolve(&options(), Path::new("/"));
        assert_eq!(config.project_name, FALLBACK_PROJECT_NAME);
    }
}
