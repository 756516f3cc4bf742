//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::registry::ManifestRegistry;
use crate::config::Config;
use crate::ports::filesystem::FileSystem;
use crate::ports::registry::ModelRegistry;

/// Bundles the external boundaries used by both stages.
///
/// Constructors wire up different adapter implementations (live disk, or a
/// caller-supplied filesystem such as the in-memory one in tests).
pub struct ServiceContext {
    /// Filesystem for reading inputs and writing outputs.
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Arc::new(LiveFileSystem) }
    }

    /// Creates a context over the given filesystem.
    #[must_use]
    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Initializes the host framework's model registry.
    ///
    /// This is the one-time bootstrap step: nothing downstream is meaningful
    /// without it, so any failure here is fatal to the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is missing or cannot be decoded.
    pub fn bootstrap_registry(&self, config: &Config) -> Result<Box<dyn ModelRegistry>, String> {
        if !self.fs.exists(&config.manifest) {
            return Err(format!(
                "model manifest not found at {} (export the host models first)",
                config.manifest.display()
            ));
        }
        let registry = ManifestRegistry::load(self.fs.as_ref(), &config.manifest)?;
        log::info!("model registry ready from {}", registry.path().display());
        Ok(Box::new(registry))
    }

    /// Writes an output file wholesale, then widens its permissions when
    /// `editable` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or the permission change fails.
    pub fn write_output(&self, path: &Path, contents: &str, editable: bool) -> Result<(), String> {
        self.fs
            .write(path, contents)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        if editable {
            self.fs
                .make_editable(path)
                .map_err(|e| format!("failed to make {} editable: {e}", path.display()))?;
        }
        log::info!("wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}
