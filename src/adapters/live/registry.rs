//! Manifest-backed model registry.

use std::path::{Path, PathBuf};

use crate::manifest::{self, ManifestFormat};
use crate::model::ModelDescriptor;
use crate::ports::filesystem::FileSystem;
use crate::ports::registry::ModelRegistry;

/// Registry loaded from a manifest file written by the host framework.
///
/// The manifest is read and decoded once, at load time; later calls to
/// [`ModelRegistry::models`] serve the decoded descriptors.
#[derive(Debug)]
pub struct ManifestRegistry {
    path: PathBuf,
    models: Vec<ModelDescriptor>,
}

impl ManifestRegistry {
    /// Reads and decodes the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, String> {
        let content = fs
            .read_to_string(path)
            .map_err(|e| format!("failed to read model manifest {}: {e}", path.display()))?;
        let models = manifest::parse(&content, ManifestFormat::from_path(path))
            .map_err(|e| format!("failed to load model manifest {}: {e}", path.display()))?;
        log::debug!("loaded {} models from {}", models.len(), path.display());
        Ok(Self { path: path.to_path_buf(), models })
    }

    /// Path the manifest was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelRegistry for ManifestRegistry {
    fn models(&self) -> Result<Vec<ModelDescriptor>, String> {
        Ok(self.models.clone())
    }
}
