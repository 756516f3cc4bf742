//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Mode applied by [`FileSystem::make_editable`] on Unix.
#[cfg(unix)]
const EDITABLE_MODE: u32 = 0o777;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[cfg(unix)]
    fn make_editable(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(EDITABLE_MODE))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn make_editable(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut permissions = std::fs::metadata(path)?.permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        std::fs::set_permissions(path, permissions)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/out/result.puml");
        LiveFileSystem.write(&path, "@startuml\n").unwrap();
        assert_eq!(LiveFileSystem.read_to_string(&path).unwrap(), "@startuml\n");
        assert!(LiveFileSystem.exists(&path));
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LiveFileSystem.read_to_string(&dir.path().join("missing.puml")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn make_editable_widens_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_dict.md");
        LiveFileSystem.write(&path, "## Shop\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o444)).unwrap();

        LiveFileSystem.make_editable(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, EDITABLE_MODE);
    }

    #[test]
    fn make_editable_on_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LiveFileSystem.make_editable(&dir.path().join("missing.md")).is_err());
    }
}
