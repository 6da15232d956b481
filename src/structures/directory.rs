use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StructurePayload, StructureStore};
use crate::error::DashboardError;
use crate::molecule::MoleculeId;
use crate::options::StructureOptions;

/// Reads `{directory}/{id}.{extension}` on every fetch.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    directory: PathBuf,
    extension: String,
}

impl DirectoryStore {
    /// Store rooted at `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.trim_start_matches('.').to_owned(),
        }
    }

    /// Store configured from options.
    #[must_use]
    pub fn from_options(options: &StructureOptions) -> Self {
        Self::new(&options.directory, &options.extension)
    }

    /// Root directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Artifact path for `id`.
    #[must_use]
    pub fn artifact_path(&self, id: MoleculeId) -> PathBuf {
        self.directory.join(format!("{id}.{}", self.extension))
    }
}

impl StructureStore for DirectoryStore {
    fn get(&self, id: MoleculeId) -> Result<StructurePayload, DashboardError> {
        let path = self.artifact_path(id);
        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DashboardError::StructureNotFound(id),
            _ => DashboardError::Io(e),
        })?;
        StructurePayload::from_json(id, &bytes)
    }

    fn contains(&self, id: MoleculeId) -> bool {
        self.artifact_path(id).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(dir: &Path, id: u32, body: &str) {
        std::fs::write(dir.join(format!("{id}.json")), body).unwrap();
    }

    #[test]
    fn fetches_are_idempotent() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_artifact(
            tmp.path(),
            340,
            r#"{"model": {"atoms": [{"element": "O"}]}, "styles": {}}"#,
        );
        let store = DirectoryStore::new(tmp.path(), "json");
        let a = store.get(MoleculeId(340)).unwrap();
        let b = store.get(MoleculeId(340)).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = DirectoryStore::new(tmp.path(), ".json");
        assert!(matches!(
            store.get(MoleculeId(1)),
            Err(DashboardError::StructureNotFound(MoleculeId(1)))
        ));
        assert!(!store.contains(MoleculeId(1)));
    }

    #[test]
    fn artifact_path_uses_extension() {
        let store = DirectoryStore::new("data/json_data", ".json");
        assert_eq!(
            store.artifact_path(MoleculeId(12)),
            PathBuf::from("data/json_data/12.json")
        );
    }
}
