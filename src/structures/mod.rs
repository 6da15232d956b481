//! Per-molecule 3D structure payloads.
//!
//! A payload pairs the viewer's model data (atoms and bonds) with its style
//! descriptor. Both are passed through to the browser viewer untouched.
//! Payloads are fetched lazily, one artifact per molecule.

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::molecule::MoleculeId;

/// Model geometry plus render style for one molecule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructurePayload {
    /// Structure identifier (the molecule's row key).
    pub id: MoleculeId,
    /// Atoms and bonds in the viewer's model format.
    pub model: serde_json::Value,
    /// Per-atom render styles.
    pub styles: serde_json::Value,
}

impl StructurePayload {
    /// Decode an artifact.
    ///
    /// Accepts `{"model": .., "styles": ..}` (also spelled
    /// `modelData`/`mol_data` and `style_data`) or a two-element array
    /// `[model, styles]`.
    pub fn from_json(
        id: MoleculeId,
        bytes: &[u8],
    ) -> Result<Self, DashboardError> {
        let artifact: Artifact =
            serde_json::from_slice(bytes).map_err(|e| {
                DashboardError::StructureParse {
                    id,
                    message: e.to_string(),
                }
            })?;
        let (model, styles) = match artifact {
            Artifact::Object { model, styles } => (model, styles),
            Artifact::Pair(model, styles) => (model, styles),
        };
        Ok(Self { id, model, styles })
    }

    /// Number of atoms in the model, when it has an `atoms` array.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.model
            .get("atoms")
            .and_then(serde_json::Value::as_array)
            .map_or(0, Vec::len)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Artifact {
    Object {
        #[serde(alias = "modelData", alias = "mol_data")]
        model: serde_json::Value,
        #[serde(alias = "style_data", default)]
        styles: serde_json::Value,
    },
    Pair(serde_json::Value, serde_json::Value),
}

/// Read-only source of structure payloads.
///
/// Fetching the same identifier twice must return identical payloads.
pub trait StructureStore: Send + Sync {
    /// Fetch the payload for `id`, or [`DashboardError::StructureNotFound`].
    fn get(&self, id: MoleculeId) -> Result<StructurePayload, DashboardError>;

    /// Whether an artifact exists for `id`.
    fn contains(&self, id: MoleculeId) -> bool {
        self.get(id).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_object_artifact() {
        let json = br##"{"modelData": {"atoms": [{"element": "C"}, {"element": "N"}], "bonds": []}, "style_data": {"0": {"color": "#909090"}}}"##;
        let payload = StructurePayload::from_json(MoleculeId(7), json).unwrap();
        assert_eq!(payload.atom_count(), 2);
        assert_eq!(payload.styles["0"]["color"], "#909090");
    }

    #[test]
    fn decodes_pair_artifact() {
        let json = br#"[{"atoms": [], "bonds": []}, {}]"#;
        let payload = StructurePayload::from_json(MoleculeId(7), json).unwrap();
        assert_eq!(payload.atom_count(), 0);
        assert!(payload.styles.is_object());
    }

    #[test]
    fn rejects_garbage() {
        let err = StructurePayload::from_json(MoleculeId(7), b"not json")
            .unwrap_err();
        assert!(matches!(
            err,
            DashboardError::StructureParse { id: MoleculeId(7), .. }
        ));
    }
}
