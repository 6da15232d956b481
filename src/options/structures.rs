use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::molecule::{MoleculeId, ResolvedMolecule};

/// Structure artifact location and the default molecule shown when nothing
/// (or nothing usable) is selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Structures", inline)]
#[serde(default)]
pub struct StructureOptions {
    /// Directory holding one artifact per molecule.
    pub directory: PathBuf,
    /// Artifact file extension, without the dot.
    pub extension: String,
    /// Molecule rendered when there is no usable selection.
    pub default_id: MoleculeId,
    /// Label shown for the default molecule.
    pub default_label: String,
}

impl Default for StructureOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data/json_data"),
            extension: "json".to_owned(),
            default_id: MoleculeId(340),
            default_label: "default 153".to_owned(),
        }
    }
}

impl StructureOptions {
    /// The fallback selection.
    #[must_use]
    pub fn default_molecule(&self) -> ResolvedMolecule {
        ResolvedMolecule {
            internal_id: self.default_id,
            display_id: self.default_label.clone(),
        }
    }
}
