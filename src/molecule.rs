//! Molecule identifiers and the resolved-molecule value shared by the
//! resolver and the viewer composer.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Row key of the feature dataset. Structure artifacts are addressed by the
/// same number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct MoleculeId(pub u32);

impl MoleculeId {
    /// Subtract a fixed offset, `None` on underflow.
    #[must_use]
    pub fn checked_offset(self, offset: u32) -> Option<Self> {
        self.0.checked_sub(offset).map(Self)
    }
}

impl fmt::Display for MoleculeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MoleculeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A chart point mapped back to a dataset row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMolecule {
    /// Row key, also the structure identifier.
    pub internal_id: MoleculeId,
    /// Label shown next to the structure (paper ID or the default label).
    pub display_id: String,
}

impl ResolvedMolecule {
    /// Build a resolved molecule from a row key and its paper ID.
    #[must_use]
    pub fn from_paper_id(internal_id: MoleculeId, paper_id: i64) -> Self {
        Self {
            internal_id,
            display_id: paper_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_numbers() {
        assert_eq!(serde_json::to_string(&MoleculeId(340)).unwrap(), "340");
        assert_eq!(
            serde_json::from_str::<MoleculeId>("340").unwrap(),
            MoleculeId(340)
        );
    }

    #[test]
    fn offset_underflow_is_none() {
        assert_eq!(MoleculeId(817).checked_offset(1), Some(MoleculeId(816)));
        assert_eq!(MoleculeId(0).checked_offset(1), None);
    }
}
