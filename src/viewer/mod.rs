//! Resolved molecules → viewer fragments.
//!
//! Each fragment pairs the display label with the structure payload the
//! browser viewer renders. A missing or unreadable artifact is replaced by
//! the default structure so the panel never goes blank.

use serde::Serialize;

use crate::error::DashboardError;
use crate::molecule::{MoleculeId, ResolvedMolecule};
use crate::structures::{StructurePayload, StructureStore};

/// One structure panel entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewFragment {
    /// Caption, `"Structure ID: {display_id}"`.
    pub label: String,
    /// Molecule the fragment was resolved to.
    pub molecule: ResolvedMolecule,
    /// Identifier of the structure actually shown.
    pub structure_id: MoleculeId,
    /// Whether the default structure was substituted.
    pub substituted: bool,
    /// Model and styles; `None` only if even the default is unavailable.
    pub payload: Option<StructurePayload>,
}

/// Fetches structures for resolved molecules.
#[derive(Clone, Copy)]
pub struct ViewerComposer<'a> {
    structures: &'a dyn StructureStore,
    default_id: MoleculeId,
}

impl<'a> ViewerComposer<'a> {
    /// Composer reading from `structures`, falling back to `default_id`.
    #[must_use]
    pub fn new(structures: &'a dyn StructureStore, default_id: MoleculeId) -> Self {
        Self {
            structures,
            default_id,
        }
    }

    /// One fragment per molecule, in order; duplicates are kept.
    #[must_use]
    pub fn compose(&self, molecules: &[ResolvedMolecule]) -> Vec<ViewFragment> {
        molecules.iter().map(|m| self.fragment(m)).collect()
    }

    fn fragment(&self, molecule: &ResolvedMolecule) -> ViewFragment {
        let label = format!("Structure ID: {}", molecule.display_id);
        match self.structures.get(molecule.internal_id) {
            Ok(payload) => ViewFragment {
                label,
                molecule: molecule.clone(),
                structure_id: molecule.internal_id,
                substituted: false,
                payload: Some(payload),
            },
            Err(e) => {
                log::warn!(
                    "structure {} unavailable ({e}); showing default {}",
                    molecule.internal_id,
                    self.default_id
                );
                ViewFragment {
                    label,
                    molecule: molecule.clone(),
                    structure_id: self.default_id,
                    substituted: true,
                    payload: self.default_payload(),
                }
            }
        }
    }

    fn default_payload(&self) -> Option<StructurePayload> {
        match self.structures.get(self.default_id) {
            Ok(payload) => Some(payload),
            Err(DashboardError::StructureNotFound(_)) => {
                log::error!("default structure {} is missing", self.default_id);
                None
            }
            Err(e) => {
                log::error!("default structure {} unreadable: {e}", self.default_id);
                None
            }
        }
    }
}
