use rustc_hash::FxHashMap;

use super::{StructurePayload, StructureStore};
use crate::error::DashboardError;
use crate::molecule::MoleculeId;

/// Structure store backed by a map, for fixtures and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    payloads: FxHashMap<MoleculeId, StructurePayload>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a payload.
    pub fn insert(&mut self, payload: StructurePayload) {
        let _ = self.payloads.insert(payload.id, payload);
    }

    /// Add a single-atom placeholder model for each id.
    #[must_use]
    pub fn with_placeholders<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = MoleculeId>,
    {
        let mut store = Self::new();
        for id in ids {
            store.insert(StructurePayload {
                id,
                model: serde_json::json!({
                    "atoms": [{ "serial": 0, "element": "C", "positions": [0.0, 0.0, 0.0] }],
                    "bonds": [],
                }),
                styles: serde_json::json!({ "0": { "color": "#909090", "visualization_type": "stick" } }),
            });
        }
        store
    }
}

impl StructureStore for MemoryStore {
    fn get(&self, id: MoleculeId) -> Result<StructurePayload, DashboardError> {
        self.payloads
            .get(&id)
            .cloned()
            .ok_or(DashboardError::StructureNotFound(id))
    }
}
