use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::molecule::MoleculeId;

/// Library / blind-test split. The same value drives the validation chart
/// and the resolver, so the two always agree on where series 1 starts and
/// how its IDs are shifted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Validation", inline)]
#[serde(default)]
pub struct ValidationOptions {
    /// Last row ID belonging to the library series.
    pub boundary: MoleculeId,
    /// Subtracted from blind-test row IDs when resolving a picked point.
    pub offset: u32,
    /// Outcome column driving marker size.
    pub outcome_column: String,
    /// Marker size = outcome * scale + size_offset.
    pub outcome_scale: f64,
    /// See `outcome_scale`.
    pub size_offset: f64,
    /// Legend name of series 0.
    pub library_name: String,
    /// Legend name of series 1.
    pub blind_test_name: String,
    /// Marker colour of series 0.
    pub library_color: String,
    /// Marker colour of series 1.
    pub blind_test_color: String,
    /// Marker opacity of series 0.
    pub library_opacity: f64,
    /// Marker opacity of series 1.
    pub blind_test_opacity: f64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            boundary: MoleculeId(816),
            offset: 1,
            outcome_column: "Hydrogen evolution rate / µmol/h".to_owned(),
            outcome_scale: 1.5,
            size_offset: 10.0,
            library_name: "572-molecule library".to_owned(),
            blind_test_name: "Blind test".to_owned(),
            library_color: "blue".to_owned(),
            blind_test_color: "red".to_owned(),
            library_opacity: 0.5,
            blind_test_opacity: 0.8,
        }
    }
}

impl ValidationOptions {
    /// Series index (0 = library, 1 = blind test) a row ID is drawn in.
    #[must_use]
    pub fn series_of(&self, id: MoleculeId) -> usize {
        usize::from(id > self.boundary)
    }
}
