use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the feature table lives and which of its columns carry the row
/// key, the display ID and the group labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Dataset", inline)]
#[serde(default)]
pub struct DatasetOptions {
    /// CSV file with one row per molecule.
    pub path: PathBuf,
    /// Row key column.
    pub id_column: String,
    /// Column holding the ID used in the publication.
    pub paper_id_column: String,
    /// Integer group-label columns. The first is the default grouping; the
    /// rest are alternative clusterings (e.g. different k).
    pub group_columns: Vec<String>,
    /// 2D embedding columns used by the cluster view.
    pub cluster_axes: [String; 2],
    /// 2D embedding columns used by the validation view.
    pub validation_axes: [String; 2],
    /// Non-numeric columns skipped while loading.
    pub ignored_columns: Vec<String>,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/electronic_features.csv"),
            id_column: "ID".to_owned(),
            paper_id_column: "ID in paper".to_owned(),
            group_columns: vec!["group".to_owned()],
            cluster_axes: ["pos_0".to_owned(), "pos_1".to_owned()],
            validation_axes: [
                "b3lypsoapval_pos0".to_owned(),
                "b3lypsoapval_pos1".to_owned(),
            ],
            ignored_columns: vec!["smiles".to_owned()],
        }
    }
}

impl DatasetOptions {
    /// Whether `name` is one of the structural (non-feature) columns.
    #[must_use]
    pub fn is_key_column(&self, name: &str) -> bool {
        name == self.id_column
            || name == self.paper_id_column
            || self.group_columns.iter().any(|g| g == name)
            || self.ignored_columns.iter().any(|c| c == name)
    }
}
