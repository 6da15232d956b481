//! Read-only feature table keyed by molecule ID.
//!
//! Loaded once at startup from a CSV file (or built from in-memory rows in
//! tests) and shared immutably for the lifetime of the process. Row order is
//! the file order; chart series and the selection resolver both rely on it.

mod grouping;
mod parse;

use std::io::Read;

pub use grouping::Grouping;
use rustc_hash::FxHashMap;

use crate::error::DashboardError;
use crate::molecule::MoleculeId;
use crate::options::DatasetOptions;

/// Largest accepted group label. The cluster view draws one series per
/// label up to the largest one present.
pub const MAX_GROUP_LABEL: u32 = 256;

/// One molecule's record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// Unique row key.
    pub id: MoleculeId,
    /// ID used in the publication, shown to the user.
    pub paper_id: i64,
    /// One label per group column, aligned with
    /// [`FeatureStore::group_columns`].
    pub groups: Vec<u32>,
    /// Numeric feature values, aligned with [`FeatureStore::columns`].
    pub values: Vec<f64>,
}

impl FeatureRow {
    /// Build a row.
    #[must_use]
    pub fn new(
        id: impl Into<MoleculeId>,
        paper_id: i64,
        groups: Vec<u32>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            paper_id,
            groups,
            values,
        }
    }
}

/// Immutable feature table.
#[derive(Debug, Clone)]
pub struct FeatureStore {
    columns: Vec<String>,
    column_index: FxHashMap<String, usize>,
    group_columns: Vec<String>,
    rows: Vec<FeatureRow>,
    by_id: FxHashMap<MoleculeId, usize>,
}

impl FeatureStore {
    /// Load the CSV file named by `options.path`.
    pub fn load(options: &DatasetOptions) -> Result<Self, DashboardError> {
        let file = std::fs::File::open(&options.path).map_err(|e| {
            DashboardError::DataLoad(format!(
                "cannot open {}: {e}",
                options.path.display()
            ))
        })?;
        let store = Self::from_reader(file, options)?;
        log::info!(
            "Loaded {} molecules ({} feature columns, {} groupings) from {}",
            store.len(),
            store.columns.len(),
            store.group_columns.len(),
            options.path.display()
        );
        Ok(store)
    }

    /// Parse CSV text from any reader.
    pub fn from_reader<R: Read>(
        reader: R,
        options: &DatasetOptions,
    ) -> Result<Self, DashboardError> {
        let table = parse::read_table(reader, options)?;
        Self::from_rows(table.columns, table.group_columns, table.rows)
    }

    /// Build a store from already-parsed rows.
    ///
    /// Fails on duplicate IDs, on rows whose value or group vectors do not
    /// match the column lists, on group labels above [`MAX_GROUP_LABEL`],
    /// and when no group column is given.
    pub fn from_rows(
        columns: Vec<String>,
        group_columns: Vec<String>,
        rows: Vec<FeatureRow>,
    ) -> Result<Self, DashboardError> {
        if group_columns.is_empty() {
            return Err(DashboardError::DataLoad(
                "at least one group column is required".to_owned(),
            ));
        }

        let mut column_index = FxHashMap::default();
        for (i, name) in columns.iter().enumerate() {
            if column_index.insert(name.clone(), i).is_some() {
                return Err(DashboardError::DataLoad(format!(
                    "duplicate column {name}"
                )));
            }
        }

        let mut by_id = FxHashMap::default();
        for (i, row) in rows.iter().enumerate() {
            if row.values.len() != columns.len() {
                return Err(DashboardError::DataLoad(format!(
                    "row {} has {} values, expected {}",
                    row.id,
                    row.values.len(),
                    columns.len()
                )));
            }
            if row.groups.len() != group_columns.len() {
                return Err(DashboardError::DataLoad(format!(
                    "row {} has {} group labels, expected {}",
                    row.id,
                    row.groups.len(),
                    group_columns.len()
                )));
            }
            if let Some((col, &label)) = row
                .groups
                .iter()
                .enumerate()
                .find(|&(_, &label)| label > MAX_GROUP_LABEL)
            {
                return Err(DashboardError::DataLoad(format!(
                    "row {} has group label {label} in column {}, above the \
                     maximum of {MAX_GROUP_LABEL}",
                    row.id, group_columns[col]
                )));
            }
            if by_id.insert(row.id, i).is_some() {
                return Err(DashboardError::DataLoad(format!(
                    "duplicate ID {}",
                    row.id
                )));
            }
        }

        Ok(Self {
            columns,
            column_index,
            group_columns,
            rows,
            by_id,
        })
    }

    /// All rows in load order.
    #[must_use]
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by its key.
    #[must_use]
    pub fn get_by_id(&self, id: MoleculeId) -> Option<&FeatureRow> {
        self.by_id.get(&id).map(|&i| &self.rows[i])
    }

    /// Numeric feature column names in file order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Group-label column names; the first is the default grouping.
    #[must_use]
    pub fn group_columns(&self) -> &[String] {
        &self.group_columns
    }

    /// Position of a feature column.
    pub fn column_position(&self, name: &str) -> Result<usize, DashboardError> {
        self.column_index
            .get(name)
            .copied()
            .ok_or_else(|| DashboardError::UnknownColumn(name.to_owned()))
    }

    /// Values of one feature column for the given rows, in their order.
    pub fn column_values<'a, I>(
        &self,
        name: &str,
        rows: I,
    ) -> Result<Vec<f64>, DashboardError>
    where
        I: IntoIterator<Item = &'a FeatureRow>,
    {
        let col = self.column_position(name)?;
        Ok(rows.into_iter().map(|row| row.values[col]).collect())
    }

    /// The default grouping (first group column).
    #[must_use]
    pub fn default_grouping(&self) -> Grouping<'_> {
        Grouping::new(self, 0)
    }

    /// Select a grouping by column name; `None` picks the default.
    pub fn grouping(
        &self,
        column: Option<&str>,
    ) -> Result<Grouping<'_>, DashboardError> {
        let Some(name) = column else {
            return Ok(self.default_grouping());
        };
        self.group_columns
            .iter()
            .position(|g| g == name)
            .map(|idx| Grouping::new(self, idx))
            .ok_or_else(|| DashboardError::UnknownColumn(name.to_owned()))
    }

    /// Rows with `label` under the default grouping, in load order.
    #[must_use]
    pub fn rows_in_group(&self, label: u32) -> Vec<&FeatureRow> {
        self.default_grouping().rows_in_group(label)
    }
}
