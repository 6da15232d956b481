use super::{FeatureRow, FeatureStore};

/// One partition of the rows into groups, read from a single group-label
/// column. Cheap to copy; borrows the store.
#[derive(Debug, Clone, Copy)]
pub struct Grouping<'a> {
    store: &'a FeatureStore,
    column: usize,
}

impl<'a> Grouping<'a> {
    pub(super) fn new(store: &'a FeatureStore, column: usize) -> Self {
        Self { store, column }
    }

    /// The store this grouping partitions.
    #[must_use]
    pub fn store(&self) -> &'a FeatureStore {
        self.store
    }

    /// Name of the group-label column.
    #[must_use]
    pub fn column_name(&self) -> &'a str {
        &self.store.group_columns[self.column]
    }

    /// Label of `row` under this grouping.
    #[must_use]
    pub fn label_of(&self, row: &FeatureRow) -> u32 {
        row.groups[self.column]
    }

    /// Rows of every label `1..=max`, indexed by `label - 1`, each in load
    /// order. Labels with no rows get an empty entry; label 0 rows are
    /// left out.
    #[must_use]
    pub fn buckets(&self) -> Vec<Vec<&'a FeatureRow>> {
        let max = self
            .store
            .rows
            .iter()
            .map(|r| self.label_of(r))
            .max()
            .unwrap_or(0);
        let mut buckets = vec![Vec::new(); max as usize];
        for row in &self.store.rows {
            if let Some(slot) = self.label_of(row).checked_sub(1) {
                buckets[slot as usize].push(row);
            }
        }
        buckets
    }

    /// Rows carrying `label`, in load order.
    #[must_use]
    pub fn rows_in_group(&self, label: u32) -> Vec<&'a FeatureRow> {
        self.iter_group(label).collect()
    }

    /// The `position`-th row (load order) carrying `label`.
    #[must_use]
    pub fn row_in_group(
        &self,
        label: u32,
        position: usize,
    ) -> Option<&'a FeatureRow> {
        self.iter_group(label).nth(position)
    }

    fn iter_group(
        &self,
        label: u32,
    ) -> impl Iterator<Item = &'a FeatureRow> + 'a {
        let column = self.column;
        self.store
            .rows
            .iter()
            .filter(move |r| r.groups[column] == label)
    }
}
