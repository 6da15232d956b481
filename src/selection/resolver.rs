use super::{EventShape, PickedPoint, SelectionError};
use crate::features::{FeatureRow, FeatureStore, Grouping};
use crate::molecule::{MoleculeId, ResolvedMolecule};
use crate::options::{StructureOptions, ValidationOptions};
use crate::view_mode::ViewMode;

/// Maps picked chart points back to molecules.
#[derive(Debug, Clone)]
pub struct SelectionResolver {
    default: ResolvedMolecule,
    boundary: MoleculeId,
    offset: u32,
}

impl SelectionResolver {
    /// Resolver using the configured default molecule and validation split.
    #[must_use]
    pub fn new(
        structures: &StructureOptions,
        validation: &ValidationOptions,
    ) -> Self {
        Self {
            default: structures.default_molecule(),
            boundary: validation.boundary,
            offset: validation.offset,
        }
    }

    /// The fallback result.
    #[must_use]
    pub fn default_molecule(&self) -> &ResolvedMolecule {
        &self.default
    }

    /// Resolve under the default grouping. Never fails: anything
    /// unresolvable yields exactly the default molecule.
    #[must_use]
    pub fn resolve(
        &self,
        store: &FeatureStore,
        event: &EventShape,
        mode: ViewMode,
    ) -> Vec<ResolvedMolecule> {
        self.resolve_in(store.default_grouping(), event, mode)
    }

    /// Resolve under a specific grouping (cluster view with an alternative
    /// clustering). Never fails.
    #[must_use]
    pub fn resolve_in(
        &self,
        grouping: Grouping<'_>,
        event: &EventShape,
        mode: ViewMode,
    ) -> Vec<ResolvedMolecule> {
        self.try_resolve(grouping, event, mode).unwrap_or_else(|e| {
            log::debug!("selection in {mode} view falls back to default: {e}");
            vec![self.default.clone()]
        })
    }

    /// Resolve, reporting why a point could not be mapped.
    ///
    /// Absent and zero-point events still succeed with the default
    /// molecule; only malformed events and out-of-range points fail.
    pub fn try_resolve(
        &self,
        grouping: Grouping<'_>,
        event: &EventShape,
        mode: ViewMode,
    ) -> Result<Vec<ResolvedMolecule>, SelectionError> {
        match event {
            EventShape::Malformed(msg) => {
                Err(SelectionError::MalformedEvent(msg.clone()))
            }
            EventShape::Absent => Ok(vec![self.default.clone()]),
            EventShape::Points(points) if points.is_empty() => {
                Ok(vec![self.default.clone()])
            }
            EventShape::Points(points) => points
                .iter()
                .map(|&point| self.resolve_point(grouping, point, mode))
                .collect(),
        }
    }

    fn resolve_point(
        &self,
        grouping: Grouping<'_>,
        point: PickedPoint,
        mode: ViewMode,
    ) -> Result<ResolvedMolecule, SelectionError> {
        let out_of_range = SelectionError::IndexOutOfRange {
            curve: point.curve,
            index: point.index,
        };
        let store = grouping.store();

        match mode {
            ViewMode::Cluster => {
                // Series i holds group label i + 1.
                let label = point
                    .curve
                    .checked_add(1)
                    .and_then(|l| u32::try_from(l).ok())
                    .ok_or_else(|| out_of_range.clone())?;
                let row = grouping
                    .row_in_group(label, point.index)
                    .ok_or(out_of_range)?;
                Ok(Self::from_row(row))
            }
            ViewMode::Explorer => {
                if point.curve != 0 {
                    return Err(out_of_range);
                }
                let row = store.rows().get(point.index).ok_or(out_of_range)?;
                Ok(Self::from_row(row))
            }
            ViewMode::Validation => {
                let row = self
                    .validation_row(store, point)
                    .ok_or(out_of_range)?;
                if point.curve == 0 {
                    return Ok(Self::from_row(row));
                }
                // Blind-test IDs are shifted by the configured offset, even
                // across gaps in the ID list. The display ID follows the
                // shifted row when there is one.
                let shifted = row
                    .id
                    .checked_offset(self.offset)
                    .ok_or(SelectionError::OffsetUnderflow(row.id))?;
                let paper_id = store
                    .get_by_id(shifted)
                    .map_or(row.paper_id, |target| target.paper_id);
                Ok(ResolvedMolecule::from_paper_id(shifted, paper_id))
            }
        }
    }

    /// The `index`-th row of validation series `curve`, in load order.
    fn validation_row<'s>(
        &self,
        store: &'s FeatureStore,
        point: PickedPoint,
    ) -> Option<&'s FeatureRow> {
        let boundary = self.boundary;
        let rows = store.rows().iter();
        match point.curve {
            0 => rows.filter(|r| r.id <= boundary).nth(point.index),
            1 => rows.filter(|r| r.id > boundary).nth(point.index),
            _ => None,
        }
    }

    fn from_row(row: &FeatureRow) -> ResolvedMolecule {
        ResolvedMolecule::from_paper_id(row.id, row.paper_id)
    }
}
