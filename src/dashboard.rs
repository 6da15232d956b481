//! Application state: options, the loaded feature table, the structure
//! store and the resolver, built once at startup and shared read-only.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chart::{ChartDescription, ChartRenderer, ChartRequest, CONSTANT_SIZE};
use crate::error::DashboardError;
use crate::features::FeatureStore;
use crate::options::Options;
use crate::selection::{EventShape, SelectionResolver};
use crate::structures::{DirectoryStore, StructureStore};
use crate::view_mode::ViewMode;
use crate::viewer::{ViewFragment, ViewerComposer};

/// Everything a request handler needs.
pub struct Dashboard {
    options: Options,
    features: Arc<FeatureStore>,
    structures: Arc<dyn StructureStore>,
    resolver: SelectionResolver,
}

/// Structure panel request: the active view plus the chart's latest
/// interaction payloads, passed through as Plotly produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureRequest {
    /// Active view.
    pub mode: ViewMode,
    /// Group-label column of the cluster view.
    pub grouping: Option<String>,
    /// Latest `plotly_click` payload.
    pub click_data: Option<serde_json::Value>,
    /// Latest `plotly_selected` payload.
    pub selected_data: Option<serde_json::Value>,
    /// Latest `plotly_hover` payload.
    pub hover_data: Option<serde_json::Value>,
}

impl StructureRequest {
    /// The explorer reacts to clicks, the 2D views to (box/lasso or click)
    /// selections. Hover is used only when the primary event is missing or
    /// has no points.
    #[must_use]
    pub fn event(&self) -> EventShape {
        let primary = EventShape::from_json(match self.mode {
            ViewMode::Explorer => self.click_data.as_ref(),
            ViewMode::Cluster | ViewMode::Validation => {
                self.selected_data.as_ref()
            }
        });
        if primary.is_empty() && self.hover_data.is_some() {
            EventShape::from_json(self.hover_data.as_ref())
        } else {
            primary
        }
    }
}

/// A dropdown/radio option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlOption {
    /// Text shown to the user.
    pub label: String,
    /// Value sent back in requests.
    pub value: String,
}

impl ControlOption {
    fn same(name: &str) -> Self {
        Self {
            label: name.to_owned(),
            value: name.to_owned(),
        }
    }
}

/// Description of the page's control surface.
#[derive(Debug, Clone, Serialize)]
pub struct Controls {
    /// View-mode selector entries.
    pub modes: Vec<ControlOption>,
    /// Axis and colour dropdown entries.
    pub columns: Vec<ControlOption>,
    /// Size dropdown entries (columns plus the constant size).
    pub sizes: Vec<ControlOption>,
    /// Available clusterings.
    pub groupings: Vec<ControlOption>,
    /// Initial selections.
    pub defaults: ChartRequest,
}

impl Dashboard {
    /// Assemble from already-built stores.
    #[must_use]
    pub fn new(
        options: Options,
        features: Arc<FeatureStore>,
        structures: Arc<dyn StructureStore>,
    ) -> Self {
        let resolver =
            SelectionResolver::new(&options.structures, &options.validation);
        Self {
            options,
            features,
            structures,
            resolver,
        }
    }

    /// Load the feature table and open the structure directory named by
    /// `options`. Fails if the dataset cannot be loaded.
    pub fn from_options(options: Options) -> Result<Self, DashboardError> {
        let features = Arc::new(FeatureStore::load(&options.dataset)?);
        let structures = DirectoryStore::from_options(&options.structures);
        if !structures.contains(options.structures.default_id) {
            log::warn!(
                "default structure {} not found under {}",
                options.structures.default_id,
                structures.directory().display()
            );
        }
        Ok(Self::new(options, features, Arc::new(structures)))
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The feature table.
    #[must_use]
    pub fn features(&self) -> &FeatureStore {
        &self.features
    }

    /// Render the figure for a control-surface state.
    pub fn figure(
        &self,
        request: &ChartRequest,
    ) -> Result<ChartDescription, DashboardError> {
        ChartRenderer::new(
            &self.options.chart,
            &self.options.dataset,
            &self.options.validation,
        )
        .render(&self.features, request)
    }

    /// Structure panel contents for the latest interaction. Always at least
    /// one fragment.
    #[must_use]
    pub fn structures_for(&self, request: &StructureRequest) -> Vec<ViewFragment> {
        let event = request.event();
        let molecules = match self.features.grouping(request.grouping.as_deref()) {
            Ok(grouping) => self.resolver.resolve_in(grouping, &event, request.mode),
            Err(e) => {
                log::debug!("structure request falls back to default: {e}");
                vec![self.resolver.default_molecule().clone()]
            }
        };
        ViewerComposer::new(
            self.structures.as_ref(),
            self.options.structures.default_id,
        )
        .compose(&molecules)
    }

    /// Control-surface description for the page.
    #[must_use]
    pub fn controls(&self) -> Controls {
        let columns: Vec<ControlOption> = self
            .features
            .columns()
            .iter()
            .map(|c| ControlOption::same(c))
            .collect();
        let mut sizes = columns.clone();
        sizes.push(ControlOption::same(CONSTANT_SIZE));

        let chart = &self.options.chart;
        Controls {
            modes: ViewMode::ALL
                .iter()
                .map(|m| ControlOption {
                    label: m.label().to_owned(),
                    value: m.as_str().to_owned(),
                })
                .collect(),
            columns,
            sizes,
            groupings: self
                .features
                .group_columns()
                .iter()
                .map(|c| ControlOption::same(c))
                .collect(),
            defaults: ChartRequest {
                mode: ViewMode::Cluster,
                x: Some(chart.default_x.clone()),
                y: Some(chart.default_y.clone()),
                z: Some(chart.default_z.clone()),
                color: Some(chart.default_color.clone()),
                size: Some(
                    chart
                        .default_size
                        .clone()
                        .unwrap_or_else(|| CONSTANT_SIZE.to_owned()),
                ),
                grouping: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::chart::tests::clustered_store;
    use crate::molecule::MoleculeId;
    use crate::structures::MemoryStore;

    fn dashboard() -> Dashboard {
        let store = clustered_store();
        let structures = MemoryStore::with_placeholders(
            store.rows().iter().map(|r| r.id).chain([MoleculeId(340)]),
        );
        Dashboard::new(Options::default(), Arc::new(store), Arc::new(structures))
    }

    #[test]
    fn explorer_uses_click_data() {
        let request = StructureRequest {
            mode: ViewMode::Explorer,
            click_data: Some(json!({ "points": [{ "curveNumber": 0, "pointNumber": 4 }] })),
            selected_data: Some(json!({ "points": [{ "curveNumber": 0, "pointIndex": 9 }] })),
            ..StructureRequest::default()
        };
        let fragments = dashboard().structures_for(&request);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].structure_id, MoleculeId(5));
    }

    #[test]
    fn cluster_uses_selected_data() {
        let request = StructureRequest {
            mode: ViewMode::Cluster,
            click_data: Some(json!({ "points": [{ "curveNumber": 0, "pointIndex": 0 }] })),
            selected_data: Some(json!({ "points": [{ "curveNumber": 1, "pointIndex": 0 }] })),
            ..StructureRequest::default()
        };
        let fragments = dashboard().structures_for(&request);
        assert_eq!(fragments[0].structure_id, MoleculeId(2));
    }

    #[test]
    fn hover_fills_in_when_primary_missing() {
        let request = StructureRequest {
            mode: ViewMode::Cluster,
            hover_data: Some(json!({ "points": [{ "curveNumber": 2, "pointIndex": 0 }] })),
            ..StructureRequest::default()
        };
        assert_eq!(request.event(), EventShape::Points(vec![crate::selection::PickedPoint::new(2, 0)]));
    }

    #[test]
    fn hover_fills_in_for_empty_selection() {
        let request = StructureRequest {
            mode: ViewMode::Cluster,
            selected_data: Some(json!({ "points": [] })),
            hover_data: Some(json!({ "points": [{ "curveNumber": 0, "pointIndex": 1 }] })),
            ..StructureRequest::default()
        };
        let fragments = dashboard().structures_for(&request);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].structure_id, MoleculeId(6));
    }

    #[test]
    fn selection_wins_over_hover() {
        let request = StructureRequest {
            mode: ViewMode::Cluster,
            selected_data: Some(json!({ "points": [{ "curveNumber": 1, "pointIndex": 0 }] })),
            hover_data: Some(json!({ "points": [{ "curveNumber": 0, "pointIndex": 1 }] })),
            ..StructureRequest::default()
        };
        assert_eq!(dashboard().structures_for(&request)[0].structure_id, MoleculeId(2));
    }

    #[test]
    fn unknown_grouping_shows_default() {
        let request = StructureRequest {
            grouping: Some("group_k99".to_owned()),
            selected_data: Some(json!({ "points": [{ "curveNumber": 1, "pointIndex": 0 }] })),
            ..StructureRequest::default()
        };
        let fragments = dashboard().structures_for(&request);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].label, "Structure ID: default 153");
    }

    #[test]
    fn controls_list_columns_and_constant_size() {
        let controls = dashboard().controls();
        assert_eq!(controls.modes.len(), 3);
        assert_eq!(controls.modes[0].value, "5d");
        assert!(controls.columns.iter().any(|c| c.value == "S1T1 / eV"));
        assert_eq!(controls.sizes.last().unwrap().value, CONSTANT_SIZE);
        assert_eq!(controls.groupings.len(), 2);
        assert_eq!(controls.defaults.size.as_deref(), Some(CONSTANT_SIZE));
    }
}
