//! View mode + column selections → Plotly figure.
//!
//! Rendering is a pure function of the request, the options and the feature
//! store. Series order and within-series point order are part of the
//! contract: the selection resolver inverts exactly this layout.

mod cluster;
mod explorer;
mod figure;
mod validation;

pub use figure::{
    ChartDescription, ColorValue, Marker, MarkerLine, PerPoint, Trace,
    TraceKind,
};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::features::{FeatureRow, FeatureStore};
use crate::options::{ChartOptions, DatasetOptions, ValidationOptions};
use crate::view_mode::ViewMode;

/// Control-surface state driving a redraw. Unset selections fall back to
/// the configured explorer defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartRequest {
    /// Active view.
    pub mode: ViewMode,
    /// Explorer X axis column.
    pub x: Option<String>,
    /// Explorer Y axis column.
    pub y: Option<String>,
    /// Explorer Z axis column.
    pub z: Option<String>,
    /// Explorer colour column.
    pub color: Option<String>,
    /// Explorer size column; `None` (or `"Constant"`) uses the constant size.
    pub size: Option<String>,
    /// Group-label column for the cluster view; `None` is the default.
    pub grouping: Option<String>,
}

/// Sentinel the size selector sends for a constant marker size.
pub const CONSTANT_SIZE: &str = "Constant";

/// Builds figures from the feature store.
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer<'a> {
    chart: &'a ChartOptions,
    dataset: &'a DatasetOptions,
    validation: &'a ValidationOptions,
}

impl<'a> ChartRenderer<'a> {
    /// Renderer over the given option sections.
    #[must_use]
    pub fn new(
        chart: &'a ChartOptions,
        dataset: &'a DatasetOptions,
        validation: &'a ValidationOptions,
    ) -> Self {
        Self {
            chart,
            dataset,
            validation,
        }
    }

    /// Render the figure for `request`.
    pub fn render(
        &self,
        store: &FeatureStore,
        request: &ChartRequest,
    ) -> Result<ChartDescription, DashboardError> {
        match request.mode {
            ViewMode::Cluster => {
                let grouping = store.grouping(request.grouping.as_deref())?;
                cluster::render(store, grouping, self.chart, self.dataset)
            }
            ViewMode::Explorer => {
                let selection = explorer::Selection::from_request(
                    request, self.chart,
                );
                explorer::render(store, &selection, self.chart)
            }
            ViewMode::Validation => validation::render(
                store,
                self.chart,
                self.dataset,
                self.validation,
            ),
        }
    }
}

/// Paper IDs as hover text.
fn hover_text<'r>(rows: impl IntoIterator<Item = &'r FeatureRow>) -> Vec<String> {
    rows.into_iter().map(|r| r.paper_id.to_string()).collect()
}

/// Row keys as custom data.
fn row_keys<'r>(rows: impl IntoIterator<Item = &'r FeatureRow>) -> Vec<u32> {
    rows.into_iter().map(|r| r.id.0).collect()
}

fn title(text: &str, chart: &ChartOptions, size: u32) -> serde_json::Value {
    serde_json::json!({
        "text": text,
        "font": { "family": chart.font_family, "size": size },
        "y": 0.95,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::features::FeatureRow;

    /// Five groups of ten rows, interleaved so group order differs from
    /// load order. IDs start at 1; paper ID = 1000 + ID.
    pub(crate) fn clustered_store() -> FeatureStore {
        let columns = [
            "pos_0",
            "pos_1",
            "b3lypsoapval_pos0",
            "b3lypsoapval_pos1",
            "Hydrogen evolution rate / µmol/h",
            "IP / V vs. SHE",
            "EA / V vs. SHE",
            "S1T1 / eV",
        ]
        .iter()
        .map(|&c| c.to_owned())
        .collect();
        let rows = (1..=50u32)
            .map(|id| {
                let group = (id - 1) % 5 + 1;
                let v = f64::from(id);
                FeatureRow::new(
                    id,
                    1000 + i64::from(id),
                    vec![group, 1 + u32::from(id > 25)],
                    vec![v, -v, v * 2.0, -v * 2.0, v / 10.0, v + 0.5, v - 0.5, 1.0],
                )
            })
            .collect();
        FeatureStore::from_rows(
            columns,
            vec!["group".to_owned(), "group_k2".to_owned()],
            rows,
        )
        .unwrap()
    }

    /// Group labels 1, 3, 0, 3 for IDs 1..=4: label 2 is skipped and ID 3
    /// sits in label 0.
    pub(crate) fn gapped_groups_store() -> FeatureStore {
        let rows = [(1, 1), (2, 3), (3, 0), (4, 3)]
            .into_iter()
            .map(|(id, group): (u32, u32)| {
                let v = f64::from(id);
                FeatureRow::new(id, 1000 + i64::from(id), vec![group], vec![v, -v, v])
            })
            .collect();
        FeatureStore::from_rows(
            vec![
                "pos_0".to_owned(),
                "pos_1".to_owned(),
                "Hydrogen evolution rate / µmol/h".to_owned(),
            ],
            vec!["group".to_owned()],
            rows,
        )
        .unwrap()
    }

    fn render(request: &ChartRequest) -> Result<ChartDescription, DashboardError> {
        let chart = ChartOptions::default();
        let dataset = DatasetOptions::default();
        let validation = ValidationOptions {
            boundary: crate::molecule::MoleculeId(40),
            ..ValidationOptions::default()
        };
        ChartRenderer::new(&chart, &dataset, &validation)
            .render(&clustered_store(), request)
    }

    #[test]
    fn cluster_series_match_rows_in_group() {
        let store = clustered_store();
        let fig = render(&ChartRequest::default()).unwrap();
        assert_eq!(fig.data.len(), 5);
        for (series, trace) in fig.data.iter().enumerate() {
            let expected: Vec<u32> = store
                .rows_in_group(series as u32 + 1)
                .iter()
                .map(|r| r.id.0)
                .collect();
            assert_eq!(trace.customdata, expected);
            assert_eq!(trace.name.as_deref(), Some(&*(series + 1).to_string()));
        }
        assert_eq!(fig.layout["clickmode"], "event+select");
    }

    #[test]
    fn cluster_marker_size_is_offset_column() {
        let fig = render(&ChartRequest::default()).unwrap();
        // Group 1 holds IDs 1, 6, 11, ...; rate = id / 10.
        let PerPoint::Each(sizes) = &fig.data[0].marker.size else {
            panic!("expected per-point sizes");
        };
        assert_eq!(sizes[0], 0.1 + 8.0);
        assert_eq!(sizes[1], 0.6 + 8.0);
        assert_eq!(
            fig.data[2].marker.color,
            PerPoint::Constant(ColorValue::Named("green".to_owned()))
        );
    }

    #[test]
    fn cluster_alternative_grouping() {
        let fig = render(&ChartRequest {
            grouping: Some("group_k2".to_owned()),
            ..ChartRequest::default()
        })
        .unwrap();
        assert_eq!(fig.data.len(), 2);
        assert_eq!(fig.data[1].customdata.first(), Some(&26));
    }

    #[test]
    fn unknown_grouping_is_rejected() {
        let err = render(&ChartRequest {
            grouping: Some("nope".to_owned()),
            ..ChartRequest::default()
        })
        .unwrap_err();
        assert!(matches!(err, DashboardError::UnknownColumn(_)));
    }

    #[test]
    fn explorer_is_single_series_in_load_order() {
        let fig = render(&ChartRequest {
            mode: ViewMode::Explorer,
            ..ChartRequest::default()
        })
        .unwrap();
        assert_eq!(fig.data.len(), 1);
        let trace = &fig.data[0];
        assert_eq!(trace.kind, TraceKind::Scatter3d);
        assert_eq!(trace.customdata, (1..=50).collect::<Vec<u32>>());
        assert_eq!(trace.x[0], 1.5);
        assert_eq!(trace.z.as_ref().unwrap()[3], 1.0);
        assert_eq!(trace.marker.size, PerPoint::Constant(5.0));
        assert_eq!(trace.marker.reversescale, Some(true));
        assert_eq!(fig.layout["scene"]["xaxis"]["title"], "IP / V vs. SHE");
    }

    #[test]
    fn explorer_size_column_adds_offset() {
        let fig = render(&ChartRequest {
            mode: ViewMode::Explorer,
            size: Some("S1T1 / eV".to_owned()),
            color: Some("EA / V vs. SHE".to_owned()),
            ..ChartRequest::default()
        })
        .unwrap();
        let trace = &fig.data[0];
        assert_eq!(trace.marker.size, PerPoint::Each(vec![9.0; 50]));
        assert_eq!(
            trace.marker.colorbar.as_ref().unwrap()["title"]["text"],
            "EA / V vs. SHE"
        );
    }

    #[test]
    fn explorer_constant_sentinel() {
        let fig = render(&ChartRequest {
            mode: ViewMode::Explorer,
            size: Some(CONSTANT_SIZE.to_owned()),
            ..ChartRequest::default()
        })
        .unwrap();
        assert_eq!(fig.data[0].marker.size, PerPoint::Constant(5.0));
    }

    #[test]
    fn explorer_unknown_axis_is_rejected() {
        let err = render(&ChartRequest {
            mode: ViewMode::Explorer,
            x: Some("missing".to_owned()),
            ..ChartRequest::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown column: missing");
    }

    #[test]
    fn validation_splits_at_boundary() {
        let fig = render(&ChartRequest {
            mode: ViewMode::Validation,
            ..ChartRequest::default()
        })
        .unwrap();
        assert_eq!(fig.data.len(), 2);
        assert_eq!(fig.data[0].customdata, (1..=40).collect::<Vec<u32>>());
        assert_eq!(fig.data[1].customdata, (41..=50).collect::<Vec<u32>>());
        assert_eq!(fig.data[1].name.as_deref(), Some("Blind test"));
        assert_eq!(fig.data[1].marker.opacity, Some(0.8));
        // size = rate * 1.5 + 10, rate(41) = 4.1
        let PerPoint::Each(sizes) = &fig.data[1].marker.size else {
            panic!("expected per-point sizes");
        };
        assert!((sizes[0] - (4.1 * 1.5 + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn figure_serializes_as_plotly_json() {
        let fig = render(&ChartRequest::default()).unwrap();
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["mode"], "markers");
        assert_eq!(json["data"][0]["marker"]["color"], "red");
        assert!(json["data"][0].get("z").is_none());
    }

    #[test]
    fn cluster_skipped_label_gets_empty_series() {
        let chart = ChartOptions::default();
        let dataset = DatasetOptions::default();
        let validation = ValidationOptions::default();
        let fig = ChartRenderer::new(&chart, &dataset, &validation)
            .render(&gapped_groups_store(), &ChartRequest::default())
            .unwrap();
        let keys: Vec<&[u32]> =
            fig.data.iter().map(|t| t.customdata.as_slice()).collect();
        // Label 0 (ID 3) is not plotted; label 2 is an empty series.
        assert_eq!(keys, vec![&[1][..], &[][..], &[2, 4][..]]);
        assert_eq!(fig.data[1].name.as_deref(), Some("2"));
        assert!(fig.data[1].x.is_empty());
        assert_eq!(
            fig.data[2].marker.color,
            PerPoint::Constant(ColorValue::Named("green".to_owned()))
        );
    }
}
