use super::figure::{ChartDescription, ColorValue, Marker, PerPoint, Trace, TraceKind};
use super::{hover_text, row_keys, title, ChartRequest, CONSTANT_SIZE};
use crate::error::DashboardError;
use crate::features::FeatureStore;
use crate::options::ChartOptions;

/// Resolved column choices for the 5D explorer.
pub(super) struct Selection<'a> {
    pub(super) x: &'a str,
    pub(super) y: &'a str,
    pub(super) z: &'a str,
    pub(super) color: &'a str,
    pub(super) size: Option<&'a str>,
}

impl<'a> Selection<'a> {
    pub(super) fn from_request(
        request: &'a ChartRequest,
        chart: &'a ChartOptions,
    ) -> Self {
        let size = match request.size.as_deref() {
            Some(CONSTANT_SIZE) => None,
            Some(col) => Some(col),
            None => chart.default_size.as_deref(),
        };
        Self {
            x: request.x.as_deref().unwrap_or(&chart.default_x),
            y: request.y.as_deref().unwrap_or(&chart.default_y),
            z: request.z.as_deref().unwrap_or(&chart.default_z),
            color: request.color.as_deref().unwrap_or(&chart.default_color),
            size,
        }
    }
}

/// A single 3D scatter series over every row in load order.
pub(super) fn render(
    store: &FeatureStore,
    selection: &Selection<'_>,
    chart: &ChartOptions,
) -> Result<ChartDescription, DashboardError> {
    let rows = store.rows();

    let size = match selection.size {
        Some(col) => PerPoint::Each(
            store
                .column_values(col, rows)?
                .into_iter()
                .map(|v| v + chart.explorer_size_offset)
                .collect(),
        ),
        None => PerPoint::Constant(chart.constant_size),
    };
    let color = store
        .column_values(selection.color, rows)?
        .into_iter()
        .map(ColorValue::Scalar)
        .collect();

    let trace = Trace {
        kind: TraceKind::Scatter3d,
        mode: "markers",
        name: None,
        x: store.column_values(selection.x, rows)?,
        y: store.column_values(selection.y, rows)?,
        z: Some(store.column_values(selection.z, rows)?),
        text: hover_text(rows),
        customdata: row_keys(rows),
        marker: Marker {
            symbol: None,
            opacity: None,
            color: PerPoint::Each(color),
            size,
            line: None,
            colorscale: Some(chart.colorscale.clone()),
            reversescale: Some(chart.reverse_scale),
            showscale: Some(true),
            colorbar: Some(serde_json::json!({
                "thicknessmode": "pixels",
                "thickness": 25,
                "title": { "text": selection.color, "side": "right" },
            })),
        },
    };

    let layout = serde_json::json!({
        "clickmode": "event+select",
        "title": title(
            "5D explorer of hydrogen evolution activity and molecular properties",
            chart,
            20,
        ),
        "scene": {
            "xaxis": { "title": selection.x, "zeroline": true },
            "yaxis": { "title": selection.y, "zeroline": true },
            "zaxis": { "title": selection.z, "zeroline": true },
        },
        "margin": { "t": 55, "b": 10, "l": 30 },
        "font": { "family": chart.font_family },
        "width": chart.width,
        "height": chart.height,
    });

    Ok(ChartDescription {
        data: vec![trace],
        layout,
    })
}
