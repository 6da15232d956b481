use super::figure::{hidden_axis, ChartDescription, Marker, Trace, TraceKind};
use super::{hover_text, row_keys, title};
use crate::error::DashboardError;
use crate::features::{FeatureStore, Grouping};
use crate::options::{ChartOptions, DatasetOptions};

/// One 2D scatter series per group label. Series `i` always holds label
/// `i + 1`, so labels with no rows still get an (empty) series.
pub(super) fn render(
    store: &FeatureStore,
    grouping: Grouping<'_>,
    chart: &ChartOptions,
    dataset: &DatasetOptions,
) -> Result<ChartDescription, DashboardError> {
    let [x_col, y_col] = &dataset.cluster_axes;
    if store.rows().iter().any(|r| grouping.label_of(r) == 0) {
        log::warn!(
            "group column {} contains label 0; those rows are not plotted",
            grouping.column_name()
        );
    }

    let buckets = grouping.buckets();
    let mut data = Vec::with_capacity(buckets.len());
    for (label, rows) in (1u32..).zip(buckets) {
        let size = store
            .column_values(&chart.cluster_size_column, rows.iter().copied())?
            .into_iter()
            .map(|v| v + chart.cluster_size_offset)
            .collect();
        data.push(Trace {
            kind: TraceKind::Scatter,
            mode: "markers",
            name: Some(label.to_string()),
            x: store.column_values(x_col, rows.iter().copied())?,
            y: store.column_values(y_col, rows.iter().copied())?,
            z: None,
            text: hover_text(rows.iter().copied()),
            customdata: row_keys(rows.iter().copied()),
            marker: Marker::circle(
                chart.group_color(label),
                chart.cluster_opacity,
                size,
            ),
        });
    }

    let layout = serde_json::json!({
        "clickmode": "event+select",
        "hovermode": "closest",
        "hoverdistance": -1,
        "title": title(
            "2D UMAP embeddings of SOAP+REMatch chemical space",
            chart,
            20,
        ),
        "xaxis": hidden_axis(),
        "yaxis": hidden_axis(),
        "showlegend": true,
        "legend": {
            "font": { "family": chart.font_family, "size": 16 },
            "itemsizing": "constant",
        },
        "margin": { "t": 55, "b": 10, "l": 30 },
        "width": chart.width,
        "height": chart.height,
    });

    Ok(ChartDescription { data, layout })
}
