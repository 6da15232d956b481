use super::figure::{hidden_axis, ChartDescription, Marker, Trace, TraceKind};
use super::{hover_text, row_keys, title};
use crate::error::DashboardError;
use crate::features::{FeatureRow, FeatureStore};
use crate::options::{ChartOptions, DatasetOptions, ValidationOptions};

/// Library (series 0, `id <= boundary`) and blind test (series 1,
/// `id > boundary`) in load order.
pub(super) fn render(
    store: &FeatureStore,
    chart: &ChartOptions,
    dataset: &DatasetOptions,
    validation: &ValidationOptions,
) -> Result<ChartDescription, DashboardError> {
    let (library, blind): (Vec<&FeatureRow>, Vec<&FeatureRow>) = store
        .rows()
        .iter()
        .partition(|row| validation.series_of(row.id) == 0);

    let data = vec![
        series(
            store,
            &library,
            &validation.library_name,
            &validation.library_color,
            validation.library_opacity,
            dataset,
            validation,
        )?,
        series(
            store,
            &blind,
            &validation.blind_test_name,
            &validation.blind_test_color,
            validation.blind_test_opacity,
            dataset,
            validation,
        )?,
    ];

    let layout = serde_json::json!({
        "clickmode": "event+select",
        "hovermode": "closest",
        "hoverdistance": -1,
        "title": title(
            &format!(
                "2D UMAP embeddings of the chemical space of the {} and {} set",
                validation.library_name,
                validation.blind_test_name.to_lowercase(),
            ),
            chart,
            18,
        ),
        "xaxis": hidden_axis(),
        "yaxis": hidden_axis(),
        "showlegend": true,
        "legend": {
            "font": { "family": chart.font_family, "size": 16 },
            "itemsizing": "constant",
            "bgcolor": "rgba(0,0,0,0)",
            "x": 0.005,
            "y": 0.99,
        },
        "margin": { "t": 55, "b": 10, "l": 30 },
        "width": chart.width,
        "height": chart.height,
    });

    Ok(ChartDescription { data, layout })
}

fn series(
    store: &FeatureStore,
    rows: &[&FeatureRow],
    name: &str,
    color: &str,
    opacity: f64,
    dataset: &DatasetOptions,
    validation: &ValidationOptions,
) -> Result<Trace, DashboardError> {
    let [x_col, y_col] = &dataset.validation_axes;
    let size = store
        .column_values(&validation.outcome_column, rows.iter().copied())?
        .into_iter()
        .map(|v| v.mul_add(validation.outcome_scale, validation.size_offset))
        .collect();
    Ok(Trace {
        kind: TraceKind::Scatter,
        mode: "markers",
        name: Some(name.to_owned()),
        x: store.column_values(x_col, rows.iter().copied())?,
        y: store.column_values(y_col, rows.iter().copied())?,
        z: None,
        text: hover_text(rows.iter().copied()),
        customdata: row_keys(rows.iter().copied()),
        marker: Marker::circle(color, opacity, size),
    })
}
