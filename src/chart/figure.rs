//! Serializable Plotly figure description.
//!
//! Only the trace fields the dashboard sets are modelled; the layout is kept
//! as loose JSON since Plotly accepts a very wide shape there.

use serde::Serialize;

/// A figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    /// One entry per series; index = Plotly `curveNumber`.
    pub data: Vec<Trace>,
    /// Plotly layout object.
    pub layout: serde_json::Value,
}

/// Plotly trace kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    /// 2D scatter.
    Scatter,
    /// 3D scatter.
    Scatter3d,
}

/// One series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    /// Trace kind.
    #[serde(rename = "type")]
    pub kind: TraceKind,
    /// Always `"markers"`.
    pub mode: &'static str,
    /// Legend name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates.
    pub y: Vec<f64>,
    /// Z coordinates (3D only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<f64>>,
    /// Hover text (paper IDs).
    pub text: Vec<String>,
    /// Row keys of the plotted points, in point order.
    pub customdata: Vec<u32>,
    /// Marker styling.
    pub marker: Marker,
}

/// Scalar-or-array Plotly attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PerPoint<T> {
    /// Same value for every point.
    Constant(T),
    /// One value per point.
    Each(Vec<T>),
}

/// Marker outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    /// Outline colour.
    pub color: String,
    /// Outline width in pixels.
    pub width: f64,
}

/// Marker styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Marker symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    /// Marker opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Fixed colour name or values mapped through `colorscale`.
    pub color: PerPoint<ColorValue>,
    /// Marker size.
    pub size: PerPoint<f64>,
    /// Marker outline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
    /// Colour scale name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    /// Reverse the colour scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversescale: Option<bool>,
    /// Show the colour bar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    /// Colour bar settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<serde_json::Value>,
}

/// A colour given either by name or as a scalar to be colour-mapped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// CSS colour name.
    Named(String),
    /// Value mapped through the colour scale.
    Scalar(f64),
}

impl Marker {
    /// Circle marker with a white outline and a single colour.
    #[must_use]
    pub fn circle(color: &str, opacity: f64, size: Vec<f64>) -> Self {
        Self {
            symbol: Some("circle"),
            opacity: Some(opacity),
            color: PerPoint::Constant(ColorValue::Named(color.to_owned())),
            size: PerPoint::Each(size),
            line: Some(MarkerLine {
                color: "white".to_owned(),
                width: 1.0,
            }),
            colorscale: None,
            reversescale: None,
            showscale: None,
            colorbar: None,
        }
    }
}

/// Hidden 2D axis used by the embedding plots.
pub(super) fn hidden_axis() -> serde_json::Value {
    serde_json::json!({
        "showgrid": false,
        "zeroline": false,
        "showline": false,
        "showticklabels": false,
    })
}
