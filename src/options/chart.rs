use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Figure styling and the initial column selections of the 5D explorer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Chart", inline)]
#[serde(default)]
pub struct ChartOptions {
    /// Marker colours of the cluster view, indexed by `label - 1` and cycled
    /// when there are more groups than colours.
    pub group_palette: Vec<String>,
    /// Feature column driving marker size in the cluster view.
    pub cluster_size_column: String,
    /// Added to the cluster size column.
    #[schemars(range(min = 0.0, max = 40.0))]
    pub cluster_size_offset: f64,
    /// Marker opacity in the cluster view.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub cluster_opacity: f64,
    /// Added to the size column in the 5D explorer.
    pub explorer_size_offset: f64,
    /// Marker size used when the explorer size selector is "Constant".
    pub constant_size: f64,
    /// Plotly colour scale name for the explorer colour axis.
    pub colorscale: String,
    /// Reverse the colour scale.
    pub reverse_scale: bool,
    /// Initial explorer X axis column.
    pub default_x: String,
    /// Initial explorer Y axis column.
    pub default_y: String,
    /// Initial explorer Z axis column.
    pub default_z: String,
    /// Initial explorer colour column.
    pub default_color: String,
    /// Initial explorer size column; `None` selects the constant size.
    pub default_size: Option<String>,
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Font family used for titles and legends.
    pub font_family: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            group_palette: ["red", "purple", "green", "blue", "orange"]
                .iter()
                .map(|&c| c.to_owned())
                .collect(),
            cluster_size_column: "Hydrogen evolution rate / µmol/h".to_owned(),
            cluster_size_offset: 8.0,
            cluster_opacity: 0.5,
            explorer_size_offset: 8.0,
            constant_size: 5.0,
            colorscale: "RdBu".to_owned(),
            reverse_scale: true,
            default_x: "IP / V vs. SHE".to_owned(),
            default_y: "EA / V vs. SHE".to_owned(),
            default_z: "S1T1 / eV".to_owned(),
            default_color: "Hydrogen evolution rate / µmol/h".to_owned(),
            default_size: None,
            width: 800,
            height: 600,
            font_family: "Arial".to_owned(),
        }
    }
}

impl ChartOptions {
    /// Palette colour for a 1-based group label.
    #[must_use]
    pub fn group_color(&self, label: u32) -> &str {
        if self.group_palette.is_empty() {
            return "gray";
        }
        let idx = (label.saturating_sub(1) as usize) % self.group_palette.len();
        &self.group_palette[idx]
    }
}
