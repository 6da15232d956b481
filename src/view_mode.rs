//! The dashboard's three chart views and their wire names.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which chart the dashboard is showing. Decides how chart point indices are
/// mapped back to rows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum ViewMode {
    /// 2D embedding, one series per group label.
    #[default]
    #[serde(rename = "cluster")]
    Cluster,
    /// Single 3D scatter series; axes, colour and size bound to columns.
    #[serde(rename = "5d")]
    Explorer,
    /// 2D embedding split into library and blind-test series.
    #[serde(rename = "validation")]
    Validation,
}

impl ViewMode {
    /// All modes in selector order.
    pub const ALL: [Self; 3] = [Self::Explorer, Self::Cluster, Self::Validation];

    /// Wire name used by the page controls.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::Explorer => "5d",
            Self::Validation => "validation",
        }
    }

    /// Human label for the mode selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cluster => "2D chemical space",
            Self::Explorer => "5D explorer",
            Self::Validation => "Library vs. blind test",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
