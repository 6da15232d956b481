//! Centralized dashboard options with TOML support.
//!
//! Dataset layout, structure artifact location, chart styling, the
//! validation split and server settings are consolidated here. Options
//! serialize to/from TOML; every section defaults, so a partial file (e.g.
//! only overriding `[validation]`) works.

mod chart;
mod dataset;
mod server;
mod structures;
mod validation;

use std::path::Path;

pub use chart::ChartOptions;
pub use dataset::DatasetOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use server::ServerOptions;
pub use structures::StructureOptions;
pub use validation::ValidationOptions;

use crate::error::DashboardError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Feature table location and key columns.
    pub dataset: DatasetOptions,
    /// Structure artifacts and the default molecule.
    pub structures: StructureOptions,
    /// Figure styling and explorer defaults.
    pub chart: ChartOptions,
    /// Library / blind-test split shared by chart and resolver.
    pub validation: ValidationOptions,
    /// HTTP server settings.
    #[schemars(skip)]
    pub server: ServerOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let content =
            std::fs::read_to_string(path).map_err(DashboardError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, DashboardError> {
        toml::from_str(content)
            .map_err(|e| DashboardError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DashboardError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DashboardError::Io)?;
        }
        std::fs::write(path, content).map_err(DashboardError::Io)
    }
}
