// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive chemical-space explorer for small-molecule photocatalysts.
//!
//! The dashboard plots a precomputed feature table three ways (2D cluster
//! embedding, 5D explorer, library vs. blind test) and, when the user picks
//! points, shows the 3D structures of the picked molecules.
//!
//! # Key entry points
//!
//! - [`features::FeatureStore`] - the immutable feature table
//! - [`structures::StructureStore`] - per-molecule 3D structure payloads
//! - [`chart::ChartRenderer`] - view mode + column choices → Plotly figure
//! - [`selection::SelectionResolver`] - chart interaction → molecules
//! - [`viewer::ViewerComposer`] - molecules → structure panel fragments
//! - [`dashboard::Dashboard`] - all of the above, built once at startup
//!
//! # Data flow
//!
//! A control change re-renders the figure from the feature table. Chart
//! events are classified into an [`selection::EventShape`], resolved by
//! inverting the series layout of the active [`view_mode::ViewMode`], and
//! the resulting molecules are paired with their structures. Anything
//! unresolvable shows the configured default molecule.

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod features;
pub mod molecule;
pub mod options;
pub mod selection;
#[cfg(feature = "server")]
pub mod server;
pub mod structures;
pub mod view_mode;
pub mod viewer;

pub use dashboard::Dashboard;
pub use error::DashboardError;
pub use molecule::{MoleculeId, ResolvedMolecule};
pub use view_mode::ViewMode;
