//! Chart interaction events → molecules.
//!
//! The chart reports picked points as `(curveNumber, pointIndex)` pairs.
//! [`SelectionResolver`] inverts the series layout produced by
//! [`ChartRenderer`](crate::chart::ChartRenderer) for the active
//! [`ViewMode`](crate::view_mode::ViewMode) to recover row keys.
//!
//! Anything that cannot be resolved (no event yet, an event of unexpected
//! shape, a point outside its series) yields the single configured default
//! molecule rather than an empty panel or an error.

mod event;
mod resolver;

use std::fmt;

pub use event::{EventShape, PickedPoint};
pub use resolver::SelectionResolver;

use crate::molecule::MoleculeId;

/// Why a selection could not be resolved. Never crosses
/// [`SelectionResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The series does not exist or has fewer points than `index + 1`.
    IndexOutOfRange {
        /// Series index.
        curve: usize,
        /// Within-series index.
        index: usize,
    },
    /// A blind-test ID smaller than the configured offset.
    OffsetUnderflow(MoleculeId),
    /// The event payload did not have the expected shape.
    MalformedEvent(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { curve, index } => {
                write!(f, "point {index} of series {curve} is out of range")
            }
            Self::OffsetUnderflow(id) => {
                write!(f, "molecule {id} is below the blind-test offset")
            }
            Self::MalformedEvent(msg) => write!(f, "malformed event: {msg}"),
        }
    }
}

impl std::error::Error for SelectionError {}
