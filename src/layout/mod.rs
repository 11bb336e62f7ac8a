//! Layout module orchestrator.
//!
//! Every policy follows the same two steps: measure each child against the
//! incoming [`Constraints`], then hand back a [`MeasureResult`] holding the
//! container size and one [`Placement`] per child in input order.

mod chip;
pub mod column;
mod constraints;
pub mod grid;
mod measure;
pub mod padding;

pub use chip::{CHIP_MARKER, TextChip};
pub use column::Column;
pub use constraints::Constraints;
pub use grid::{StaggeredGrid, layout};
pub use measure::{MeasureResult, Measurable, Placement};
pub use padding::{EdgeInsets, Padded};
