//! Staggered grid - children dealt into a fixed number of rows, round-robin.
//!
//! Child `i` lands in row `i % rows`. Each row grows left to right, rows stack
//! top to bottom in row-index order. The container is as wide as the widest
//! row and as tall as the summed row heights, clamped into the incoming
//! constraints.
//!
//! Rows are never rebalanced by measured size: a long label in row 0 does not
//! push the next child into a shorter row.
//!
//! # Example
//! ```no_run
//! use stagger::{Constraints, Size, StaggeredGrid};
//!
//! let grid = StaggeredGrid::new(3)?;
//! let chips = vec![Size::new(10, 1); 7];
//! let result = grid.measure(&chips, &Constraints::unbounded())?;
//! assert_eq!(result.size, Size::new(30, 3));
//! # Ok::<(), stagger::LayoutError>(())
//! ```

use std::num::NonZeroUsize;

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::Size;
use crate::logging::json_kv;

use super::{Constraints, MeasureResult, Measurable, Placement};

/// Running totals for one row during a single pass.
#[derive(Debug, Clone, Copy, Default)]
struct RowAccumulator {
    width: u32,
    height: u32,
}

impl RowAccumulator {
    fn push(&mut self, size: Size) {
        self.width = self.width.saturating_add(size.width);
        self.height = self.height.max(size.height);
    }
}

/// Round-robin row layout with a row count validated at construction.
#[derive(Debug, Clone)]
pub struct StaggeredGrid {
    rows: NonZeroUsize,
    config: LayoutConfig,
}

impl StaggeredGrid {
    /// Fails with `InvalidArgument` when `rows` is zero.
    pub fn new(rows: usize) -> Result<Self> {
        let rows = NonZeroUsize::new(rows)
            .ok_or_else(|| LayoutError::invalid("row count must be at least 1"))?;
        Ok(Self {
            rows,
            config: LayoutConfig::default(),
        })
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.rows.get()
    }

    /// Row a child at `index` is assigned to.
    pub fn row_of(&self, index: usize) -> usize {
        index % self.rows.get()
    }

    /// Measure every child against `constraints` and place them.
    ///
    /// Child errors are returned as-is; nothing is placed in that case.
    pub fn measure<M>(
        &self,
        children: &[M],
        constraints: &Constraints,
    ) -> std::result::Result<MeasureResult, M::Error>
    where
        M: Measurable,
    {
        let rows = self.rows.get();
        let mut tracks = vec![RowAccumulator::default(); rows];
        let mut sizes = Vec::with_capacity(children.len());

        for (index, child) in children.iter().enumerate() {
            let size = child.measure(constraints)?;
            tracks[index % rows].push(size);
            sizes.push(size);
        }

        let natural_width = tracks.iter().map(|t| t.width).max().unwrap_or(0);
        let natural_height = tracks
            .iter()
            .fold(0u32, |acc, t| acc.saturating_add(t.height));

        let width = if sizes.is_empty() {
            constraints.min_width()
        } else {
            constraints.constrain_width(natural_width)
        };
        let height = constraints.constrain_height(natural_height);

        let mut row_y = vec![0u32; rows];
        for r in 1..rows {
            row_y[r] = row_y[r - 1].saturating_add(tracks[r - 1].height);
        }

        let mut row_x = vec![0u32; rows];
        let placements: Vec<Placement> = sizes
            .iter()
            .enumerate()
            .map(|(index, size)| {
                let row = index % rows;
                let placement = Placement::new(index, row_x[row], row_y[row]);
                row_x[row] = row_x[row].saturating_add(size.width);
                placement
            })
            .collect();

        let clamped = !sizes.is_empty() && (width != natural_width || height != natural_height);
        self.config.report_pass(
            "grid",
            children.len(),
            placements.len(),
            clamped,
            [
                json_kv("rows", rows),
                json_kv("width", width),
                json_kv("height", height),
            ],
        );

        Ok(MeasureResult::new(Size::new(width, height), placements))
    }
}

/// One-shot staggered grid pass.
///
/// Validates `row_count` before touching any child, so an invalid count never
/// triggers a measurement. The child error type must be able to carry the
/// `InvalidArgument` failure; measurement errors still pass through unchanged.
pub fn layout<M>(
    children: &[M],
    row_count: usize,
    constraints: &Constraints,
) -> std::result::Result<MeasureResult, M::Error>
where
    M: Measurable,
    M::Error: From<LayoutError>,
{
    let grid = StaggeredGrid::new(row_count)?;
    grid.measure(children, constraints)
}
