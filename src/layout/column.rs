use crate::config::LayoutConfig;
use crate::geometry::Size;
use crate::logging::json_kv;

use super::{Constraints, MeasureResult, Measurable, Placement};

/// Stacks children top to bottom at `x = 0`.
///
/// The column claims all the space it is allowed. On an unbounded axis it
/// falls back to its content extent, clamped up to the minimum.
#[derive(Debug, Clone, Default)]
pub struct Column {
    config: LayoutConfig,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn measure<M>(
        &self,
        children: &[M],
        constraints: &Constraints,
    ) -> Result<MeasureResult, M::Error>
    where
        M: Measurable,
    {
        let mut placements = Vec::with_capacity(children.len());
        let mut cursor_y = 0u32;
        let mut widest = 0u32;

        for (index, child) in children.iter().enumerate() {
            let size = child.measure(constraints)?;
            placements.push(Placement::new(index, 0, cursor_y));
            cursor_y = cursor_y.saturating_add(size.height);
            widest = widest.max(size.width);
        }

        let width = if constraints.has_bounded_width() {
            constraints.max_width()
        } else {
            constraints.constrain_width(widest)
        };
        let height = if constraints.has_bounded_height() {
            constraints.max_height()
        } else {
            constraints.constrain_height(cursor_y)
        };

        self.config.report_pass(
            "column",
            children.len(),
            placements.len(),
            widest > width || cursor_y > height,
            [json_kv("width", width), json_kv("height", height)],
        );

        Ok(MeasureResult::new(Size::new(width, height), placements))
    }
}
