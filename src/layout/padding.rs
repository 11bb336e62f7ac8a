use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

use super::{Constraints, MeasureResult, Measurable, Placement};

/// Space reserved on each side of a child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub start: u32,
    pub top: u32,
    pub end: u32,
    pub bottom: u32,
}

impl EdgeInsets {
    pub const fn new(start: u32, top: u32, end: u32, bottom: u32) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }

    pub const fn all(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    pub fn horizontal(&self) -> u32 {
        self.start.saturating_add(self.end)
    }

    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Wraps a measurable with padding.
///
/// The child is offered the incoming constraints minus the insets, and the
/// padded size is clamped back into the incoming constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padded<M> {
    inner: M,
    insets: EdgeInsets,
}

impl<M> Padded<M> {
    pub fn new(inner: M, insets: EdgeInsets) -> Self {
        Self { inner, insets }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }

    /// Where the child sits inside the padded box.
    pub fn child_offset(&self) -> Point {
        Point::new(self.insets.start, self.insets.top)
    }
}

impl<M: Measurable> Padded<M> {
    /// Measure and return the padded size with the single child placement.
    pub fn measure_and_place(&self, constraints: &Constraints) -> Result<MeasureResult, M::Error> {
        let size = self.measure(constraints)?;
        let offset = self.child_offset();
        Ok(MeasureResult::new(
            size,
            vec![Placement::new(0, offset.x, offset.y)],
        ))
    }
}

impl<M: Measurable> Measurable for Padded<M> {
    type Error = M::Error;

    fn measure(&self, constraints: &Constraints) -> Result<Size, Self::Error> {
        let horizontal = self.insets.horizontal();
        let vertical = self.insets.vertical();

        let child = self
            .inner
            .measure(&constraints.deflate(horizontal, vertical))?;

        Ok(Size::new(
            constraints.constrain_width(child.width.saturating_add(horizontal)),
            constraints.constrain_height(child.height.saturating_add(vertical)),
        ))
    }
}
