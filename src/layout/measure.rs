use serde::Serialize;

use crate::error::LayoutError;
use crate::geometry::{Point, Size};

use super::Constraints;

/// Anything a layout policy can ask for a size.
///
/// The policy only ever looks at the returned size. Errors are the
/// child's own and are handed back to the caller untouched.
pub trait Measurable {
    type Error;

    fn measure(&self, constraints: &Constraints) -> Result<Size, Self::Error>;
}

impl<M: Measurable + ?Sized> Measurable for &M {
    type Error = M::Error;

    fn measure(&self, constraints: &Constraints) -> Result<Size, Self::Error> {
        (**self).measure(constraints)
    }
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    type Error = M::Error;

    fn measure(&self, constraints: &Constraints) -> Result<Size, Self::Error> {
        (**self).measure(constraints)
    }
}

/// A child with a preferred size, coerced into whatever bounds it is offered.
impl Measurable for Size {
    type Error = LayoutError;

    fn measure(&self, constraints: &Constraints) -> Result<Size, Self::Error> {
        Ok(constraints.constrain(*self))
    }
}

/// Final position of one child, keyed by its index in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub index: usize,
    pub x: u32,
    pub y: u32,
}

impl Placement {
    pub const fn new(index: usize, x: u32, y: u32) -> Self {
        Self { index, x, y }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Outcome of one layout pass: the container size plus child placements in
/// input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<Placement>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<Placement>) -> Self {
        Self { size, placements }
    }

    pub fn empty(size: Size) -> Self {
        Self::new(size, Vec::new())
    }

    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.index == index)
    }

    /// Content hash of the size and placements.
    ///
    /// Hosts compare fingerprints to skip re-applying an unchanged pass.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.size.width.to_le_bytes());
        hasher.update(&self.size.height.to_le_bytes());
        for placement in &self.placements {
            hasher.update(&(placement.index as u64).to_le_bytes());
            hasher.update(&placement.x.to_le_bytes());
            hasher.update(&placement.y.to_le_bytes());
        }
        hasher.finalize()
    }
}
