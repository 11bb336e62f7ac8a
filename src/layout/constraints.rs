use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::Size;

/// Size bounds handed down to every child during a measurement pass.
///
/// A maximum of [`Constraints::INFINITY`] means the axis is unbounded.
/// Every value satisfies `min <= max` on both axes, including deserialized
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConstraints", into = "RawConstraints")]
pub struct Constraints {
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

/// Wire shape of [`Constraints`], checked on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawConstraints {
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

impl TryFrom<RawConstraints> for Constraints {
    type Error = LayoutError;

    fn try_from(raw: RawConstraints) -> Result<Self> {
        Constraints::new(raw.min_width, raw.max_width, raw.min_height, raw.max_height)
    }
}

impl From<Constraints> for RawConstraints {
    fn from(c: Constraints) -> Self {
        Self {
            min_width: c.min_width,
            max_width: c.max_width,
            min_height: c.min_height,
            max_height: c.max_height,
        }
    }
}

impl Constraints {
    pub const INFINITY: u32 = u32::MAX;

    /// Build constraints, rejecting any axis whose minimum exceeds its maximum.
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Result<Self> {
        if min_width > max_width {
            return Err(LayoutError::invalid(format!(
                "min_width {min_width} exceeds max_width {max_width}"
            )));
        }
        if min_height > max_height {
            return Err(LayoutError::invalid(format!(
                "min_height {min_height} exceeds max_height {max_height}"
            )));
        }
        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    /// No lower bound, no upper bound.
    pub const fn unbounded() -> Self {
        Self {
            min_width: 0,
            max_width: Self::INFINITY,
            min_height: 0,
            max_height: Self::INFINITY,
        }
    }

    /// Exactly `width` by `height`.
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Anything from zero up to `max_width` by `max_height`.
    pub const fn loose(max_width: u32, max_height: u32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    pub fn constrain_width(&self, width: u32) -> u32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: u32) -> u32 {
        height.clamp(self.min_height, self.max_height)
    }

    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            self.constrain_width(size.width),
            self.constrain_height(size.height),
        )
    }

    pub fn is_satisfied_by(&self, size: Size) -> bool {
        self.constrain(size) == size
    }

    /// Shrink both bounds of each axis, e.g. to leave room for padding.
    ///
    /// Bounds floor at zero and unbounded maxima stay unbounded.
    pub fn deflate(&self, horizontal: u32, vertical: u32) -> Self {
        Self {
            min_width: self.min_width.saturating_sub(horizontal),
            max_width: shrink_max(self.max_width, horizontal),
            min_height: self.min_height.saturating_sub(vertical),
            max_height: shrink_max(self.max_height, vertical),
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

fn shrink_max(max: u32, by: u32) -> u32 {
    if max == Constraints::INFINITY {
        max
    } else {
        max.saturating_sub(by)
    }
}
