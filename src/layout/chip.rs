use crate::error::{LayoutError, Result};
use crate::geometry::Size;
use crate::width::display_width;

use super::{Constraints, Measurable};

/// Leading swatch drawn before the label.
pub const CHIP_MARKER: &str = "■ ";

const BORDER: u32 = 1;

/// Bordered, single-line label with a leading marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChip {
    label: String,
}

impl TextChip {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Size before constraints are applied.
    pub fn natural_size(&self) -> Size {
        let content = display_width(CHIP_MARKER).saturating_add(display_width(&self.label));
        Size::new(content.saturating_add(BORDER * 2), 1 + BORDER * 2)
    }
}

impl Measurable for TextChip {
    type Error = LayoutError;

    fn measure(&self, constraints: &Constraints) -> Result<Size> {
        Ok(constraints.constrain(self.natural_size()))
    }
}
