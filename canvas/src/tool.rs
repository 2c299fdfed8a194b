//! Tool palette and brush settings.

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use crate::consts::{BRUSH_COLOR, BRUSH_WIDTH, BRUSH_WIDTH_MAX, BRUSH_WIDTH_MIN};

/// Available drawing tools. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing with the configured brush color and width.
    #[default]
    Brush,
    /// Drops a default rectangle at the fixed origin.
    Rect,
    /// Drops a default circle at the fixed origin.
    Circle,
    /// Drops a default line at the fixed origin.
    Line,
    /// Drops a default text label at the fixed origin.
    Text,
    /// Freehand drawing with the background color.
    Eraser,
    /// Click to select; drag to move the selected object.
    Select,
}

impl Tool {
    /// Tools that draw freehand strokes from pointer gestures.
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }

    /// Tools that insert a default-positioned shape when selected.
    #[must_use]
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Rect | Tool::Circle | Tool::Line | Tool::Text)
    }
}

/// Brush configuration applied to freehand strokes and new shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushSettings {
    /// Stroke/fill color as a CSS color string.
    pub color: String,
    /// Stroke width in pixels, kept within the configured limits.
    pub width: f64,
}

impl BrushSettings {
    /// Clamp a requested width to the selectable range.
    #[must_use]
    pub fn clamp_width(width: f64) -> f64 {
        width.clamp(BRUSH_WIDTH_MIN, BRUSH_WIDTH_MAX)
    }
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self { color: BRUSH_COLOR.to_owned(), width: BRUSH_WIDTH }
    }
}
