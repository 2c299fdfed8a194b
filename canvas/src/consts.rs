//! Shared defaults for the drawing surface.

// ── Surface ─────────────────────────────────────────────────────

/// Surface width in CSS pixels.
pub const SURFACE_WIDTH: f64 = 800.0;

/// Surface height in CSS pixels.
pub const SURFACE_HEIGHT: f64 = 600.0;

/// Background color of a fresh or cleared surface. The eraser paints with
/// this color.
pub const BACKGROUND_COLOR: &str = "#ffffff";

// ── Brush ───────────────────────────────────────────────────────

/// Default brush stroke color.
pub const BRUSH_COLOR: &str = "#000000";

/// Default brush width in pixels.
pub const BRUSH_WIDTH: f64 = 5.0;

/// Smallest selectable brush width.
pub const BRUSH_WIDTH_MIN: f64 = 1.0;

/// Largest selectable brush width.
pub const BRUSH_WIDTH_MAX: f64 = 50.0;

// ── Shape placement ─────────────────────────────────────────────

/// Fixed origin where shape tools drop a new instance.
pub const SHAPE_ORIGIN_X: f64 = 100.0;

/// Fixed origin where shape tools drop a new instance.
pub const SHAPE_ORIGIN_Y: f64 = 100.0;

/// Default rectangle edge length.
pub const RECT_SIZE: f64 = 100.0;

/// Default circle radius.
pub const CIRCLE_RADIUS: f64 = 50.0;

/// Default line length.
pub const LINE_LENGTH: f64 = 100.0;

/// Default font size for text objects.
pub const TEXT_FONT_SIZE: f64 = 20.0;

/// Outline width applied to new rectangles and circles.
pub const SHAPE_STROKE_WIDTH: f64 = 2.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Extra slop in pixels when hit-testing thin lines and freehand paths.
pub const LINE_HIT_SLOP: f64 = 4.0;
