//! Top-level engine: tools, gestures, mutations, and snapshot history.
//!
//! `EngineCore` holds all logic that doesn't depend on a browser canvas
//! element, so the full tool/history contract is testable natively. `Engine`
//! wraps a core together with the `HtmlCanvasElement` it renders to and adds
//! the browser-only operations (render, PNG export).
//!
//! Every structural mutation (shape inserted, stroke committed, object
//! moved or removed, surface cleared) records a whole-surface snapshot.
//! Undo and redo reload the neighbor snapshot wholesale; a failed reload
//! leaves the engine unchanged.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{
    BACKGROUND_COLOR, CIRCLE_RADIUS, LINE_LENGTH, RECT_SIZE, SHAPE_ORIGIN_X, SHAPE_ORIGIN_Y,
    SHAPE_STROKE_WIDTH, TEXT_FONT_SIZE,
};
use crate::doc::{ObjectId, ObjectKind, PartialObject, SurfaceDoc, SurfaceObject, points_value};
use crate::error::SurfaceError;
use crate::hit;
use crate::history::History;
use crate::render;
use crate::tool::{BrushSettings, Tool};

/// An in-flight move gesture under the select tool.
#[derive(Debug, Clone)]
struct Drag {
    id: ObjectId,
    last: (f64, f64),
    moved: bool,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
pub struct EngineCore {
    doc: SurfaceDoc,
    history: History,
    tool: Tool,
    brush: BrushSettings,
    selected: Option<ObjectId>,
    current_stroke: Vec<(f64, f64)>,
    drag: Option<Drag>,
}

impl EngineCore {
    /// Create an engine over an empty surface, recording the baseline
    /// snapshot as history entry 0.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if the baseline snapshot cannot be
    /// serialized.
    pub fn new() -> Result<Self, SurfaceError> {
        let doc = SurfaceDoc::new();
        let baseline = doc.to_snapshot().map_err(SurfaceError::Encode)?;
        Ok(Self {
            doc,
            history: History::new(baseline),
            tool: Tool::default(),
            brush: BrushSettings::default(),
            selected: None,
            current_stroke: Vec::new(),
            drag: None,
        })
    }

    // --- Tools ---

    /// Switch the active tool. Selecting a shape tool immediately drops a
    /// default instance of that shape at the fixed origin, selects it, and
    /// records a snapshot; the inserted object's id is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if the post-insert snapshot cannot
    /// be serialized.
    pub fn set_tool(&mut self, tool: Tool) -> Result<Option<ObjectId>, SurfaceError> {
        self.tool = tool;
        self.current_stroke.clear();
        self.drag = None;
        if !tool.is_shape() {
            if tool != Tool::Select {
                self.selected = None;
            }
            return Ok(None);
        }

        let obj = self.default_shape(tool);
        let id = obj.id;
        self.doc.insert(obj);
        self.selected = Some(id);
        self.record()?;
        Ok(Some(id))
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Current brush configuration.
    #[must_use]
    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    /// Set the brush color applied to strokes and new shapes.
    pub fn set_brush_color(&mut self, color: String) {
        self.brush.color = color;
    }

    /// Set the brush width, clamped to the selectable range.
    pub fn set_brush_width(&mut self, width: f64) {
        self.brush.width = BrushSettings::clamp_width(width);
    }

    /// Effective stroke color for freehand drawing: the brush color, or the
    /// background color when the eraser is active.
    #[must_use]
    pub fn stroke_color(&self) -> &str {
        if self.tool == Tool::Eraser {
            &self.doc.background
        } else {
            &self.brush.color
        }
    }

    // --- Freehand gestures ---

    /// Start a freehand stroke at the given point. Ignored unless a
    /// freehand tool (brush or eraser) is active.
    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        if !self.tool.is_freehand() {
            return;
        }
        self.current_stroke = vec![(x, y)];
    }

    /// Extend the in-flight stroke. Ignored when no stroke is in flight.
    pub fn extend_stroke(&mut self, x: f64, y: f64) {
        if self.current_stroke.is_empty() {
            return;
        }
        self.current_stroke.push((x, y));
    }

    /// Commit the in-flight stroke as a path object and record a snapshot.
    /// A stroke with fewer than two points is discarded without recording.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if the post-commit snapshot cannot
    /// be serialized.
    pub fn end_stroke(&mut self) -> Result<Option<ObjectId>, SurfaceError> {
        let points = std::mem::take(&mut self.current_stroke);
        if points.len() < 2 {
            return Ok(None);
        }
        let (x, y, width, height) = bounding_box(&points);
        let obj = SurfaceObject {
            id: ObjectId::new_v4(),
            kind: ObjectKind::Path,
            x,
            y,
            width,
            height,
            props: serde_json::json!({
                "stroke": self.stroke_color(),
                "stroke_width": self.brush.width,
                "points": points_value(&points),
            }),
        };
        let id = obj.id;
        self.doc.insert(obj);
        self.record()?;
        Ok(Some(id))
    }

    /// Vertices of the stroke currently being drawn, if any.
    #[must_use]
    pub fn current_stroke(&self) -> &[(f64, f64)] {
        &self.current_stroke
    }

    // --- Selection and dragging ---

    /// Hit-test the topmost object at a point and make it the selection.
    /// A miss clears the selection.
    pub fn select_at(&mut self, x: f64, y: f64) -> Option<ObjectId> {
        self.selected = hit::topmost_at(&self.doc, x, y);
        self.selected
    }

    /// Start a move gesture under the select tool: selects the object under
    /// the pointer and begins tracking pointer deltas.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        if self.tool != Tool::Select {
            return;
        }
        self.drag = self
            .select_at(x, y)
            .map(|id| Drag { id, last: (x, y), moved: false });
    }

    /// Continue a move gesture, translating the dragged object by the
    /// pointer delta. No snapshot is recorded until the gesture ends.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        let Some(drag) = &mut self.drag else {
            return;
        };
        let dx = x - drag.last.0;
        let dy = y - drag.last.1;
        if self.doc.translate(&drag.id, dx, dy) {
            drag.last = (x, y);
            drag.moved = true;
        }
    }

    /// Finish a move gesture, recording one snapshot if the object moved.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if the post-move snapshot cannot be
    /// serialized.
    pub fn end_drag(&mut self) -> Result<bool, SurfaceError> {
        let Some(drag) = self.drag.take() else {
            return Ok(false);
        };
        if !drag.moved {
            return Ok(false);
        }
        self.record()?;
        Ok(true)
    }

    /// The currently selected object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    // --- Mutations ---

    /// Apply a sparse update to an object and record a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownObject`] if the object doesn't exist,
    /// or [`SurfaceError::Encode`] if the snapshot cannot be serialized.
    pub fn update_object(&mut self, id: &ObjectId, fields: &PartialObject) -> Result<(), SurfaceError> {
        if !self.doc.apply_partial(id, fields) {
            return Err(SurfaceError::UnknownObject(*id));
        }
        self.record()?;
        Ok(())
    }

    /// Remove an object and record a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownObject`] if the object doesn't exist,
    /// or [`SurfaceError::Encode`] if the snapshot cannot be serialized.
    pub fn remove_object(&mut self, id: &ObjectId) -> Result<SurfaceObject, SurfaceError> {
        let Some(obj) = self.doc.remove(id) else {
            return Err(SurfaceError::UnknownObject(*id));
        };
        if self.selected == Some(*id) {
            self.selected = None;
        }
        self.record()?;
        Ok(obj)
    }

    /// Remove the selected object, if any, and record a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if the snapshot cannot be
    /// serialized.
    pub fn remove_selected(&mut self) -> Result<Option<ObjectId>, SurfaceError> {
        let Some(id) = self.selected else {
            return Ok(None);
        };
        self.remove_object(&id)?;
        Ok(Some(id))
    }

    /// Reset the surface to an empty, fixed-color background and record the
    /// result as a new history entry. Prior entries are retained, so a clear
    /// is undoable. Confirmation is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if the cleared snapshot cannot be
    /// serialized.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        self.doc.clear_to(BACKGROUND_COLOR);
        self.selected = None;
        self.current_stroke.clear();
        self.drag = None;
        self.record()?;
        Ok(())
    }

    // --- History ---

    /// Move one step back in history and reload that snapshot wholesale.
    /// Returns `false` (state unchanged) when already at the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Decode`] if the stored snapshot is
    /// malformed; the pointer and document are left as they were.
    pub fn undo(&mut self) -> Result<bool, SurfaceError> {
        let Some(snapshot) = self.history.undo().map(str::to_owned) else {
            return Ok(false);
        };
        match SurfaceDoc::from_snapshot(&snapshot) {
            Ok(doc) => {
                self.doc = doc;
                self.selected = None;
                Ok(true)
            }
            Err(e) => {
                // Walk the pointer back so a bad snapshot changes nothing.
                self.history.redo();
                Err(SurfaceError::Decode(e))
            }
        }
    }

    /// Move one step forward in history and reload that snapshot wholesale.
    /// Returns `false` (state unchanged) when already at the newest entry.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Decode`] if the stored snapshot is
    /// malformed; the pointer and document are left as they were.
    pub fn redo(&mut self) -> Result<bool, SurfaceError> {
        let Some(snapshot) = self.history.redo().map(str::to_owned) else {
            return Ok(false);
        };
        match SurfaceDoc::from_snapshot(&snapshot) {
            Ok(doc) => {
                self.doc = doc;
                self.selected = None;
                Ok(true)
            }
            Err(e) => {
                self.history.undo();
                Err(SurfaceError::Decode(e))
            }
        }
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots in the history list.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Position of the history pointer.
    #[must_use]
    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    // --- Queries ---

    /// Read access to the surface document.
    #[must_use]
    pub fn doc(&self) -> &SurfaceDoc {
        &self.doc
    }

    /// Serialize the current surface into a snapshot string.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if serialization fails.
    pub fn snapshot(&self) -> Result<String, SurfaceError> {
        self.doc.to_snapshot().map_err(SurfaceError::Encode)
    }

    // --- Internal ---

    fn record(&mut self) -> Result<bool, SurfaceError> {
        let snapshot = self.doc.to_snapshot().map_err(SurfaceError::Encode)?;
        Ok(self.history.record(snapshot))
    }

    fn default_shape(&self, tool: Tool) -> SurfaceObject {
        let color = self.brush.color.clone();
        let (kind, width, height, props) = match tool {
            Tool::Circle => (
                ObjectKind::Circle,
                CIRCLE_RADIUS * 2.0,
                CIRCLE_RADIUS * 2.0,
                serde_json::json!({
                    "fill": color,
                    "stroke": color,
                    "stroke_width": SHAPE_STROKE_WIDTH,
                }),
            ),
            Tool::Line => (
                ObjectKind::Line,
                LINE_LENGTH,
                0.0,
                serde_json::json!({
                    "stroke": color,
                    "stroke_width": self.brush.width,
                    "points": points_value(&[
                        (SHAPE_ORIGIN_X, SHAPE_ORIGIN_Y),
                        (SHAPE_ORIGIN_X + LINE_LENGTH, SHAPE_ORIGIN_Y),
                    ]),
                }),
            ),
            Tool::Text => (
                ObjectKind::Text,
                // Nominal bounding box; exact text metrics are a renderer
                // concern.
                TEXT_FONT_SIZE * 3.0,
                TEXT_FONT_SIZE,
                serde_json::json!({
                    "text": "Text",
                    "fill": color,
                    "font_size": TEXT_FONT_SIZE,
                }),
            ),
            // `Rect` plus any non-shape tool routed here by mistake.
            _ => (
                ObjectKind::Rect,
                RECT_SIZE,
                RECT_SIZE,
                serde_json::json!({
                    "fill": color,
                    "stroke": color,
                    "stroke_width": SHAPE_STROKE_WIDTH,
                }),
            ),
        };
        SurfaceObject {
            id: ObjectId::new_v4(),
            kind,
            x: SHAPE_ORIGIN_X,
            y: SHAPE_ORIGIN_Y,
            width,
            height,
            props,
        }
    }
}

/// Axis-aligned bounding box of a vertex list as `(x, y, width, height)`.
fn bounding_box(points: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (x, y) in points {
        min_x = min_x.min(*x);
        min_y = min_y.min(*y);
        max_x = max_x.max(*x);
        max_y = max_y.max(*y);
    }
    (min_x, min_y, max_x - min_x, max_y - min_y)
}

/// The full drawing engine. Wraps `EngineCore` and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, sizing the
    /// element to the surface dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if the baseline snapshot cannot be
    /// serialized.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let core = EngineCore::new()?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas.set_width(core.doc().width as u32);
            canvas.set_height(core.doc().height as u32);
        }
        Ok(Self { canvas, core })
    }

    /// Draw the current surface state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any Canvas2D call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        render::draw(&ctx, &self.core)
    }

    /// Flatten the current surface into a PNG data URI.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser refuses to encode the canvas.
    pub fn export_png(&self) -> Result<String, JsValue> {
        self.canvas.to_data_url_with_type("image/png")
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
        ctx.dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected rendering context type"))
    }
}
