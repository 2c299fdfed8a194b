//! Document model: surface objects, their properties, and the surface itself.
//!
//! This module defines the data types that describe what is on the drawing
//! surface (`SurfaceObject`, `ObjectKind`), a sparse-update type for
//! incremental edits (`PartialObject`), a typed accessor for the open-ended
//! `props` JSON bag (`Props`), and the document that owns all live objects
//! (`SurfaceDoc`).
//!
//! Objects are kept in insertion order, which is also draw order. The whole
//! document serializes to a JSON snapshot string; snapshots are the unit of
//! undo/redo history, so encoding is deterministic (declaration-ordered
//! fields, insertion-ordered objects) and byte-equal snapshots mean "nothing
//! changed".

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{BACKGROUND_COLOR, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Unique identifier for a surface object.
pub type ObjectId = Uuid;

/// The kind of a surface object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Freehand polyline recorded from a brush or eraser gesture.
    Path,
    /// Axis-aligned rectangle.
    Rect,
    /// Circle; the bounding box is always square.
    Circle,
    /// Straight segment between two endpoints stored in `props`.
    Line,
    /// Single-line text label.
    Text,
}

/// A surface object as stored in the document and in snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceObject {
    /// Unique identifier for this object.
    pub id: ObjectId,
    /// Shape or stroke type.
    pub kind: ObjectKind,
    /// Left edge of the bounding box in surface coordinates.
    pub x: f64,
    /// Top edge of the bounding box in surface coordinates.
    pub y: f64,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
    /// Open-ended per-kind properties (fill, stroke, points, text, etc.).
    pub props: serde_json::Value,
}

/// Sparse update for a surface object. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialObject {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Props keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

/// Typed access to common props fields from a `SurfaceObject.props` value.
pub struct Props<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Props<'a> {
    /// Wrap a reference to a `props` JSON value for typed access.
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Fill color as a CSS color string. Defaults to `"#000000"` when absent.
    #[must_use]
    pub fn fill(&self) -> &str {
        self.value
            .get("fill")
            .and_then(|v| v.as_str())
            .unwrap_or("#000000")
    }

    /// Stroke color as a CSS color string. Defaults to `"#000000"` when absent.
    #[must_use]
    pub fn stroke(&self) -> &str {
        self.value
            .get("stroke")
            .and_then(|v| v.as_str())
            .unwrap_or("#000000")
    }

    /// Stroke width in pixels. Defaults to `1.0` when absent.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.value
            .get("stroke_width")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(1.0)
    }

    /// Label text. Empty string when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.value
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Font size in pixels for text objects. Defaults to `20.0` when absent.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.value
            .get("font_size")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(20.0)
    }

    /// Polyline vertices for `Path` and `Line` objects, in surface
    /// coordinates. Empty when absent or malformed.
    #[must_use]
    pub fn points(&self) -> Vec<(f64, f64)> {
        let Some(items) = self.value.get("points").and_then(|v| v.as_array()) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|pair| {
                let xs = pair.get(0).and_then(serde_json::Value::as_f64)?;
                let ys = pair.get(1).and_then(serde_json::Value::as_f64)?;
                Some((xs, ys))
            })
            .collect()
    }
}

/// Encode a vertex list into the JSON shape `Props::points` reads back.
#[must_use]
pub fn points_value(points: &[(f64, f64)]) -> serde_json::Value {
    serde_json::Value::Array(
        points
            .iter()
            .map(|(x, y)| serde_json::json!([x, y]))
            .collect(),
    )
}

/// The in-memory drawing surface: dimensions, background, and all objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDoc {
    /// Surface width in CSS pixels.
    pub width: f64,
    /// Surface height in CSS pixels.
    pub height: f64,
    /// Background color; also the eraser color.
    pub background: String,
    objects: Vec<SurfaceObject>,
}

impl SurfaceDoc {
    /// Create an empty surface with default dimensions and background.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            background: BACKGROUND_COLOR.to_owned(),
            objects: Vec::new(),
        }
    }

    /// Append an object. Insertion order is draw order.
    pub fn insert(&mut self, obj: SurfaceObject) {
        self.objects.push(obj);
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<SurfaceObject> {
        let idx = self.objects.iter().position(|o| o.id == *id)?;
        Some(self.objects.remove(idx))
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&SurfaceObject> {
        self.objects.iter().find(|o| o.id == *id)
    }

    /// All objects in draw order (oldest first).
    #[must_use]
    pub fn objects(&self) -> &[SurfaceObject] {
        &self.objects
    }

    /// Number of objects currently on the surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the surface has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Apply a partial update to an existing object. Returns `false` if the
    /// object doesn't exist or the props patch is not an object.
    pub fn apply_partial(&mut self, id: &ObjectId, partial: &PartialObject) -> bool {
        let Some(obj) = self.objects.iter_mut().find(|o| o.id == *id) else {
            return false;
        };
        if let Some(x) = partial.x {
            obj.x = x;
        }
        if let Some(y) = partial.y {
            obj.y = y;
        }
        if let Some(w) = partial.width {
            obj.width = w;
        }
        if let Some(h) = partial.height {
            obj.height = h;
        }
        if let Some(ref props) = partial.props {
            let Some(incoming) = props.as_object() else {
                return false;
            };

            if !obj.props.is_object() {
                obj.props = serde_json::json!({});
            }

            if let Some(existing) = obj.props.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        true
    }

    /// Move an object by a delta, translating stored vertices along with the
    /// bounding box so lines and paths stay consistent. Returns `false` if
    /// the object doesn't exist.
    pub fn translate(&mut self, id: &ObjectId, dx: f64, dy: f64) -> bool {
        let Some(obj) = self.objects.iter_mut().find(|o| o.id == *id) else {
            return false;
        };
        obj.x += dx;
        obj.y += dy;

        let moved: Vec<(f64, f64)> = Props::new(&obj.props)
            .points()
            .into_iter()
            .map(|(px, py)| (px + dx, py + dy))
            .collect();
        if !moved.is_empty()
            && let Some(props) = obj.props.as_object_mut()
        {
            props.insert("points".to_owned(), points_value(&moved));
        }
        true
    }

    /// Remove every object and reset the background.
    pub fn clear_to(&mut self, background: &str) {
        self.objects.clear();
        self.background = background.to_owned();
    }

    /// Serialize the whole surface into a snapshot string.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if encoding fails.
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Rebuild a surface from a snapshot string.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if the snapshot is malformed.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(snapshot)
    }
}

impl Default for SurfaceDoc {
    fn default() -> Self {
        Self::new()
    }
}
