//! Hit-testing against surface objects for the select tool.
//!
//! Rectangles and text use their bounding boxes, circles use the distance
//! to their center, and lines and freehand paths use the distance to their
//! nearest segment padded by half the stroke width plus a small slop so
//! thin strokes stay clickable.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::LINE_HIT_SLOP;
use crate::doc::{ObjectId, ObjectKind, Props, SurfaceDoc, SurfaceObject};

/// The topmost object containing the point, if any. Objects later in draw
/// order win.
#[must_use]
pub fn topmost_at(doc: &SurfaceDoc, x: f64, y: f64) -> Option<ObjectId> {
    doc.objects()
        .iter()
        .rev()
        .find(|obj| hits(obj, x, y))
        .map(|obj| obj.id)
}

/// Whether the point falls on the given object.
#[must_use]
pub fn hits(obj: &SurfaceObject, x: f64, y: f64) -> bool {
    match obj.kind {
        ObjectKind::Rect | ObjectKind::Text => bbox_contains(obj, x, y),
        ObjectKind::Circle => {
            let r = obj.width / 2.0;
            let cx = obj.x + r;
            let cy = obj.y + r;
            (x - cx).hypot(y - cy) <= r
        }
        ObjectKind::Line | ObjectKind::Path => {
            let props = Props::new(&obj.props);
            let slop = props.stroke_width() / 2.0 + LINE_HIT_SLOP;
            let points = props.points();
            points
                .windows(2)
                .any(|seg| segment_distance(seg[0], seg[1], (x, y)) <= slop)
        }
    }
}

fn bbox_contains(obj: &SurfaceObject, x: f64, y: f64) -> bool {
    x >= obj.x && x <= obj.x + obj.width && y >= obj.y && y <= obj.y + obj.height
}

/// Distance from a point to the closest spot on a segment.
fn segment_distance(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    let (ax, ay) = a;
    let (bx, by) = b;
    let (px, py) = p;
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return (px - ax).hypot(py - ay);
    }
    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    (px - cx).hypot(py - cy)
}
