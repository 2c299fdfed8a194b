use serde_json::json;

use super::*;
use crate::doc::points_value;

fn object(kind: ObjectKind, x: f64, y: f64, w: f64, h: f64, props: serde_json::Value) -> SurfaceObject {
    SurfaceObject { id: ObjectId::new_v4(), kind, x, y, width: w, height: h, props }
}

// =============================================================
// Per-kind hits
// =============================================================

#[test]
fn rect_hits_inside_its_bbox_only() {
    let rect = object(ObjectKind::Rect, 10.0, 10.0, 100.0, 50.0, json!({}));
    assert!(hits(&rect, 10.0, 10.0));
    assert!(hits(&rect, 60.0, 35.0));
    assert!(hits(&rect, 110.0, 60.0));
    assert!(!hits(&rect, 111.0, 35.0));
    assert!(!hits(&rect, 60.0, 61.0));
}

#[test]
fn circle_hits_by_radius_not_bbox_corner() {
    let circle = object(ObjectKind::Circle, 0.0, 0.0, 100.0, 100.0, json!({}));
    assert!(hits(&circle, 50.0, 50.0));
    assert!(hits(&circle, 50.0, 1.0));
    // The bbox corner lies outside the disc.
    assert!(!hits(&circle, 2.0, 2.0));
}

#[test]
fn line_hits_within_stroke_slop() {
    let line = object(
        ObjectKind::Line,
        0.0,
        100.0,
        100.0,
        0.0,
        json!({ "stroke_width": 4.0, "points": points_value(&[(0.0, 100.0), (100.0, 100.0)]) }),
    );
    assert!(hits(&line, 50.0, 100.0));
    assert!(hits(&line, 50.0, 105.0));
    assert!(!hits(&line, 50.0, 120.0));
    assert!(!hits(&line, 150.0, 100.0));
}

#[test]
fn path_hits_near_any_segment() {
    let path = object(
        ObjectKind::Path,
        0.0,
        0.0,
        100.0,
        100.0,
        json!({
            "stroke_width": 2.0,
            "points": points_value(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]),
        }),
    );
    assert!(hits(&path, 50.0, 2.0));
    assert!(hits(&path, 100.0, 50.0));
    assert!(!hits(&path, 50.0, 50.0));
}

// =============================================================
// Stacking
// =============================================================

#[test]
fn topmost_wins_where_objects_overlap() {
    let mut doc = SurfaceDoc::new();
    let bottom = object(ObjectKind::Rect, 0.0, 0.0, 100.0, 100.0, json!({}));
    let top = object(ObjectKind::Rect, 50.0, 50.0, 100.0, 100.0, json!({}));
    let (bottom_id, top_id) = (bottom.id, top.id);
    doc.insert(bottom);
    doc.insert(top);

    assert_eq!(topmost_at(&doc, 75.0, 75.0), Some(top_id));
    assert_eq!(topmost_at(&doc, 10.0, 10.0), Some(bottom_id));
    assert_eq!(topmost_at(&doc, 300.0, 300.0), None);
}
