#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn rect_at(x: f64, y: f64) -> SurfaceObject {
    SurfaceObject {
        id: ObjectId::new_v4(),
        kind: ObjectKind::Rect,
        x,
        y,
        width: 100.0,
        height: 100.0,
        props: json!({ "fill": "#ff0000", "stroke": "#ff0000", "stroke_width": 2.0 }),
    }
}

fn line_between(a: (f64, f64), b: (f64, f64)) -> SurfaceObject {
    SurfaceObject {
        id: ObjectId::new_v4(),
        kind: ObjectKind::Line,
        x: a.0.min(b.0),
        y: a.1.min(b.1),
        width: (b.0 - a.0).abs(),
        height: (b.1 - a.1).abs(),
        props: json!({ "stroke": "#000000", "stroke_width": 5.0, "points": points_value(&[a, b]) }),
    }
}

// =============================================================
// Insert / remove / lookup
// =============================================================

#[test]
fn insert_preserves_draw_order() {
    let mut doc = SurfaceDoc::new();
    let first = rect_at(0.0, 0.0);
    let second = rect_at(10.0, 10.0);
    let (a, b) = (first.id, second.id);
    doc.insert(first);
    doc.insert(second);
    let order: Vec<ObjectId> = doc.objects().iter().map(|o| o.id).collect();
    assert_eq!(order, vec![a, b]);
}

#[test]
fn remove_returns_the_object_and_shrinks_the_doc() {
    let mut doc = SurfaceDoc::new();
    let obj = rect_at(0.0, 0.0);
    let id = obj.id;
    doc.insert(obj);
    assert_eq!(doc.len(), 1);

    let removed = doc.remove(&id);
    assert_eq!(removed.map(|o| o.id), Some(id));
    assert!(doc.is_empty());
    assert!(doc.remove(&id).is_none());
}

#[test]
fn get_finds_by_id() {
    let mut doc = SurfaceDoc::new();
    let obj = rect_at(5.0, 6.0);
    let id = obj.id;
    doc.insert(obj);
    assert_eq!(doc.get(&id).map(|o| o.x), Some(5.0));
    assert!(doc.get(&ObjectId::new_v4()).is_none());
}

// =============================================================
// Partial updates
// =============================================================

#[test]
fn apply_partial_updates_present_fields_only() {
    let mut doc = SurfaceDoc::new();
    let obj = rect_at(0.0, 0.0);
    let id = obj.id;
    doc.insert(obj);

    let partial = PartialObject { x: Some(40.0), width: Some(60.0), ..Default::default() };
    assert!(doc.apply_partial(&id, &partial));

    let obj = doc.get(&id).unwrap();
    assert_eq!(obj.x, 40.0);
    assert_eq!(obj.y, 0.0);
    assert_eq!(obj.width, 60.0);
    assert_eq!(obj.height, 100.0);
}

#[test]
fn apply_partial_merges_props_and_null_deletes() {
    let mut doc = SurfaceDoc::new();
    let obj = rect_at(0.0, 0.0);
    let id = obj.id;
    doc.insert(obj);

    let partial = PartialObject {
        props: Some(json!({ "fill": "#00ff00", "stroke": null })),
        ..Default::default()
    };
    assert!(doc.apply_partial(&id, &partial));

    let props = &doc.get(&id).unwrap().props;
    assert_eq!(props.get("fill").and_then(|v| v.as_str()), Some("#00ff00"));
    assert!(props.get("stroke").is_none());
    // Untouched keys survive the merge.
    assert_eq!(props.get("stroke_width").and_then(serde_json::Value::as_f64), Some(2.0));
}

#[test]
fn apply_partial_to_missing_object_is_false() {
    let mut doc = SurfaceDoc::new();
    assert!(!doc.apply_partial(&ObjectId::new_v4(), &PartialObject::default()));
}

// =============================================================
// Translate
// =============================================================

#[test]
fn translate_moves_bbox_and_points_together() {
    let mut doc = SurfaceDoc::new();
    let obj = line_between((50.0, 100.0), (150.0, 100.0));
    let id = obj.id;
    doc.insert(obj);

    assert!(doc.translate(&id, 10.0, -20.0));

    let obj = doc.get(&id).unwrap();
    assert_eq!(obj.x, 60.0);
    assert_eq!(obj.y, 80.0);
    assert_eq!(
        Props::new(&obj.props).points(),
        vec![(60.0, 80.0), (160.0, 80.0)]
    );
}

// =============================================================
// Props accessor
// =============================================================

#[test]
fn props_defaults_when_absent() {
    let empty = json!({});
    let props = Props::new(&empty);
    assert_eq!(props.fill(), "#000000");
    assert_eq!(props.stroke(), "#000000");
    assert_eq!(props.stroke_width(), 1.0);
    assert_eq!(props.text(), "");
    assert_eq!(props.font_size(), 20.0);
    assert!(props.points().is_empty());
}

#[test]
fn props_points_skips_malformed_pairs() {
    let value = json!({ "points": [[1.0, 2.0], "junk", [3.0], [4.0, 5.0]] });
    assert_eq!(Props::new(&value).points(), vec![(1.0, 2.0), (4.0, 5.0)]);
}

// =============================================================
// Snapshots
// =============================================================

#[test]
fn snapshot_round_trips_the_document() {
    let mut doc = SurfaceDoc::new();
    doc.insert(rect_at(1.0, 2.0));
    doc.insert(line_between((0.0, 0.0), (10.0, 10.0)));

    let snapshot = doc.to_snapshot().unwrap();
    let restored = SurfaceDoc::from_snapshot(&snapshot).unwrap();
    assert_eq!(restored, doc);
}

#[test]
fn snapshot_encoding_is_deterministic() {
    let mut doc = SurfaceDoc::new();
    doc.insert(rect_at(1.0, 2.0));
    assert_eq!(doc.to_snapshot().unwrap(), doc.to_snapshot().unwrap());
}

#[test]
fn clear_to_drops_objects_and_resets_background() {
    let mut doc = SurfaceDoc::new();
    doc.insert(rect_at(0.0, 0.0));
    doc.clear_to("#ffffff");
    assert!(doc.is_empty());
    assert_eq!(doc.background, "#ffffff");
}
