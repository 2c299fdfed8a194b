#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::Props;

fn engine() -> EngineCore {
    EngineCore::new().unwrap()
}

/// Draw a short two-point stroke, committing one history entry.
fn scribble(core: &mut EngineCore, x: f64, y: f64) -> ObjectId {
    core.begin_stroke(x, y);
    core.extend_stroke(x + 10.0, y + 10.0);
    core.end_stroke().unwrap().unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_engine_starts_at_the_baseline() {
    let core = engine();
    assert_eq!(core.history_len(), 1);
    assert_eq!(core.history_index(), 0);
    assert!(!core.can_undo());
    assert!(!core.can_redo());
    assert_eq!(core.tool(), Tool::Brush);
    assert!(core.doc().is_empty());
}

// =============================================================
// Tool selection and shape placement
// =============================================================

#[test]
fn selecting_a_shape_tool_drops_one_default_shape_at_the_origin() {
    let mut core = engine();
    let id = core.set_tool(Tool::Rect).unwrap().unwrap();

    assert_eq!(core.tool(), Tool::Rect);
    assert_eq!(core.doc().len(), 1);
    assert_eq!(core.history_len(), 2);
    assert_eq!(core.selected(), Some(id));

    let obj = core.doc().get(&id).unwrap();
    assert_eq!((obj.x, obj.y), (SHAPE_ORIGIN_X, SHAPE_ORIGIN_Y));
    assert_eq!((obj.width, obj.height), (RECT_SIZE, RECT_SIZE));
}

#[test]
fn each_shape_tool_places_its_own_kind() {
    let cases = [
        (Tool::Rect, ObjectKind::Rect),
        (Tool::Circle, ObjectKind::Circle),
        (Tool::Line, ObjectKind::Line),
        (Tool::Text, ObjectKind::Text),
    ];
    for (tool, kind) in cases {
        let mut core = engine();
        let id = core.set_tool(tool).unwrap().unwrap();
        assert_eq!(core.doc().get(&id).unwrap().kind, kind);
    }
}

#[test]
fn default_text_object_says_text() {
    let mut core = engine();
    let id = core.set_tool(Tool::Text).unwrap().unwrap();
    let obj = core.doc().get(&id).unwrap();
    assert_eq!(Props::new(&obj.props).text(), "Text");
}

#[test]
fn non_shape_tools_insert_nothing() {
    let mut core = engine();
    for tool in [Tool::Brush, Tool::Eraser, Tool::Select] {
        assert!(core.set_tool(tool).unwrap().is_none());
    }
    assert!(core.doc().is_empty());
    assert_eq!(core.history_len(), 1);
}

#[test]
fn new_shapes_take_the_brush_color() {
    let mut core = engine();
    core.set_brush_color("#ff8800".to_owned());
    let id = core.set_tool(Tool::Circle).unwrap().unwrap();
    let obj = core.doc().get(&id).unwrap();
    assert_eq!(Props::new(&obj.props).fill(), "#ff8800");
}

// =============================================================
// Brush configuration
// =============================================================

#[test]
fn brush_width_clamps_to_limits() {
    let mut core = engine();
    core.set_brush_width(0.0);
    assert_eq!(core.brush().width, crate::consts::BRUSH_WIDTH_MIN);
    core.set_brush_width(500.0);
    assert_eq!(core.brush().width, crate::consts::BRUSH_WIDTH_MAX);
}

#[test]
fn eraser_strokes_use_the_background_color() {
    let mut core = engine();
    core.set_brush_color("#123456".to_owned());
    core.set_tool(Tool::Eraser).unwrap();
    assert_eq!(core.stroke_color(), core.doc().background);

    let id = scribble(&mut core, 10.0, 10.0);
    let obj = core.doc().get(&id).unwrap();
    assert_eq!(Props::new(&obj.props).stroke(), core.doc().background);
}

#[test]
fn brush_strokes_use_the_brush_color() {
    let mut core = engine();
    core.set_brush_color("#123456".to_owned());
    let id = scribble(&mut core, 10.0, 10.0);
    let obj = core.doc().get(&id).unwrap();
    assert_eq!(Props::new(&obj.props).stroke(), "#123456");
}

// =============================================================
// Freehand strokes
// =============================================================

#[test]
fn committed_stroke_records_one_entry_with_its_points() {
    let mut core = engine();
    core.begin_stroke(5.0, 5.0);
    core.extend_stroke(6.0, 7.0);
    core.extend_stroke(9.0, 4.0);
    let id = core.end_stroke().unwrap().unwrap();

    assert_eq!(core.history_len(), 2);
    let obj = core.doc().get(&id).unwrap();
    assert_eq!(obj.kind, ObjectKind::Path);
    assert_eq!(
        Props::new(&obj.props).points(),
        vec![(5.0, 5.0), (6.0, 7.0), (9.0, 4.0)]
    );
    // Bounding box encloses the vertices.
    assert_eq!((obj.x, obj.y), (5.0, 4.0));
    assert_eq!((obj.width, obj.height), (4.0, 3.0));
}

#[test]
fn single_point_stroke_is_discarded() {
    let mut core = engine();
    core.begin_stroke(5.0, 5.0);
    assert!(core.end_stroke().unwrap().is_none());
    assert!(core.doc().is_empty());
    assert_eq!(core.history_len(), 1);
}

#[test]
fn strokes_are_ignored_without_a_freehand_tool() {
    let mut core = engine();
    core.set_tool(Tool::Select).unwrap();
    core.begin_stroke(5.0, 5.0);
    core.extend_stroke(6.0, 6.0);
    assert!(core.current_stroke().is_empty());
    assert!(core.end_stroke().unwrap().is_none());
}

// =============================================================
// Undo / redo
// =============================================================

#[test]
fn full_unwind_lands_on_the_empty_baseline() {
    let mut core = engine();
    let baseline = core.snapshot().unwrap();

    scribble(&mut core, 10.0, 10.0);
    core.set_tool(Tool::Rect).unwrap();
    core.set_tool(Tool::Brush).unwrap();
    scribble(&mut core, 50.0, 50.0);
    assert_eq!(core.history_len(), 4);

    let mut undone = 0;
    while core.undo().unwrap() {
        undone += 1;
    }
    assert_eq!(undone, 3);
    assert_eq!(core.history_index(), 0);
    assert!(core.doc().is_empty());
    assert_eq!(core.snapshot().unwrap(), baseline);
    // Redo entries survive the unwind.
    assert_eq!(core.history_len(), 4);
    assert!(core.can_redo());
}

#[test]
fn undo_then_redo_restores_the_exact_snapshot() {
    let mut core = engine();
    scribble(&mut core, 10.0, 10.0);
    scribble(&mut core, 30.0, 30.0);

    let before = core.snapshot().unwrap();
    assert!(core.undo().unwrap());
    assert_ne!(core.snapshot().unwrap(), before);
    assert!(core.redo().unwrap());
    assert_eq!(core.snapshot().unwrap(), before);
}

#[test]
fn mutating_after_undo_discards_redoable_entries() {
    let mut core = engine();
    scribble(&mut core, 10.0, 10.0);
    scribble(&mut core, 30.0, 30.0);
    assert_eq!(core.history_len(), 3);

    assert!(core.undo().unwrap());
    scribble(&mut core, 70.0, 70.0);

    assert_eq!(core.history_len(), 3);
    assert!(!core.can_redo());
    assert_eq!(core.history_index(), 2);
}

#[test]
fn undo_at_baseline_and_redo_at_tip_change_nothing() {
    let mut core = engine();
    assert!(!core.undo().unwrap());
    assert!(!core.redo().unwrap());

    scribble(&mut core, 10.0, 10.0);
    assert!(!core.redo().unwrap());
    assert_eq!(core.doc().len(), 1);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_records_an_empty_baseline_entry() {
    let mut core = engine();
    scribble(&mut core, 10.0, 10.0);
    core.clear().unwrap();

    assert!(core.doc().is_empty());
    assert_eq!(core.doc().background, crate::consts::BACKGROUND_COLOR);
    assert_eq!(core.history_len(), 3);
}

#[test]
fn clear_is_undoable() {
    let mut core = engine();
    scribble(&mut core, 10.0, 10.0);
    core.clear().unwrap();

    assert!(core.undo().unwrap());
    assert_eq!(core.doc().len(), 1);
}

#[test]
fn clear_on_an_empty_surface_records_nothing() {
    let mut core = engine();
    core.clear().unwrap();
    assert_eq!(core.history_len(), 1);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn update_object_records_a_snapshot() {
    let mut core = engine();
    let id = core.set_tool(Tool::Rect).unwrap().unwrap();

    let fields = PartialObject { x: Some(250.0), ..Default::default() };
    core.update_object(&id, &fields).unwrap();

    assert_eq!(core.doc().get(&id).unwrap().x, 250.0);
    assert_eq!(core.history_len(), 3);
}

#[test]
fn update_unknown_object_is_an_error() {
    let mut core = engine();
    let missing = ObjectId::new_v4();
    let err = core.update_object(&missing, &PartialObject::default());
    assert!(matches!(err, Err(SurfaceError::UnknownObject(id)) if id == missing));
    assert_eq!(core.history_len(), 1);
}

#[test]
fn remove_object_clears_matching_selection() {
    let mut core = engine();
    let id = core.set_tool(Tool::Rect).unwrap().unwrap();
    assert_eq!(core.selected(), Some(id));

    core.remove_object(&id).unwrap();
    assert!(core.selected().is_none());
    assert!(core.doc().is_empty());
    assert_eq!(core.history_len(), 3);
}

#[test]
fn remove_selected_without_selection_is_a_no_op() {
    let mut core = engine();
    assert!(core.remove_selected().unwrap().is_none());
    assert_eq!(core.history_len(), 1);
}

// =============================================================
// Selection and dragging
// =============================================================

#[test]
fn select_at_picks_the_topmost_object() {
    let mut core = engine();
    let bottom = core.set_tool(Tool::Rect).unwrap().unwrap();
    let top = core.set_tool(Tool::Rect).unwrap().unwrap();
    core.set_tool(Tool::Select).unwrap();

    assert_eq!(core.select_at(150.0, 150.0), Some(top));
    assert_ne!(bottom, top);
    assert_eq!(core.select_at(700.0, 550.0), None);
}

#[test]
fn drag_moves_the_object_and_records_once() {
    let mut core = engine();
    let id = core.set_tool(Tool::Rect).unwrap().unwrap();
    core.set_tool(Tool::Select).unwrap();
    assert_eq!(core.history_len(), 2);

    core.begin_drag(150.0, 150.0);
    core.drag_to(160.0, 170.0);
    core.drag_to(180.0, 190.0);
    assert!(core.end_drag().unwrap());

    let obj = core.doc().get(&id).unwrap();
    assert_eq!((obj.x, obj.y), (130.0, 140.0));
    assert_eq!(core.history_len(), 3);
}

#[test]
fn drag_without_movement_records_nothing() {
    let mut core = engine();
    core.set_tool(Tool::Rect).unwrap();
    core.set_tool(Tool::Select).unwrap();

    core.begin_drag(150.0, 150.0);
    assert!(!core.end_drag().unwrap());
    assert_eq!(core.history_len(), 2);
}

#[test]
fn drag_outside_select_tool_is_ignored() {
    let mut core = engine();
    core.set_tool(Tool::Rect).unwrap();

    core.begin_drag(150.0, 150.0);
    core.drag_to(300.0, 300.0);
    assert!(!core.end_drag().unwrap());
}
