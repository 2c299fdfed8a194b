//! Rendering: draws the full surface scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of
//! engine state and produces pixels; it does not mutate anything.
//!
//! All fallible Canvas2D calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::doc::{ObjectKind, Props, SurfaceObject};
use crate::engine::EngineCore;

/// Selection dash segment length in pixels.
const SELECTION_DASH_PX: f64 = 4.0;

/// Padding around a selected object's dashed outline.
const SELECTION_PAD_PX: f64 = 3.0;

/// Draw the full scene: background, objects in insertion order, the
/// in-flight freehand stroke, and the selection outline.
///
/// # Errors
///
/// Returns `Err` if any Canvas2D call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let doc = core.doc();

    // Layer 1: background.
    ctx.set_fill_style_str(&doc.background);
    ctx.fill_rect(0.0, 0.0, doc.width, doc.height);

    // Layer 2: committed objects, oldest first.
    for obj in doc.objects() {
        draw_object(ctx, obj)?;
    }

    // Layer 3: the stroke being drawn right now.
    let stroke = core.current_stroke();
    if stroke.len() >= 2 {
        draw_polyline(ctx, stroke, core.stroke_color(), core.brush().width);
    }

    // Layer 4: selection outline.
    if let Some(id) = core.selected()
        && let Some(obj) = doc.get(&id)
    {
        draw_selection(ctx, obj)?;
    }

    Ok(())
}

fn draw_object(ctx: &CanvasRenderingContext2d, obj: &SurfaceObject) -> Result<(), JsValue> {
    let props = Props::new(&obj.props);
    match obj.kind {
        ObjectKind::Rect => {
            ctx.set_fill_style_str(props.fill());
            ctx.fill_rect(obj.x, obj.y, obj.width, obj.height);
            apply_stroke_style(ctx, &props);
            ctx.stroke_rect(obj.x, obj.y, obj.width, obj.height);
            Ok(())
        }
        ObjectKind::Circle => draw_circle(ctx, obj, &props),
        ObjectKind::Text => draw_text(ctx, obj, &props),
        ObjectKind::Line | ObjectKind::Path => {
            draw_polyline(ctx, &props.points(), props.stroke(), props.stroke_width());
            Ok(())
        }
    }
}

fn draw_circle(ctx: &CanvasRenderingContext2d, obj: &SurfaceObject, props: &Props<'_>) -> Result<(), JsValue> {
    let r = obj.width / 2.0;
    if r <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc(obj.x + r, obj.y + r, r, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(props.fill());
    ctx.fill();
    apply_stroke_style(ctx, props);
    ctx.stroke();
    Ok(())
}

fn draw_text(ctx: &CanvasRenderingContext2d, obj: &SurfaceObject, props: &Props<'_>) -> Result<(), JsValue> {
    let size = props.font_size();
    ctx.set_fill_style_str(props.fill());
    ctx.set_font(&format!("{size:.0}px Arial"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.fill_text(props.text(), obj.x, obj.y)?;
    Ok(())
}

fn draw_polyline(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], color: &str, width: f64) {
    if points.len() < 2 {
        return;
    }
    ctx.save();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(points[0].0, points[0].1);
    for (x, y) in &points[1..] {
        ctx.line_to(*x, *y);
    }
    ctx.stroke();
    ctx.restore();
}

fn draw_selection(ctx: &CanvasRenderingContext2d, obj: &SurfaceObject) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str("#1E90FF");
    ctx.set_line_width(1.0);

    let dash_array = js_sys::Array::new();
    dash_array.push(&SELECTION_DASH_PX.into());
    dash_array.push(&SELECTION_DASH_PX.into());
    ctx.set_line_dash(&dash_array)?;

    ctx.stroke_rect(
        obj.x - SELECTION_PAD_PX,
        obj.y - SELECTION_PAD_PX,
        obj.width + SELECTION_PAD_PX * 2.0,
        obj.height + SELECTION_PAD_PX * 2.0,
    );
    ctx.set_line_dash(&js_sys::Array::new())?;

    ctx.restore();
    Ok(())
}

fn apply_stroke_style(ctx: &CanvasRenderingContext2d, props: &Props<'_>) {
    ctx.set_stroke_style_str(props.stroke());
    ctx.set_line_width(props.stroke_width());
}
