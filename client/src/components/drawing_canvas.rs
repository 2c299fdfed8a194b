//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns document, tool, and history logic; this component
//! maps pointer events and toolbar clicks into engine operations and rerenders
//! after each one. Every engine call that fails is logged and surfaced as an
//! error toast; the view itself never crashes.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use canvas::consts::{BRUSH_COLOR, BRUSH_WIDTH, BRUSH_WIDTH_MAX, BRUSH_WIDTH_MIN};
use canvas::engine::Engine;
use canvas::tool::Tool;

use crate::components::toast::{toast_error, toast_success};
use crate::state::ui::UiState;

type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Toolbar order and labels.
const TOOLS: [(Tool, &str); 7] = [
    (Tool::Brush, "Brush"),
    (Tool::Rect, "Rectangle"),
    (Tool::Circle, "Circle"),
    (Tool::Line, "Line"),
    (Tool::Text, "Text"),
    (Tool::Eraser, "Eraser"),
    (Tool::Select, "Select"),
];

fn draw(engine: &Engine, ui: RwSignal<UiState>) {
    if let Err(err) = engine.render() {
        log::error!("canvas render failed: {err:?}");
        toast_error(ui, "Could not redraw the canvas.");
    }
}

#[component]
pub fn DrawingCanvas(
    /// Receives the surface as a PNG data URL when the user hits save.
    #[prop(optional)]
    on_save: Option<Callback<String>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    let active_tool = RwSignal::new(Tool::Brush);
    let brush_color = RwSignal::new(BRUSH_COLOR.to_owned());
    let brush_width = RwSignal::new(BRUSH_WIDTH);
    let can_undo = RwSignal::new(false);
    let can_redo = RwSignal::new(false);
    let pointer_active = RwSignal::new(false);

    // Mount the engine once the canvas element exists.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            if engine.borrow().is_some() {
                return;
            }
            let Some(element) = canvas_ref.get() else {
                return;
            };
            match Engine::new(element) {
                Ok(mounted) => {
                    draw(&mounted, ui);
                    *engine.borrow_mut() = Some(mounted);
                }
                Err(err) => {
                    log::error!("canvas engine init failed: {err}");
                    toast_error(ui, "Could not initialize the drawing canvas.");
                }
            }
        });
    }

    let select_tool = {
        let engine = Rc::clone(&engine);
        move |tool: Tool| {
            active_tool.set(tool);
            let mut guard = engine.borrow_mut();
            let Some(eng) = guard.as_mut() else {
                return;
            };
            match eng.core.set_tool(tool) {
                Ok(_inserted) => {
                    draw(eng, ui);
                    can_undo.set(eng.core.can_undo());
                    can_redo.set(eng.core.can_redo());
                }
                Err(err) => {
                    log::error!("tool switch failed: {err}");
                    toast_error(ui, "Could not switch tools.");
                }
            }
        }
    };

    let on_color_input = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            brush_color.set(value.clone());
            if let Some(eng) = engine.borrow_mut().as_mut() {
                eng.core.set_brush_color(value);
            }
        }
    };

    let on_width_input = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::Event| {
            let Ok(value) = event_target_value(&ev).parse::<f64>() else {
                return;
            };
            brush_width.set(value);
            if let Some(eng) = engine.borrow_mut().as_mut() {
                eng.core.set_brush_width(value);
            }
        }
    };

    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
            let mut guard = engine.borrow_mut();
            let Some(eng) = guard.as_mut() else {
                return;
            };
            if eng.core.tool() == Tool::Select {
                eng.core.begin_drag(x, y);
            } else {
                eng.core.begin_stroke(x, y);
            }
            pointer_active.set(true);
            draw(eng, ui);
        }
    };

    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if !pointer_active.get() {
                return;
            }
            let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
            let mut guard = engine.borrow_mut();
            let Some(eng) = guard.as_mut() else {
                return;
            };
            if eng.core.tool() == Tool::Select {
                eng.core.drag_to(x, y);
            } else {
                eng.core.extend_stroke(x, y);
            }
            draw(eng, ui);
        }
    };

    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::PointerEvent| {
            if !pointer_active.get() {
                return;
            }
            pointer_active.set(false);
            let mut guard = engine.borrow_mut();
            let Some(eng) = guard.as_mut() else {
                return;
            };
            let finished = if eng.core.tool() == Tool::Select {
                eng.core.end_drag().map(|_| ())
            } else {
                eng.core.end_stroke().map(|_| ())
            };
            if let Err(err) = finished {
                log::error!("gesture commit failed: {err}");
                toast_error(ui, "Could not finish the stroke.");
            }
            draw(eng, ui);
            can_undo.set(eng.core.can_undo());
            can_redo.set(eng.core.can_redo());
        }
    };

    let on_undo = {
        let engine = Rc::clone(&engine);
        move |_| {
            let mut guard = engine.borrow_mut();
            let Some(eng) = guard.as_mut() else {
                return;
            };
            match eng.core.undo() {
                Ok(true) => draw(eng, ui),
                Ok(false) => {}
                Err(err) => {
                    log::error!("undo failed: {err}");
                    toast_error(ui, "Could not undo.");
                }
            }
            can_undo.set(eng.core.can_undo());
            can_redo.set(eng.core.can_redo());
        }
    };

    let on_redo = {
        let engine = Rc::clone(&engine);
        move |_| {
            let mut guard = engine.borrow_mut();
            let Some(eng) = guard.as_mut() else {
                return;
            };
            match eng.core.redo() {
                Ok(true) => draw(eng, ui),
                Ok(false) => {}
                Err(err) => {
                    log::error!("redo failed: {err}");
                    toast_error(ui, "Could not redo.");
                }
            }
            can_undo.set(eng.core.can_undo());
            can_redo.set(eng.core.can_redo());
        }
    };

    let on_clear = {
        let engine = Rc::clone(&engine);
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message("Are you sure you want to clear the canvas?").ok())
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
                let mut guard = engine.borrow_mut();
                let Some(eng) = guard.as_mut() else {
                    return;
                };
                match eng.core.clear() {
                    Ok(()) => {
                        draw(eng, ui);
                        can_undo.set(eng.core.can_undo());
                        can_redo.set(eng.core.can_redo());
                        toast_success(ui, "Canvas cleared");
                    }
                    Err(err) => {
                        log::error!("clear failed: {err}");
                        toast_error(ui, "Could not clear the canvas.");
                    }
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &engine;
            }
        }
    };

    let on_download = {
        let engine = Rc::clone(&engine);
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                use wasm_bindgen::JsCast;

                let guard = engine.borrow();
                let Some(eng) = guard.as_ref() else {
                    return;
                };
                let data_url = match eng.export_png() {
                    Ok(url) => url,
                    Err(err) => {
                        log::error!("png export failed: {err:?}");
                        toast_error(ui, "Could not export the image.");
                        return;
                    }
                };
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let stamp = js_sys::Date::now() as u64;
                let clicked = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.create_element("a").ok())
                    .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
                    .map(|anchor| {
                        anchor.set_href(&data_url);
                        anchor.set_download(&format!("sketchsocial-{stamp}.png"));
                        anchor.click();
                    });
                if clicked.is_some() {
                    toast_success(ui, "Image downloaded");
                } else {
                    log::error!("download failed: could not create anchor element");
                    toast_error(ui, "Could not download the image.");
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &engine;
            }
        }
    };

    let has_save = on_save.is_some();
    let on_save_click = {
        let engine = Rc::clone(&engine);
        move |_| {
            let Some(save) = on_save else {
                return;
            };
            let guard = engine.borrow();
            let Some(eng) = guard.as_ref() else {
                return;
            };
            match eng.export_png() {
                Ok(data_url) => {
                    save.run(data_url);
                    toast_success(ui, "Drawing saved");
                }
                Err(err) => {
                    log::error!("png export failed: {err:?}");
                    toast_error(ui, "Could not save the drawing.");
                }
            }
        }
    };

    view! {
        <div class="drawing-canvas">
            <div class="drawing-canvas__tools">
                {TOOLS
                    .iter()
                    .map(|(tool, label)| {
                        let tool = *tool;
                        let select = select_tool.clone();
                        view! {
                            <button
                                class="tool-button"
                                class=("tool-button--active", move || active_tool.get() == tool)
                                title=*label
                                on:click=move |_| select(tool)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="drawing-canvas__settings">
                <label class="drawing-canvas__setting">
                    "Color"
                    <input type="color" prop:value=move || brush_color.get() on:input=on_color_input/>
                </label>
                <label class="drawing-canvas__setting">
                    "Size"
                    <input
                        type="range"
                        min=BRUSH_WIDTH_MIN
                        max=BRUSH_WIDTH_MAX
                        step="1"
                        prop:value=move || brush_width.get()
                        on:input=on_width_input
                    />
                    <span class="drawing-canvas__width">{move || format!("{:.0}", brush_width.get())}</span>
                </label>
            </div>

            <div class="drawing-canvas__actions">
                <button class="btn" disabled=move || !can_undo.get() on:click=on_undo>
                    "Undo"
                </button>
                <button class="btn" disabled=move || !can_redo.get() on:click=on_redo>
                    "Redo"
                </button>
                <button class="btn" on:click=on_clear>
                    "Clear"
                </button>
                <button class="btn" on:click=on_download>
                    "Download"
                </button>
                {has_save.then(move || view! {
                    <button class="btn btn--primary" on:click=on_save_click>
                        "Save"
                    </button>
                })}
            </div>

            <canvas
                class="drawing-canvas__surface"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up.clone()
                on:pointerleave=on_pointer_up
            ></canvas>
        </div>
    }
}
