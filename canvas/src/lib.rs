//! Drawing surface engine for the art-sharing application.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drawing surface used by the create-artwork page: the document of strokes
//! and shapes, the active tool and brush configuration, the linear undo/redo
//! history of whole-surface snapshots, hit-testing for the select tool, and
//! scene rendering. The host Leptos layer is responsible only for wiring DOM
//! events to the engine and presenting the resulting state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | In-memory surface document and object types |
//! | [`history`] | Linear snapshot history with an undo/redo pointer |
//! | [`tool`] | Tool palette and brush settings |
//! | [`hit`] | Hit-testing against surface objects |
//! | [`render`] | Scene rendering onto a 2D canvas context |
//! | [`error`] | Engine error type |
//! | [`consts`] | Shared defaults (surface size, brush limits, placement) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod hit;
pub mod history;
pub mod render;
pub mod tool;
