//! Reusable view components.

pub mod art_card;
pub mod drawing_canvas;
pub mod file_uploader;
pub mod nav_bar;
pub mod toast;
