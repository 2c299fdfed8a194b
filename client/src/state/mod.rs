//! Shared reactive state provided via Leptos context.

pub mod auth;
pub mod feed;
pub mod ui;
