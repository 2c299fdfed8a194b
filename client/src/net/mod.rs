//! Network boundary: data types, the backend trait, and demo fixtures.

pub mod api;
pub mod demo;
pub mod types;
