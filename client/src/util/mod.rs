//! Pure helpers and browser-storage glue.

pub mod dark_mode;
pub mod date;
pub mod search;
pub mod session;
pub mod upload;
