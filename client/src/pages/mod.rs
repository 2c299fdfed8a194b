//! Route components.

pub mod artwork;
pub mod create;
pub mod explore;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
