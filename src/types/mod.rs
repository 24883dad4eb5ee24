// Privacy Guardian shared type definitions
// Each submodule defines types used across the crate.

pub mod badge;
pub mod errors;
pub mod history;
pub mod session;
pub mod settings;
pub mod tracker;
