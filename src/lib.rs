//! Privacy Guardian — tracker detection and per-tab privacy scoring core
//! for a browser extension.
//!
//! This library crate exposes all modules for use by the demo binary and
//! integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod services;
pub mod types;
