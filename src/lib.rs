//! RPG Forum - a terminal client for the role-play portal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_model;
