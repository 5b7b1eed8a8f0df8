//! ts-assistant library crate
//!
//! Exposes the analysis wrapper and UI state so the binary, headless mode and
//! tests share one implementation.

pub mod analysis;
pub mod app;
pub mod config;
pub mod llm;
pub mod logging;
pub mod ui;
