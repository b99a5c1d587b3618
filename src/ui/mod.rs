//! User Interface module
//!
//! Terminal viewer for the finder, built on ratatui.

pub mod app;

pub use app::App;
