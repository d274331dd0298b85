//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Action, App, run_tui};
