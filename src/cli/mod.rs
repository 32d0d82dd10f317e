pub mod action;
pub mod commands;
pub mod program;
pub mod render;
pub mod style;

pub use program::run_cli;
