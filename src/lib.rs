pub mod app;
pub mod cli;
pub mod domain;
pub mod errors;
pub mod store;
pub mod types;
