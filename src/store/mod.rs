pub mod files;
pub mod paths;
pub mod projects;
pub mod tasks;

pub use projects::JsonProjectStore;
pub use tasks::{JsonTaskStore, TaskQuery, TaskSource};
