pub mod runtime;
pub mod service;
pub mod service_types;

pub use service::TareaService;
pub use service_types::*;
