pub mod deadline;
pub mod groups;
pub mod resolve;
pub mod view;
