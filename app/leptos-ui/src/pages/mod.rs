pub mod agents;
pub mod dashboard;
pub mod models;
pub mod not_found;
pub mod settings;
pub mod tasks;
pub mod workflows;
