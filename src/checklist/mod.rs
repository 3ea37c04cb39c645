// Public API - what other modules can use
pub use handlers::{get_checklist, update_checklist};

// Internal modules
pub mod errors;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
