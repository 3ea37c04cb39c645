// Public API - what other modules can use
pub use handlers::{create_pit, delete_pit, export_pits, list_pits, team_pit, update_pit};

// Internal modules
pub mod errors;
pub mod export;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
