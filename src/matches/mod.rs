// Public API - what other modules can use
pub use handlers::{
    create_match, delete_match, export_matches, get_config, list_matches, rankings,
    team_averages, team_matches, update_match,
};

// Internal modules
pub mod errors;
pub mod export;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
