pub mod fixtures;
pub mod match_builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use fixtures::{legacy_rubric, reefscape_rubric};
#[allow(unused_imports)]
pub use match_builders::MatchBuilder;
#[allow(unused_imports)]
pub use setup::{TestApp, TestAppBuilder};
