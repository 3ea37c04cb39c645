//! CSV exchange shared by matches and pit entries: the table writer, row
//! parsing and the import that detects which of the two a file holds.

// Public API - what other modules can use
pub use handlers::import_csv;
pub use table::{parse_rows, write_table, Columns, ParsedImport};

// Internal modules
pub mod errors;
mod handlers;
pub mod service;
mod table;
pub mod types;
