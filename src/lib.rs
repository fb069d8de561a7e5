//! Reads a board description, counts every piece's pseudo-legal moves and
//! captures with `mobility_engine`, and writes one result line per piece.

pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod runner;

pub use config::Config;
pub use error::InputError;
pub use runner::{analyze_text, run, Outcome};
