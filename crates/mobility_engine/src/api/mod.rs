//! Public API for the mobility engine
//!
//! ## Module Organization
//!
//! - `board` - The `Board` query facade (owns the occupancy snapshot)
//! - `query` - Free functions over an occupancy index (`build_occupancy`, `query_piece`)

mod board;
mod query;


pub use board::Board;
pub use query::{analyze, build_occupancy, query_piece};
