//! Database access layer.
//!
//! - Connection pool construction and lifecycle
//! - The story store (one parameterized statement per operation)
//! - Row to JSON conversion for opaque column passthrough

pub mod pool;
pub mod store;
pub mod types;

pub use pool::DbPool;
pub use store::StoryStore;
pub use types::RowToJson;
