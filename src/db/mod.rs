//! Database layer - connection pool and record store
//!
//! # Design Principles
//!
//! - Connection pool owned by the store instance - no process globals
//! - Every operation is a single auto-committed statement
//! - Rely on DB defaults for id and created_at - no client-side clocks

pub mod pool;
pub mod store;

pub use pool::create_pool;
pub use store::{RecordStore, RecordView};
