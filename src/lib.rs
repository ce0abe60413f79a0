pub mod config;
pub mod db;
pub mod error;

pub use config::DbConfig;
pub use db::{RecordStore, RecordView};
pub use error::{Result, StoreError};
