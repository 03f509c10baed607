//! Core storage engine for an in-memory tabular store.
//!
//! Provides a fixed-width field codec, an ordered multimap index, and four
//! interchangeable table layouts (row-major, column-major, aggregated
//! column-major, indexed row-major) sharing one table contract.

pub mod codec;
pub mod config;
pub mod data;
pub mod error;
pub mod index;
pub mod table;

pub use config::StoreConfig;
pub use error::DbError;
pub use table::{Layout, Table};
