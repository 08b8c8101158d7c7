//! notekeeper - Local notebooks and notes
//!
//! Notes are organized into notebooks and persisted as a single JSON value in
//! a named slot. Every repository operation reloads the store, applies its
//! change and writes the whole store back.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::Repository;
pub use error::NotekeeperError;
