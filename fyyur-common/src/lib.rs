//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking site including:
//! - Database initialization, row models and store operations
//! - View-model derivation (location grouping, past/upcoming partitions, search)
//! - Configuration loading
//! - Timestamp rules shared by every view

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
