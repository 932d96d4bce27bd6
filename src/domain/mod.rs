//! # Domain Layer
//!
//! Core definitions, types, and traits that define the leave-tracking domain.
//! Independent of the chat platform and of the storage engine.

pub mod config;
pub mod errors;
pub mod paths;
pub mod traits;
pub mod types;
