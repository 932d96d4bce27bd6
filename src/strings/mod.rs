//! # Strings Module
//!
//! Centralizes user-facing strings, menu labels and help text.
//! Ensures consistency in messaging and easier localization/updates.

pub mod help;
pub mod logs;
pub mod menu;
pub mod messages;
