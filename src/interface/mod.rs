//! # Interface Layer
//!
//! User-facing conversation handlers invoked by the command router.

pub mod commands;
