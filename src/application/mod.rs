//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot.
//! This includes command routing, session state, the team registry and the yearly limit computation.

pub mod limits;
pub mod records;
pub mod registry;
pub mod router;
pub mod state;
