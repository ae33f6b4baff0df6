//! # VCMP Bot
//!
//! Discord bot that reports the live status of VCMP (Vice City Multiplayer)
//! servers through the `/serverinfo` and `/botinfo` slash commands.
//!
//! This is the main binary crate that orchestrates the application lifecycle:
//! configuration, logging, command registration, the gateway connection and
//! an optional liveness endpoint.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod liveness;

pub use bot::*;
pub use error::*;
