//! # VCMP Config
//!
//! Type-safe configuration management for the VCMP status bot.
//!
//! Configuration is layered: built-in defaults, an optional YAML file, then
//! environment variables (including a `.env` file). The result is validated
//! before the bot starts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use vcmp_common::{LogFormat, LoggingConfig};
