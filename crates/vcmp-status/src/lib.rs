//! # VCMP Status
//!
//! Client for the third-party HTTP service that queries VCMP game servers.
//!
//! The service is called as `GET <base>/<ip>/<port>` and answers with a
//! `{ msg, state }` envelope. This crate turns that envelope into a typed
//! [`StatusOutcome`], keeping "the service answered but the server is not
//! reachable" apart from transport and schema failures.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod models;
pub mod traits;

pub use client::*;
pub use error::*;
pub use models::*;
pub use traits::*;
