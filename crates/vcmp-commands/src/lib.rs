//! # VCMP Commands
//!
//! Discord command implementations using the Poise framework.
//!
//! The poise command list is the dispatch table: each entry is keyed by its
//! command name and delegates to a pure function that turns parameters and
//! the status client into a reply. Embeds are built as platform-neutral
//! [`ReplyEmbed`] values and converted to serenity builders at the edge.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod botinfo;
pub mod embed;
pub mod framework;
pub mod registration;
pub mod serverinfo;

pub use embed::*;
pub use framework::*;
pub use registration::*;
