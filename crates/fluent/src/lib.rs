//! Fluent style chains.
//!
//! A chain is written as a sequence of names, in any order:
//! `flex.flexCol.gap(4).hover.bg("blue-50")`. Each name is looked up in a
//! dispatch table ([`dispatch`]) and either adds a rule, becomes a pending
//! modifier for the next rule, or is kept as a raw class name. Resolving a
//! chain composes its rules through `acss`.
//!
//! Chains can be built three ways:
//!
//! - with method calls: `tw().get("flex").get("gap").call([4])`
//! - with the [`tw!`] macro: `tw!(flex.gap(4))`
//! - from text at runtime: `parse_chain("tw.flex.gap(4)")`

pub mod arg;
pub mod chain;
pub mod dispatch;
pub mod error;
mod log_init;
mod macros;
pub mod parse;

pub use arg::Arg;
pub use chain::{Access, Chain, tw};
pub use error::{ChainError, Result};
pub use log_init::init_logger;
pub use parse::parse_chain;
