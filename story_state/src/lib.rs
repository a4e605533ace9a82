//! # Story State
//!
//! The leaf crate of the lore controller: the monotonic flag store, story node
//! definitions and session identifiers. It holds data only and contains no
//! event logic.

pub mod de;
pub mod flags;
pub mod node;

pub use flags::*;
pub use node::*;
