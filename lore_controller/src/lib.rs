//! # Lore Controller
//!
//! A flag-driven event engine for interactive fiction hosts. It evaluates
//! declarative event rules against the story flags in `story_state`, fires the
//! ones whose triggers are met, and gates lorebook entries by flag conditions.
//!
//! ## Core Components
//!
//! - **events**: Event rule definitions and rule file loading
//! - **engine**: The per-session engine (evaluation, node advancement)
//! - **lore**: Flag-gated lorebook entries
//! - **inline**: `{{set_flag: name}}` markers in story text
//! - **config**: TOML engine configuration
//!
//! The library logs through `tracing` and never installs a subscriber; that is
//! left to the host.

pub mod config;
pub mod engine;
pub mod events;
pub mod inline;
pub mod lore;

pub use config::*;
pub use engine::*;
pub use events::*;
pub use inline::*;
pub use lore::*;
