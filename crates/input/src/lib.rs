//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`KeyCommand`]s, filters mouse events down to
//! left-button clicks, and provides the board-size prompt used in place of a
//! dialog box.

pub mod map;
pub mod mouse;
pub mod prompt;

pub use queen_step_core as core;
pub use queen_step_types as types;

pub use map::{handle_key_event, is_interrupt, should_quit, KeyCommand};
pub use mouse::left_click;
pub use prompt::{PromptOutcome, SizePrompt};
