//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget toolkits and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Share one layout between drawing and mouse hit testing
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per row)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use queen_step_core as core;
pub use queen_step_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, PromptView, ToolbarButton, ViewHit, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
