//! Queen Step (workspace facade crate).
//!
//! Re-exports the workspace crates under `queen_step::{core,input,term,types}`
//! and hosts the pieces that tie them together: configuration, logging and the
//! [`App`] controller driven by the binary's event loop.

pub mod app;
pub mod config;
pub mod logging;

pub use queen_step_core as core;
pub use queen_step_input as input;
pub use queen_step_term as term;
pub use queen_step_types as types;

pub use app::{App, Flow};
pub use config::AppConfig;
pub use logging::init_logging;
