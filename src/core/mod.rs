//! Core module - Application infrastructure
//!
//! Everything the session needs that is not chess: user settings and their
//! persistence, the tracing subscriber, and the errors those can raise.
//!
//! - [`GameSettings`] - Promotion picker layout and log filter
//! - [`load_settings`] / [`save_settings`] - JSON persistence
//! - [`init_logging`] - `tracing_subscriber` bootstrap

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::{load_settings, load_settings_or_default, save_settings, GameSettings};
