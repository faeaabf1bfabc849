//! Winview library - Windows window and WebView2 options
//!
//! The option types build on every target so they can be tested without
//! Windows. Applying them to a window lives in `platform`.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod options;
pub mod platform;

pub use config::{load_options, OptionsFile};
pub use error::{OptionsError, Result};
pub use options::{
    default_messages, rgb, BackdropType, DllSearchFlags, Messages, Options, PowerCallback,
    PowerEvent, Theme, ThemeSettings, DEFAULT_WINDOW_CLASS_NAME,
};
