//! Platform layer
//!
//! Applying options only makes sense on Windows (win32). Everything else in
//! the crate builds on any target.

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(target_os = "windows")]
pub use win32::*;
