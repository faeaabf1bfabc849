//! Title bar theme and backdrop via the Desktop Window Manager

use std::ffi::c_void;

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::{
    DwmSetWindowAttribute, DWMWA_BORDER_COLOR, DWMWA_CAPTION_COLOR, DWMWA_TEXT_COLOR,
    DWMWA_USE_IMMERSIVE_DARK_MODE, DWMWINDOWATTRIBUTE,
};

use super::system::{os_build_number, system_uses_dark_mode};
use crate::error::{OptionsError, Result};
use crate::options::{BackdropType, Options};

/// DWMWA_SYSTEMBACKDROP_TYPE, Windows 11 22621+
const DWMWA_SYSTEMBACKDROP_TYPE: DWMWINDOWATTRIBUTE = DWMWINDOWATTRIBUTE(38);

/// Set a 4-byte DWM attribute
fn set_attribute<T: Copy>(
    hwnd: HWND,
    attribute: DWMWINDOWATTRIBUTE,
    value: T,
) -> std::result::Result<(), windows::core::Error> {
    // SAFETY: `value` lives on the stack for the duration of the call and the
    // size passed matches its type.
    unsafe {
        DwmSetWindowAttribute(
            hwnd,
            attribute,
            &value as *const T as *const c_void,
            std::mem::size_of::<T>() as u32,
        )
    }
}

/// Switch the title bar between dark and light rendering
pub fn set_dark_mode(hwnd: HWND, dark: bool) -> Result<()> {
    let value: u32 = dark.into();
    set_attribute(hwnd, DWMWA_USE_IMMERSIVE_DARK_MODE, value)
        .map_err(|e| OptionsError::win32("DwmSetWindowAttribute", e))
}

/// Apply the theme and custom title bar colours from `options`.
/// `active` selects the focused or unfocused colour set.
pub fn apply_theme(hwnd: HWND, options: &Options, active: bool) -> Result<()> {
    let system_dark = system_uses_dark_mode();
    let dark = options.theme.is_dark(system_dark);
    crate::log_fn!(
        "apply_theme",
        "theme={:?}, system_dark={}, active={}",
        options.theme,
        system_dark,
        active
    );

    set_dark_mode(hwnd, dark)?;

    if let Some(colors) = options.title_bar_colors(system_dark, active) {
        // Caption colours are a Windows 11 feature; older builds reject them
        for (attribute, value) in [
            (DWMWA_CAPTION_COLOR, colors.title_bar),
            (DWMWA_TEXT_COLOR, colors.title_text),
            (DWMWA_BORDER_COLOR, colors.border),
        ] {
            if let Err(e) = set_attribute(hwnd, attribute, value as u32) {
                crate::log!("DWM colour attribute {} rejected: {}", attribute.0, e);
            }
        }
    }

    Ok(())
}

/// Apply a translucent backdrop. Does nothing on builds before 22621.
pub fn apply_backdrop(hwnd: HWND, backdrop: BackdropType) -> Result<()> {
    let build = os_build_number().unwrap_or(0);
    if !BackdropType::supported_on_build(build) {
        crate::log!(
            "Backdrop {:?} skipped: build {} is older than required",
            backdrop,
            build
        );
        return Ok(());
    }

    crate::log_fn!("apply_backdrop", "{:?}", backdrop);
    set_attribute(hwnd, DWMWA_SYSTEMBACKDROP_TYPE, backdrop as i32)
        .map_err(|e| OptionsError::win32("DwmSetWindowAttribute", e))
}
