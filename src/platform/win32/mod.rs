//! Win32 platform implementation

pub mod dll;
pub mod dwm;
pub mod system;

pub use dll::apply_dll_search_paths;
pub use dwm::{apply_backdrop, apply_theme, set_dark_mode};
pub use system::{os_build_number, system_uses_dark_mode};

use windows::Win32::Foundation::{HWND, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::WM_POWERBROADCAST;

use crate::error::Result;
use crate::options::{Options, PowerEvent};

/// Apply theme and backdrop to a freshly created window
pub fn apply_window_options(hwnd: HWND, options: &Options) -> Result<()> {
    apply_theme(hwnd, options, true)?;
    apply_backdrop(hwnd, options.backdrop_type)
}

/// Route a window message to the power callbacks.
/// Returns true when the message was a handled power event.
pub fn handle_power_broadcast(options: &Options, msg: u32, wparam: WPARAM) -> bool {
    if msg != WM_POWERBROADCAST {
        return false;
    }
    PowerEvent::from_broadcast(wparam.0)
        .map(|event| options.dispatch_power_event(event))
        .unwrap_or(false)
}
