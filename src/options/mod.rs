//! Windows-specific window and WebView2 options
//!
//! Values are accepted as-is. Nothing here validates ranges; the native
//! layer that consumes an [`Options`] reports its own errors.

pub mod backdrop;
pub mod dll_search;
pub mod messages;
pub mod power;
pub mod theme;

use std::fmt;
use std::path::PathBuf;

pub use backdrop::{BackdropType, MIN_BACKDROP_BUILD};
pub use dll_search::DllSearchFlags;
pub use messages::{default_messages, Messages};
pub use power::{PowerCallback, PowerEvent};
pub use theme::{format_hex_color, parse_hex_color, rgb, Theme, ThemeSettings, TitleBarColors};

/// Window class registered when `window_class_name` is not set
pub const DEFAULT_WINDOW_CLASS_NAME: &str = "wailsWindow";

/// Options specific to Windows
#[derive(Clone)]
pub struct Options {
    pub webview_is_transparent: bool,
    pub window_is_translucent: bool,
    pub disable_window_icon: bool,

    pub is_zoom_control_enabled: bool,
    pub zoom_factor: f64,

    pub disable_pinch_zoom: bool,

    /// No aero shadow and no rounded corners in frameless mode.
    /// Rounded corners only exist on Windows 11.
    pub disable_frameless_window_decorations: bool,

    /// Where WebView2 stores user data. `None` uses `%APPDATA%\[BinaryName.exe]`.
    pub webview_user_data_path: Option<PathBuf>,

    /// Directory with a fixed WebView2 runtime. `None` uses the system install.
    pub webview_browser_path: Option<PathBuf>,

    pub theme: Theme,

    /// Custom title bar colours for dark/light mode
    pub custom_theme: Option<ThemeSettings>,

    /// Requires Windows 11 build 22621 or later
    pub backdrop_type: BackdropType,

    /// `None` uses [`default_messages`]
    pub messages: Option<Messages>,

    /// Debounce of webview redraws while the window is resized
    pub resize_debounce_ms: u16,

    /// Called when Windows enters low power mode
    pub on_suspend: Option<PowerCallback>,

    /// Called when Windows resumes from low power mode
    pub on_resume: Option<PowerCallback>,

    pub webview_gpu_is_disabled: bool,

    /// Disables WebView2 `RendererCodeIntegrity`. Some endpoint protection
    /// software injects unsigned DLLs that stop the WebView2 processes.
    /// Turning this on also lets malicious software inject into WebView2.
    pub webview_disable_renderer_code_integrity: bool,

    pub enable_swipe_gestures: bool,

    /// `None` uses [`DEFAULT_WINDOW_CLASS_NAME`]
    pub window_class_name: Option<String>,

    /// Directories searched when loading DLLs.
    /// Example: `DllSearchFlags::APPLICATION_DIR | DllSearchFlags::SYSTEM32`
    pub dll_search_paths: DllSearchFlags,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            webview_is_transparent: false,
            window_is_translucent: false,
            disable_window_icon: false,
            is_zoom_control_enabled: false,
            zoom_factor: 1.0,
            disable_pinch_zoom: false,
            disable_frameless_window_decorations: false,
            webview_user_data_path: None,
            webview_browser_path: None,
            theme: Theme::SystemDefault,
            custom_theme: None,
            backdrop_type: BackdropType::Auto,
            messages: None,
            resize_debounce_ms: 0,
            on_suspend: None,
            on_resume: None,
            webview_gpu_is_disabled: false,
            webview_disable_renderer_code_integrity: false,
            enable_swipe_gestures: false,
            window_class_name: None,
            dll_search_paths: DllSearchFlags::DEFAULT,
        }
    }
}

impl Options {
    /// The message catalog in effect
    pub fn messages(&self) -> Messages {
        self.messages.clone().unwrap_or_default()
    }

    /// The window class name in effect
    pub fn window_class_name(&self) -> &str {
        match self.window_class_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_WINDOW_CLASS_NAME,
        }
    }

    /// Title bar colours to apply, if a custom theme is set
    pub fn title_bar_colors(&self, system_is_dark: bool, active: bool) -> Option<TitleBarColors> {
        let dark = self.theme.is_dark(system_is_dark);
        self.custom_theme
            .as_ref()
            .map(|settings| settings.colors_for(dark, active))
    }

    /// Run the callback registered for `event`. Returns whether one ran.
    pub fn dispatch_power_event(&self, event: PowerEvent) -> bool {
        let callback = match event {
            PowerEvent::Suspend => self.on_suspend.as_ref(),
            PowerEvent::Resume => self.on_resume.as_ref(),
        };

        match callback {
            Some(cb) => {
                crate::log!("Power event {:?}: running callback", event);
                cb();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("webview_is_transparent", &self.webview_is_transparent)
            .field("window_is_translucent", &self.window_is_translucent)
            .field("disable_window_icon", &self.disable_window_icon)
            .field("is_zoom_control_enabled", &self.is_zoom_control_enabled)
            .field("zoom_factor", &self.zoom_factor)
            .field("disable_pinch_zoom", &self.disable_pinch_zoom)
            .field(
                "disable_frameless_window_decorations",
                &self.disable_frameless_window_decorations,
            )
            .field("webview_user_data_path", &self.webview_user_data_path)
            .field("webview_browser_path", &self.webview_browser_path)
            .field("theme", &self.theme)
            .field("custom_theme", &self.custom_theme)
            .field("backdrop_type", &self.backdrop_type)
            .field("messages", &self.messages)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .field("on_suspend", &self.on_suspend.as_ref().map(|_| "<callback>"))
            .field("on_resume", &self.on_resume.as_ref().map(|_| "<callback>"))
            .field("webview_gpu_is_disabled", &self.webview_gpu_is_disabled)
            .field(
                "webview_disable_renderer_code_integrity",
                &self.webview_disable_renderer_code_integrity,
            )
            .field("enable_swipe_gestures", &self.enable_swipe_gestures)
            .field("window_class_name", &self.window_class_name)
            .field("dll_search_paths", &self.dll_search_paths)
            .finish()
    }
}
