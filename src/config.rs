//! Options file (windows.toml)
//!
//! Everything in [`Options`] except the power callbacks can be stored in a
//! TOML file. Missing fields keep their defaults.
//!
//! ```toml
//! theme = "dark"
//! backdrop_type = "mica"
//! dll_search_paths = ["application_dir", "system32"]
//!
//! [custom_theme]
//! dark_mode_title_bar = "#202020"
//!
//! [messages]
//! error = "Fehler"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};
use crate::options::{
    format_hex_color, parse_hex_color, BackdropType, DllSearchFlags, Messages, Options, Theme,
    ThemeSettings,
};

/// File name looked up in the standard locations
pub const CONFIG_FILE_NAME: &str = "windows.toml";

/// On-disk form of [`Options`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsFile {
    pub webview_is_transparent: bool,
    pub window_is_translucent: bool,
    pub disable_window_icon: bool,
    pub is_zoom_control_enabled: bool,
    pub zoom_factor: f64,
    pub disable_pinch_zoom: bool,
    pub disable_frameless_window_decorations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webview_user_data_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webview_browser_path: Option<PathBuf>,
    pub theme: Theme,
    pub backdrop_type: BackdropType,
    pub resize_debounce_ms: u16,
    pub webview_gpu_is_disabled: bool,
    pub webview_disable_renderer_code_integrity: bool,
    pub enable_swipe_gestures: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_class_name: Option<String>,
    /// Lower-case flag names, plus a hex entry such as `"0x4"` for bits without a name
    pub dll_search_paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<ThemeColorsFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Messages>,
}

impl Default for OptionsFile {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

/// Title bar colours as `#RRGGBB` strings, or raw `0xXXXXXXXX` values.
/// Missing colours are black.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColorsFile {
    pub dark_mode_title_bar: Option<String>,
    pub dark_mode_title_bar_inactive: Option<String>,
    pub dark_mode_title_text: Option<String>,
    pub dark_mode_title_text_inactive: Option<String>,
    pub dark_mode_border: Option<String>,
    pub dark_mode_border_inactive: Option<String>,
    pub light_mode_title_bar: Option<String>,
    pub light_mode_title_bar_inactive: Option<String>,
    pub light_mode_title_text: Option<String>,
    pub light_mode_title_text_inactive: Option<String>,
    pub light_mode_border: Option<String>,
    pub light_mode_border_inactive: Option<String>,
}

fn color(value: &Option<String>) -> Result<i32> {
    value.as_deref().map_or(Ok(0), parse_hex_color)
}

fn hex(value: i32) -> Option<String> {
    Some(format_hex_color(value))
}

impl ThemeColorsFile {
    /// Parse every colour string
    pub fn to_settings(&self) -> Result<ThemeSettings> {
        Ok(ThemeSettings {
            dark_mode_title_bar: color(&self.dark_mode_title_bar)?,
            dark_mode_title_bar_inactive: color(&self.dark_mode_title_bar_inactive)?,
            dark_mode_title_text: color(&self.dark_mode_title_text)?,
            dark_mode_title_text_inactive: color(&self.dark_mode_title_text_inactive)?,
            dark_mode_border: color(&self.dark_mode_border)?,
            dark_mode_border_inactive: color(&self.dark_mode_border_inactive)?,
            light_mode_title_bar: color(&self.light_mode_title_bar)?,
            light_mode_title_bar_inactive: color(&self.light_mode_title_bar_inactive)?,
            light_mode_title_text: color(&self.light_mode_title_text)?,
            light_mode_title_text_inactive: color(&self.light_mode_title_text_inactive)?,
            light_mode_border: color(&self.light_mode_border)?,
            light_mode_border_inactive: color(&self.light_mode_border_inactive)?,
        })
    }

    pub fn from_settings(settings: &ThemeSettings) -> Self {
        Self {
            dark_mode_title_bar: hex(settings.dark_mode_title_bar),
            dark_mode_title_bar_inactive: hex(settings.dark_mode_title_bar_inactive),
            dark_mode_title_text: hex(settings.dark_mode_title_text),
            dark_mode_title_text_inactive: hex(settings.dark_mode_title_text_inactive),
            dark_mode_border: hex(settings.dark_mode_border),
            dark_mode_border_inactive: hex(settings.dark_mode_border_inactive),
            light_mode_title_bar: hex(settings.light_mode_title_bar),
            light_mode_title_bar_inactive: hex(settings.light_mode_title_bar_inactive),
            light_mode_title_text: hex(settings.light_mode_title_text),
            light_mode_title_text_inactive: hex(settings.light_mode_title_text_inactive),
            light_mode_border: hex(settings.light_mode_border),
            light_mode_border_inactive: hex(settings.light_mode_border_inactive),
        }
    }
}

impl OptionsFile {
    /// Find windows.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: %APPDATA%/winview, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("winview").join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates
            .into_iter()
            .flatten()
            .find(|candidate| candidate.exists())
    }

    /// Load the options file, returning defaults if none is found
    pub fn load() -> Result<Self> {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                crate::log!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Load the options file from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        crate::log_fn!("OptionsFile::load_from_path", "{:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| OptionsError::io(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML text
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the options file, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| OptionsError::io(dir, e))?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| OptionsError::io(path, e))?;
        crate::log!("Saved options to {:?}", path);
        Ok(())
    }

    /// Capture the file-representable part of `options`
    pub fn from_options(options: &Options) -> Self {
        Self {
            webview_is_transparent: options.webview_is_transparent,
            window_is_translucent: options.window_is_translucent,
            disable_window_icon: options.disable_window_icon,
            is_zoom_control_enabled: options.is_zoom_control_enabled,
            zoom_factor: options.zoom_factor,
            disable_pinch_zoom: options.disable_pinch_zoom,
            disable_frameless_window_decorations: options.disable_frameless_window_decorations,
            webview_user_data_path: options.webview_user_data_path.clone(),
            webview_browser_path: options.webview_browser_path.clone(),
            theme: options.theme,
            backdrop_type: options.backdrop_type,
            resize_debounce_ms: options.resize_debounce_ms,
            webview_gpu_is_disabled: options.webview_gpu_is_disabled,
            webview_disable_renderer_code_integrity: options
                .webview_disable_renderer_code_integrity,
            enable_swipe_gestures: options.enable_swipe_gestures,
            window_class_name: options.window_class_name.clone(),
            dll_search_paths: options.dll_search_paths.to_entries(),
            custom_theme: options
                .custom_theme
                .as_ref()
                .map(ThemeColorsFile::from_settings),
            messages: options.messages.clone(),
        }
    }

    /// Build [`Options`]. Power callbacks are left unset.
    pub fn into_options(self) -> Result<Options> {
        let dll_search_paths = DllSearchFlags::from_entries(&self.dll_search_paths)?;
        let custom_theme = self
            .custom_theme
            .as_ref()
            .map(ThemeColorsFile::to_settings)
            .transpose()?;

        Ok(Options {
            webview_is_transparent: self.webview_is_transparent,
            window_is_translucent: self.window_is_translucent,
            disable_window_icon: self.disable_window_icon,
            is_zoom_control_enabled: self.is_zoom_control_enabled,
            zoom_factor: self.zoom_factor,
            disable_pinch_zoom: self.disable_pinch_zoom,
            disable_frameless_window_decorations: self.disable_frameless_window_decorations,
            webview_user_data_path: self.webview_user_data_path,
            webview_browser_path: self.webview_browser_path,
            theme: self.theme,
            custom_theme,
            backdrop_type: self.backdrop_type,
            messages: self.messages,
            resize_debounce_ms: self.resize_debounce_ms,
            on_suspend: None,
            on_resume: None,
            webview_gpu_is_disabled: self.webview_gpu_is_disabled,
            webview_disable_renderer_code_integrity: self.webview_disable_renderer_code_integrity,
            enable_swipe_gestures: self.enable_swipe_gestures,
            window_class_name: self.window_class_name,
            dll_search_paths,
        })
    }
}

/// Load options from the standard locations
pub fn load_options() -> Result<Options> {
    OptionsFile::load()?.into_options()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::rgb;

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = OptionsFile::from_toml("").unwrap();
        assert_eq!(file, OptionsFile::default());

        let options = file.into_options().unwrap();
        assert_eq!(options.theme, Theme::SystemDefault);
        assert_eq!(options.zoom_factor, 1.0);
        assert!(options.custom_theme.is_none());
        assert!(options.messages.is_none());
    }

    #[test]
    fn test_partial_file() {
        let content = r##"
            theme = "dark"
            backdrop_type = "mica"
            resize_debounce_ms = 50
            zoom_factor = 1.5
            dll_search_paths = ["application_dir", "system32"]
            window_class_name = "myWindow"

            [custom_theme]
            dark_mode_title_bar = "#102030"

            [messages]
            error = "Fehler"
        "##;

        let options = OptionsFile::from_toml(content)
            .unwrap()
            .into_options()
            .unwrap();

        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.backdrop_type, BackdropType::Mica);
        assert_eq!(options.resize_debounce_ms, 50);
        assert_eq!(options.zoom_factor, 1.5);
        assert_eq!(
            options.dll_search_paths,
            DllSearchFlags::APPLICATION_DIR | DllSearchFlags::SYSTEM32
        );
        assert_eq!(options.window_class_name(), "myWindow");

        let theme = options.custom_theme.unwrap();
        assert_eq!(theme.dark_mode_title_bar, rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.light_mode_border, 0);

        let messages = options.messages.unwrap();
        assert_eq!(messages.error, "Fehler");
        assert_eq!(
            messages.missing_requirements,
            crate::options::default_messages().missing_requirements
        );
    }

    #[test]
    fn test_bad_values_are_reported() {
        assert!(matches!(
            OptionsFile::from_toml("theme = \"purple\""),
            Err(OptionsError::Parse(_))
        ));
        assert!(matches!(
            OptionsFile::from_toml("resize_debounce_ms = 70000"),
            Err(OptionsError::Parse(_))
        ));

        let bad_flag = OptionsFile::from_toml("dll_search_paths = [\"nowhere\"]").unwrap();
        assert!(matches!(
            bad_flag.into_options(),
            Err(OptionsError::UnknownDllFlag(_))
        ));

        let bad_color =
            OptionsFile::from_toml("[custom_theme]\nlight_mode_border = \"#12\"").unwrap();
        assert!(matches!(
            bad_color.into_options(),
            Err(OptionsError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let options = Options {
            theme: Theme::Light,
            backdrop_type: BackdropType::Tabbed,
            webview_browser_path: Some(PathBuf::from("C:\\runtime")),
            custom_theme: Some(ThemeSettings {
                light_mode_title_bar: rgb(250, 250, 250),
                ..ThemeSettings::default()
            }),
            dll_search_paths: DllSearchFlags::DEFAULT_DIRS,
            ..Options::default()
        };

        OptionsFile::from_options(&options).save_to_path(&path).unwrap();
        let loaded = OptionsFile::load_from_path(&path)
            .unwrap()
            .into_options()
            .unwrap();

        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.backdrop_type, BackdropType::Tabbed);
        assert_eq!(loaded.webview_browser_path, options.webview_browser_path);
        assert_eq!(loaded.custom_theme, options.custom_theme);
        assert_eq!(loaded.dll_search_paths, DllSearchFlags::DEFAULT_DIRS);
    }

    #[test]
    fn test_raw_values_survive_toml() {
        let options = Options {
            dll_search_paths: DllSearchFlags::from_bits_retain(0x204),
            custom_theme: Some(ThemeSettings {
                dark_mode_border: -1,
                light_mode_border: -2,
                dark_mode_title_bar: rgb(32, 32, 32),
                ..ThemeSettings::default()
            }),
            ..Options::default()
        };

        let text = OptionsFile::from_options(&options).to_toml().unwrap();
        assert!(text.contains("0x4"));
        assert!(text.contains("0xFFFFFFFF"));

        let loaded = OptionsFile::from_toml(&text)
            .unwrap()
            .into_options()
            .unwrap();
        assert_eq!(loaded.dll_search_paths.bits(), 0x204);
        assert_eq!(loaded.custom_theme, options.custom_theme);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = OptionsFile::load_from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(OptionsError::Io { .. })));
    }
}
