//! User-facing messages shown by the WebView2 runtime checks

use serde::{Deserialize, Serialize};

/// Messages that can be customised. Each field is shown as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub installation_required: String,
    pub update_required: String,
    pub missing_requirements: String,
    pub webview2_not_installed: String,
    pub error: String,
    pub failed_to_install: String,
    /// Followed by the minimum runtime version when displayed
    pub download_page: String,
    pub press_ok_to_install: String,
    pub contact_admin: String,
    pub invalid_fixed_webview2: String,
    pub webview2_process_crash: String,
}

impl Default for Messages {
    fn default() -> Self {
        default_messages()
    }
}

/// The built-in English message catalog
pub fn default_messages() -> Messages {
    Messages {
        installation_required: "The WebView2 runtime is required. Press Ok to download and install. Note: The installer will download silently so please wait.".to_string(),
        update_required: "The WebView2 runtime needs updating. Press Ok to download and install. Note: The installer will download silently so please wait.".to_string(),
        missing_requirements: "Missing Requirements".to_string(),
        webview2_not_installed: "WebView2 runtime not installed".to_string(),
        error: "Error".to_string(),
        failed_to_install: "The runtime failed to install correctly. Please try again.".to_string(),
        download_page: "This application requires the WebView2 runtime. Press OK to open the download page. Minimum version required: ".to_string(),
        press_ok_to_install: "Press Ok to install.".to_string(),
        contact_admin: "The WebView2 runtime is required to run this application. Please contact your system administrator.".to_string(),
        invalid_fixed_webview2: "The WebView2 runtime is manually specified, but It is not valid. Check minimum required version and webview2 path.".to_string(),
        webview2_process_crash: "The WebView2 process crashed and the application needs to be restarted.".to_string(),
    }
}

impl Messages {
    /// All messages paired with their field names
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("installation_required", self.installation_required.as_str()),
            ("update_required", self.update_required.as_str()),
            ("missing_requirements", self.missing_requirements.as_str()),
            ("webview2_not_installed", self.webview2_not_installed.as_str()),
            ("error", self.error.as_str()),
            ("failed_to_install", self.failed_to_install.as_str()),
            ("download_page", self.download_page.as_str()),
            ("press_ok_to_install", self.press_ok_to_install.as_str()),
            ("contact_admin", self.contact_admin.as_str()),
            ("invalid_fixed_webview2", self.invalid_fixed_webview2.as_str()),
            ("webview2_process_crash", self.webview2_process_crash.as_str()),
        ]
    }
}
