//! Crate error types

use std::path::PathBuf;

use thiserror::Error;

/// Every error winview can report
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Reading or writing the options file failed
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The options file is not valid TOML or has a field of the wrong type
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The options could not be written out as TOML
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The options could not be written out as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A colour string is not `#RGB` or `#RRGGBB`
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    /// A DLL search flag name is not recognised
    #[error("Unknown DLL search flag: {0}")]
    UnknownDllFlag(String),

    /// A Win32 API call returned a failure code
    #[error("{function} failed (error {code:#010x})")]
    Win32 { function: &'static str, code: u32 },
}

impl OptionsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OptionsError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(windows)]
impl OptionsError {
    /// Wrap a windows-crate error, keeping the name of the failing call
    pub(crate) fn win32(function: &'static str, e: windows::core::Error) -> Self {
        // HRESULT is i32; reinterpret the bits for display
        OptionsError::Win32 {
            function,
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, OptionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win32_display_is_hex() {
        let e = OptionsError::Win32 {
            function: "DwmSetWindowAttribute",
            code: 0x80070057,
        };
        assert_eq!(
            e.to_string(),
            "DwmSetWindowAttribute failed (error 0x80070057)"
        );
    }

    #[test]
    fn test_io_keeps_source() {
        use std::error::Error;

        let e = OptionsError::io(
            "windows.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(e.source().is_some());
        assert!(e.to_string().contains("windows.toml"));
    }
}
