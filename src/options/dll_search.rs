//! DLL search path flags
//!
//! Raw mirrors of the `LoadLibraryEx` / `SetDefaultDllDirectories` flag
//! values. The bitmask is handed to the OS unchanged, unknown bits included.

use std::fmt;

use bitflags::bitflags;

use crate::error::{OptionsError, Result};

bitflags! {
    /// Combination of DLL search flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DllSearchFlags: u32 {
        const DONT_RESOLVE_DLL_REFERENCES = 0x1;
        const AS_DATA_FILE = 0x2;
        const WITH_ALTERED_PATH = 0x8;
        const IGNORE_CODE_AUTHZ_LEVEL = 0x10;
        const AS_IMAGE_RESOURCE = 0x20;
        const AS_DATA_FILE_EXCLUSIVE = 0x40;
        const REQUIRE_SIGNED_TARGET = 0x80;
        const DLL_LOAD_DIR = 0x100;
        const APPLICATION_DIR = 0x200;
        const USER_DIRS = 0x400;
        const SYSTEM32 = 0x800;
        const DEFAULT_DIRS = 0x1000;
        const SAFE_CURRENT_DIRS = 0x2000;
        const SYSTEM32_NO_FORWARDER = 0x4000;
        const OS_INTEGRITY_CONTINUITY = 0x8000;
    }
}

impl DllSearchFlags {
    /// No changes to the default Windows DLL search behavior
    pub const DEFAULT: Self = Self::empty();

    /// True when no flag is set
    pub const fn is_default(self) -> bool {
        self.is_empty()
    }

    /// Parse one config entry: a flag name in any case (`system32`) or a
    /// hex bitmask (`0x4`) for bits without a name
    pub fn parse_entry(entry: &str) -> Result<Self> {
        let entry = entry.trim();
        let unknown = || OptionsError::UnknownDllFlag(entry.to_string());

        if let Some(hex) = entry
            .strip_prefix("0x")
            .or_else(|| entry.strip_prefix("0X"))
        {
            return u32::from_str_radix(hex, 16)
                .map(Self::from_bits_retain)
                .map_err(|_| unknown());
        }

        Self::from_name(&entry.to_ascii_uppercase()).ok_or_else(unknown)
    }

    /// Combine config entries
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        entries
            .iter()
            .try_fold(Self::DEFAULT, |acc, entry| -> Result<Self> {
                Ok(acc | Self::parse_entry(entry.as_ref())?)
            })
    }

    /// Config entries for the set bits: lower-case flag names in bit order,
    /// then any unnamed bits as one hex entry
    pub fn to_entries(self) -> Vec<String> {
        let mut names = self.iter_names();
        let mut entries: Vec<String> = names
            .by_ref()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect();

        let rest = names.remaining();
        if !rest.is_empty() {
            entries.push(format!("{:#x}", rest.bits()));
        }
        entries
    }
}

impl Default for DllSearchFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for DllSearchFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl From<DllSearchFlags> for u32 {
    fn from(flags: DllSearchFlags) -> Self {
        flags.bits()
    }
}

impl fmt::Display for DllSearchFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            return write!(f, "default");
        }
        write!(f, "{} ({:#06x})", self.to_entries().join(" | "), self.bits())
    }
}
