//! Process-wide DLL search order

use windows::Win32::System::LibraryLoader::{SetDefaultDllDirectories, LOAD_LIBRARY_FLAGS};

use crate::error::{OptionsError, Result};
use crate::options::DllSearchFlags;

/// Hand `flags` to `SetDefaultDllDirectories`. The default leaves the
/// system search order untouched.
pub fn apply_dll_search_paths(flags: DllSearchFlags) -> Result<()> {
    if flags.is_default() {
        return Ok(());
    }

    crate::log_fn!("apply_dll_search_paths", "{}", flags);
    // SAFETY: plain flag value, no pointers involved.
    unsafe { SetDefaultDllDirectories(LOAD_LIBRARY_FLAGS(flags.bits())) }
        .map_err(|e| OptionsError::win32("SetDefaultDllDirectories", e))
}
