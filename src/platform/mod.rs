// Tabflow platform layer
// Two concerns live here: per-OS config paths for the preference file, and
// the browser host seam the engine drives (`TabHost`), with an in-memory
// implementation for demos and tests.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific path implementation at compile time.

use std::path::PathBuf;

pub mod host;
pub mod memory;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Tabflow.
///
/// - **Linux**: `~/.config/tabflow` (or `$XDG_CONFIG_HOME/tabflow`)
/// - **macOS**: `~/Library/Application Support/Tabflow`
/// - **Windows**: `%APPDATA%/Tabflow`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
