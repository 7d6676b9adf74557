// Tabflow platform paths for Linux
// Config: ~/.config/tabflow

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Tabflow on Linux.
/// Uses `$XDG_CONFIG_HOME/tabflow` if set, otherwise `~/.config/tabflow`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("tabflow")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("tabflow")
    }
}
