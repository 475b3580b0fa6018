// Author: Dustin Pilgrim
// License: MIT

use std::ffi::OsString;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "paintkit";
const LOG_FILE: &str = "paintkit.log";
const CONFIG_FILE: &str = "paintkit.rune";

/// `$XDG_STATE_HOME/paintkit/paintkit.log`
pub fn default_log_path() -> PathBuf {
    let base = xdg_base(
        std::env::var_os("XDG_STATE_HOME"),
        std::env::var_os("HOME"),
        ".local/state",
    )
    .unwrap_or_else(std::env::temp_dir);
    base.join(APP_DIR).join(LOG_FILE)
}

/// `$XDG_CONFIG_HOME/paintkit/paintkit.rune`, relative to the working
/// directory when neither XDG nor HOME is set.
pub fn default_config_path() -> PathBuf {
    let base = xdg_base(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
        ".config",
    )
    .unwrap_or_default();
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// An empty XDG variable counts as unset.
fn xdg_base(xdg: Option<OsString>, home: Option<OsString>, home_rel: &str) -> Option<PathBuf> {
    let non_empty = |v: OsString| (!v.is_empty()).then(|| PathBuf::from(v));
    xdg.and_then(non_empty)
        .or_else(|| home.and_then(non_empty).map(|h| h.join(home_rel)))
}

pub fn create_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
