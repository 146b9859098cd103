//! Paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which Zellij points at the
//! cwd of the last focused terminal (usually the user's home directory).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Returns the directory holding the plugin's trace files.
///
/// Resolves to `/host/.local/share/zellij/zcountry`, i.e.
/// `~/.local/share/zellij/zcountry` when Zellij was started from a home
/// directory terminal.
///
/// # Examples
///
/// ```
/// use zcountry::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/zcountry"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join(env!("CARGO_PKG_NAME"))
}

/// Maps a `~`-prefixed configuration path into the sandbox.
///
/// Only a leading `~` or `~/` is rewritten; `~user` forms are left alone.
///
/// # Examples
///
/// ```
/// use zcountry::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_leaves_user_forms() {
        assert_eq!(expand_tilde("~alice/theme.toml"), "~alice/theme.toml");
        assert_eq!(expand_tilde("theme.toml"), "theme.toml");
    }
}
