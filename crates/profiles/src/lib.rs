//! Resolution of the guidebook profile data directory.
//!
//! Profiles live under a per-user data directory:
//! - Linux: `~/.local/share/madwizard/profiles`
//! - Windows: `%APPDATA%/madwizard/profiles`
//!
//! The `MWPROFILES_PATH` environment variable overrides the computed
//! location entirely.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the profile data directory.
pub const PROFILES_PATH_ENV: &str = "MWPROFILES_PATH";

/// Options controlling profile directory resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Log the resolved directory at info level.
    pub verbose: bool,
}

/// Returns the directory holding guidebook profile data.
///
/// The directory is not created here; callers that need it on disk
/// are expected to create it themselves.
pub fn profile_data_path(opts: &ResolveOptions) -> PathBuf {
    let path = resolve(std::env::var_os(PROFILES_PATH_ENV), data_home());
    if opts.verbose {
        tracing::info!(path = %path.display(), "using profile data directory");
    }
    path
}

fn resolve(overridden: Option<OsString>, data_home: PathBuf) -> PathBuf {
    match overridden {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => data_home.join("madwizard").join("profiles"),
    }
}

/// Returns the platform-specific data directory.
fn data_home() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            if !xdg.is_empty() {
                return PathBuf::from(xdg);
            }
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home).join(".local").join("share")
    }

    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata)
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        PathBuf::from("/tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn resolve_prefers_override() {
        let path = resolve(Some("/custom/profiles".into()), PathBuf::from("/data"));
        assert_eq!(path, Path::new("/custom/profiles"));
    }

    #[test]
    fn resolve_ignores_empty_override() {
        let path = resolve(Some(OsString::new()), PathBuf::from("/data"));
        assert_eq!(path, Path::new("/data/madwizard/profiles"));
    }

    #[test]
    fn resolve_appends_madwizard_profiles() {
        let path = resolve(None, PathBuf::from("/home/user/.local/share"));
        assert!(path.ends_with("madwizard/profiles"));
    }

    #[test]
    fn profile_data_path_not_empty() {
        let path = profile_data_path(&ResolveOptions::default());
        assert!(!path.as_os_str().is_empty());
    }

    #[test]
    fn verbose_resolution_matches_quiet() {
        // The verbose flag only adds logging.
        let quiet = profile_data_path(&ResolveOptions { verbose: false });
        let verbose = profile_data_path(&ResolveOptions { verbose: true });
        assert_eq!(quiet, verbose);
    }
}
