//! Config file discovery.

use std::ffi::OsString;
use std::path::PathBuf;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "flock.toml";

/// Resolve the config path: explicit flag, then `FLOCK_CONFIG`, then
/// `./flock.toml`.
pub fn get_config_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve_config_path(explicit, std::env::var_os("FLOCK_CONFIG"))
}

fn resolve_config_path(explicit: Option<PathBuf>, from_env: Option<OsString>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(path) = from_env {
        return PathBuf::from(path);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(
            Some(PathBuf::from("/tmp/custom.toml")),
            Some(OsString::from("/etc/flock.toml")),
        );
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_env_override() {
        let path = resolve_config_path(None, Some(OsString::from("/etc/flock.toml")));
        assert_eq!(path, PathBuf::from("/etc/flock.toml"));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(resolve_config_path(None, None), PathBuf::from("flock.toml"));
    }
}
