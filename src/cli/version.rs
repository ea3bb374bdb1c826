//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: agrodash [OPTIONS]

Options:
  --offline         Start in offline mode
  --route <PATH>    Open PATH after registration (/, /soil, /crop, /weather,
                    /alerts, /scan, /sync, /profile, /settings)
  --reset           Delete stored profile, queue and preferences
  -h, --help        Show this help
  -V, --version     Show version

Environment:
  AGRODASH_DATA_DIR Directory for store.json and agrodash.log
  AGRODASH_LOG      Log filter (default: info)";

pub fn version_line() -> String {
    format!("agrodash {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        // Version should be in semver format (e.g., "0.1.0")
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("agrodash "));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--offline", "--route", "--reset", "--help", "--version"] {
            assert!(USAGE.contains(flag), "missing {}", flag);
        }
    }
}
