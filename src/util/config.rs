//! Settings file parsing and per-user paths.
//!
//! Candidex reads an optional TOML settings file from
//! `~/.config/candidex/settings.toml`. Unknown keys are ignored and invalid
//! values fall back to defaults; a broken settings file never prevents
//! startup.

use std::path::PathBuf;

use crate::state::SortDirection;

/// User-tunable startup settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Path to the candidate dataset file, when overridden.
    pub data_path: Option<PathBuf>,
    /// Initial sort direction for the results table.
    pub sort_direction: SortDirection,
}

/// On-disk shape of the settings file. All keys optional.
#[derive(Debug, serde::Deserialize)]
struct RawSettings {
    /// Dataset path as written in the file.
    data_path: Option<String>,
    /// Sort direction key ("descending"/"ascending" plus aliases).
    sort_direction: Option<String>,
}

/// What: Resolve the per-user configuration directory, creating it.
///
/// Inputs: none
///
/// Output:
/// - `$XDG_CONFIG_HOME/candidex` or `~/.config/candidex`; creation failures
///   are ignored and the path returned regardless.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME").map_or_else(
        || {
            let home = std::env::var_os("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config")
        },
        PathBuf::from,
    );
    let dir = base.join("candidex");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Resolve the log directory under the configuration directory.
///
/// Inputs: none
///
/// Output: `config_dir()/logs`, created best-effort.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default location of the settings file.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

/// What: Load settings from the default location.
///
/// Inputs: none
///
/// Output:
/// - Parsed [`Settings`]; defaults when the file is absent or invalid.
#[must_use]
pub fn load_settings() -> Settings {
    match std::fs::read_to_string(settings_path()) {
        Ok(text) => parse_settings(&text),
        Err(_) => Settings::default(),
    }
}

/// What: Parse settings from TOML text with lenient fallbacks.
///
/// Inputs:
/// - `text`: Raw TOML content
///
/// Output:
/// - [`Settings`] with every unrecognized or missing value defaulted.
#[must_use]
pub fn parse_settings(text: &str) -> Settings {
    let raw: RawSettings = match toml::from_str(text) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "invalid settings file; using defaults");
            return Settings::default();
        }
    };
    Settings {
        data_path: raw.data_path.map(PathBuf::from),
        sort_direction: raw
            .sort_direction
            .as_deref()
            .and_then(SortDirection::from_config_key)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Well-formed settings map onto the Settings struct
    ///
    /// - Input: TOML with data_path and an ascending alias
    /// - Output: Path set; ascending direction
    fn config_parse_settings_happy_path() {
        let s = parse_settings("data_path = \"/tmp/cands.json\"\nsort_direction = \"oldest\"\n");
        assert_eq!(s.data_path, Some(PathBuf::from("/tmp/cands.json")));
        assert_eq!(s.sort_direction, SortDirection::Ascending);
    }

    #[test]
    /// What: Broken or partial settings fall back to defaults
    ///
    /// - Input: Invalid TOML; unknown direction; empty file
    /// - Output: Default settings in every case (direction descending)
    fn config_parse_settings_lenient_fallbacks() {
        assert_eq!(parse_settings("not [ toml"), Settings::default());
        let s = parse_settings("sort_direction = \"sideways\"");
        assert_eq!(s.sort_direction, SortDirection::Descending);
        assert_eq!(parse_settings(""), Settings::default());
    }
}
