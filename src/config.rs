//! Runtime configuration.
//!
//! Values come from defaults, then `MINDWELL_*` environment variables, then
//! command-line flags.

use std::path::PathBuf;

use crate::backend::DEFAULT_BACKEND_URL;
use crate::cli::RunOptions;
use crate::ui::theme::Skin;

pub const ENV_BACKEND_URL: &str = "MINDWELL_BACKEND_URL";
pub const ENV_SKIN: &str = "MINDWELL_SKIN";
pub const ENV_LOG_FILE: &str = "MINDWELL_LOG_FILE";

/// Mood history entries shown on the mood tab.
pub const DEFAULT_HISTORY_DISPLAY_LIMIT: usize = 10;

/// Client configuration.
///
/// ```ignore
/// use mindwell::config::Config;
/// use mindwell::ui::theme::Skin;
///
/// let config = Config::default()
///     .with_backend_url("http://localhost:9000")
///     .with_skin(Skin::Glass);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend base URL without a trailing slash
    pub backend_url: String,
    pub skin: Skin,
    /// Where tracing output goes
    pub log_file: PathBuf,
    pub history_display_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            skin: Skin::default(),
            log_file: default_log_file(),
            history_display_limit: DEFAULT_HISTORY_DISPLAY_LIMIT,
        }
    }
}

/// `<data dir>/mindwell/mindwell.log`, or the temp dir when no data dir exists.
pub fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mindwell")
        .join("mindwell.log")
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend URL. A trailing slash is dropped.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_skin(mut self, skin: Skin) -> Self {
        self.skin = skin;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn with_history_display_limit(mut self, limit: usize) -> Self {
        self.history_display_limit = limit;
        self
    }

    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_checked().0
    }

    /// Build from the process environment, returning ignored-value warnings
    /// for the caller to log once logging is up.
    pub fn from_env_checked() -> (Self, Vec<String>) {
        Self::from_lookup_checked(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values are ignored and
    /// an unknown skin keeps the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_checked(lookup).0
    }

    /// Like [`Config::from_lookup`], also returning a warning per ignored value.
    pub fn from_lookup_checked<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(url) = get(ENV_BACKEND_URL) {
            config = config.with_backend_url(url.trim());
        }
        if let Some(skin) = get(ENV_SKIN) {
            match skin.parse::<Skin>() {
                Ok(skin) => config = config.with_skin(skin),
                Err(e) => warnings.push(format!("ignoring {}: {}", ENV_SKIN, e)),
            }
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        (config, warnings)
    }

    /// Apply command-line overrides.
    pub fn apply_cli(mut self, options: &RunOptions) -> Self {
        if let Some(url) = &options.backend_url {
            self = self.with_backend_url(url.as_str());
        }
        if let Some(skin) = options.skin {
            self = self.with_skin(skin);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://localhost:8001");
        assert_eq!(config.skin, Skin::Flat);
        assert_eq!(config.history_display_limit, 10);
        assert!(config.log_file.ends_with("mindwell/mindwell.log"));
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            (ENV_BACKEND_URL, "https://api.example.org/"),
            (ENV_SKIN, "glass"),
            (ENV_LOG_FILE, "/tmp/mw.log"),
        ]));
        assert_eq!(config.backend_url, "https://api.example.org");
        assert_eq!(config.skin, Skin::Glass);
        assert_eq!(config.log_file, PathBuf::from("/tmp/mw.log"));
    }

    #[test]
    fn test_invalid_and_empty_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[(ENV_BACKEND_URL, "  "), (ENV_SKIN, "neon")]));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.skin, Skin::Flat);
    }

    #[test]
    fn test_invalid_skin_is_reported() {
        let (config, warnings) = Config::from_lookup_checked(lookup(&[(ENV_SKIN, "neon")]));
        assert_eq!(config.skin, Skin::Flat);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with(&format!("ignoring {}", ENV_SKIN)));
        assert!(warnings[0].contains("neon"));

        let (_, warnings) = Config::from_lookup_checked(lookup(&[(ENV_SKIN, "glass")]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_cli_overrides_env() {
        let config = Config::from_lookup(lookup(&[(ENV_SKIN, "glass")])).apply_cli(&RunOptions {
            backend_url: Some("http://10.0.0.2:8001/".into()),
            skin: Some(Skin::Flat),
        });
        assert_eq!(config.backend_url, "http://10.0.0.2:8001");
        assert_eq!(config.skin, Skin::Flat);
    }
}
