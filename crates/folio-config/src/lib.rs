//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.base_url`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_content::{
    ContentMap, DEFAULT_NAVIGATION_LOCATOR, DEFAULT_SITE_NAME, NavEntry, is_normalized,
};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override static site root.
    pub root: Option<PathBuf>,
    /// Override document base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Default static site root, relative to the config directory.
const DEFAULT_ROOT: &str = "public";

/// Default fetch timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Fetch configuration.
    pub fetch: FetchConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteSettings,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    root: Option<String>,
    base_url: Option<String>,
    name: Option<String>,
    navigation: Option<String>,
    routes: Option<BTreeMap<String, String>>,
    nav: Option<Vec<NavEntry>>,
}

/// Resolved site configuration.
#[derive(Debug)]
pub struct SiteSettings {
    /// Static site root directory.
    pub root: PathBuf,
    /// Base URL to fetch documents from instead of `root`.
    pub base_url: Option<String>,
    /// Site name.
    pub name: String,
    /// Locator of the navigation/footer document.
    pub navigation: String,
    /// Content map.
    pub routes: ContentMap,
    /// Shell navigation links; `None` keeps the built-in links.
    pub nav: Option<Vec<NavEntry>>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            base_url: None,
            name: DEFAULT_SITE_NAME.to_owned(),
            navigation: DEFAULT_NAVIGATION_LOCATOR.to_owned(),
            routes: ContentMap::builtin(),
            nav: None,
        }
    }
}

/// Fetch configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Upper bound on a single document fetch, in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FetchConfig {
    /// Fetch timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(root) = &settings.root {
            self.site_resolved.root.clone_from(root);
        }
        if let Some(base_url) = &settings.base_url {
            self.site_resolved.base_url = Some(base_url.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            fetch: FetchConfig::default(),
            site_resolved: SiteSettings {
                root: base.join(DEFAULT_ROOT),
                ..SiteSettings::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_site()?;
        self.validate_fetch()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        let site = &self.site_resolved;

        if let Some(base_url) = &site.base_url {
            require_non_empty(base_url, "site.base_url")?;
            require_http_url(base_url, "site.base_url")?;
        }
        require_non_empty(&site.name, "site.name")?;
        require_non_empty(&site.navigation, "site.navigation")?;

        // Raw keys are checked: the content map normalizes on insert.
        for (path, locator) in self.site.routes.iter().flatten() {
            if !path.starts_with('/') || !is_normalized(path) {
                return Err(ConfigError::Validation(format!(
                    "site.routes key {path:?} must be lower-case, start with / and have no trailing /"
                )));
            }
            require_non_empty(locator, &format!("site.routes.{path:?}"))?;
        }

        Ok(())
    }

    fn validate_fetch(&self) -> Result<(), ConfigError> {
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref url) = self.site.base_url {
            self.site.base_url = Some(expand::expand_env(url, "site.base_url")?);
        }

        Ok(())
    }

    /// Resolve raw site values against the config directory.
    fn resolve(&mut self, config_dir: &Path) {
        let raw = &self.site;
        let defaults = SiteSettings::default();

        self.site_resolved = SiteSettings {
            root: config_dir.join(raw.root.as_deref().unwrap_or(DEFAULT_ROOT)),
            base_url: raw.base_url.clone(),
            name: raw.name.clone().unwrap_or(defaults.name),
            navigation: raw.navigation.clone().unwrap_or(defaults.navigation),
            routes: raw
                .routes
                .as_ref()
                .map_or(defaults.routes, |routes| routes.iter().collect()),
            nav: raw.nav.clone(),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(toml: &str) -> Config {
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project"));
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site_resolved.root, PathBuf::from("/test/public"));
        assert_eq!(config.site_resolved.base_url, None);
        assert_eq!(config.site_resolved.name, "Nilüfer Ormanlı Studio LLC");
        assert_eq!(config.site_resolved.navigation, "content/navigation.yml");
        assert_eq!(config.site_resolved.routes, ContentMap::builtin());
        assert_eq!(config.site_resolved.nav, None);
        assert_eq!(config.fetch.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse("");

        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site_resolved.root, PathBuf::from("/project/public"));
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
[server]
host = "0.0.0.0"
port = 9000

[site]
root = "dist"
base_url = "https://studio.example"
name = "Studio"
navigation = "data/nav.yml"

[site.routes]
"/" = "data/home.yml"
"/work" = "data/work.yml"

[[site.nav]]
label = "Work"
url = "/work"

[fetch]
timeout_secs = 5
"#,
        );

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.site_resolved.root, PathBuf::from("/project/dist"));
        assert_eq!(
            config.site_resolved.base_url.as_deref(),
            Some("https://studio.example")
        );
        assert_eq!(config.site_resolved.name, "Studio");
        assert_eq!(config.site_resolved.navigation, "data/nav.yml");
        assert_eq!(config.site_resolved.routes.len(), 2);
        assert_eq!(
            config.site_resolved.routes.resolve("/work"),
            Some("data/work.yml")
        );
        assert_eq!(config.site_resolved.routes.resolve("/about"), None);
        assert_eq!(
            config.site_resolved.nav,
            Some(vec![NavEntry {
                label: "Work".to_owned(),
                url: "/work".to_owned(),
            }])
        );
        assert_eq!(config.fetch.timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            root: Some(PathBuf::from("/srv/site")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7979); // Unchanged
        assert_eq!(config.site_resolved.root, PathBuf::from("/srv/site"));
        assert_eq!(config.site_resolved.base_url, None);
    }

    #[test]
    fn test_apply_cli_settings_base_url_and_port() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            port: Some(8080),
            base_url: Some("http://localhost:8000".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.site_resolved.base_url.as_deref(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.host = String::new();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let config = parse("[site]\nbase_url = \"ftp://studio.example\"\n");

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_validate_timeout_zero() {
        let config = parse("[fetch]\ntimeout_secs = 0\n");

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fetch.timeout_secs"));
    }

    #[test]
    fn test_validate_route_key_not_normalized() {
        for key in ["/About", "/about/", "about"] {
            let config = parse(&format!("[site.routes]\n\"{key}\" = \"content/about.yml\"\n"));

            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("site.routes"), "{key}: {err}");
        }
    }

    #[test]
    fn test_validate_route_locator_empty() {
        let config = parse("[site.routes]\n\"/about\" = \"\"\n");

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_TEST_CONFIG_HOST", "0.0.0.0");
            std::env::remove_var("FOLIO_TEST_CONFIG_URL");
        }

        let mut config: Config = toml::from_str(
            r#"
[server]
host = "${FOLIO_TEST_CONFIG_HOST}"

[site]
base_url = "${FOLIO_TEST_CONFIG_URL:-https://studio.example}"
"#,
        )
        .unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.base_url.as_deref(), Some("https://studio.example"));

        unsafe {
            std::env::remove_var("FOLIO_TEST_CONFIG_HOST");
        }
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/folio.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[site]\nroot = \"site\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site_resolved.root, dir.path().join("site"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_rejects_invalid_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            base_url: Some("studio.example".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[server\nport = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
