use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_PAGES_PATH: &str = "/api/facebook-pages";
pub const DEFAULT_POST_PATH: &str = "/api/post-video";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where and how to reach the posting backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub pages_path: String,
    pub post_path: String,
    pub timeout: Duration,
    pub user_agent: String,
}

/// On-disk shape; every key is optional.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    pages_path: Option<String>,
    #[serde(default)]
    post_path: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pages_path: DEFAULT_PAGES_PATH.to_string(),
            post_path: DEFAULT_POST_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("pagecast/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, then the config file (explicit path or the platform default if present),
    /// then `PAGECAST_*` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut cfg = Self::default();
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };
        if let Some(path) = path {
            cfg = cfg.merge_file(&path)?;
        }
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.base()?;
        Ok(cfg)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(s).context("parsing config")?;
        let cfg = Self::default().merge(file);
        cfg.base()?;
        Ok(cfg)
    }

    fn merge_file(self, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        let file: FileConfig = toml::from_str(&text)
            .with_context(|| format!("parsing config file: {}", path.display()))?;
        Ok(self.merge(file))
    }

    fn merge(mut self, file: FileConfig) -> Self {
        if let Some(u) = file.base_url { self.base_url = u; }
        if let Some(p) = file.pages_path { self.pages_path = p; }
        if let Some(p) = file.post_path { self.post_path = p; }
        if let Some(t) = file.timeout_secs { self.timeout = Duration::from_secs(t); }
        if let Some(ua) = file.user_agent { self.user_agent = ua; }
        self
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = var("PAGECAST_BASE_URL").filter(|s| !s.trim().is_empty()) {
            self.base_url = raw.trim().to_string();
        }
        if let Some(raw) = var("PAGECAST_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse()
                .with_context(|| format!("invalid PAGECAST_TIMEOUT_SECS: {raw}"))?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(())
    }

    pub fn pages_url(&self) -> Result<Url> { self.endpoint(&self.pages_path) }

    pub fn post_url(&self) -> Result<Url> { self.endpoint(&self.post_path) }

    /// Parsed base URL.
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("invalid base url: {}", self.base_url))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base()?
            .join(path)
            .with_context(|| format!("joining {} onto {}", path, self.base_url))
    }
}

/// `pagecast.toml` in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("dev", "pagecast", "pagecast")?;
    Some(proj.config_dir().join("pagecast.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_local_backend() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.pages_url().unwrap().as_str(), "http://127.0.0.1:5001/api/facebook-pages");
        assert_eq!(cfg.post_url().unwrap().as_str(), "http://127.0.0.1:5001/api/post-video");
        assert_eq!(cfg.timeout, Duration::from_secs(60));
        assert!(cfg.user_agent.starts_with("pagecast/"));
    }

    #[test]
    fn file_overrides_defaults() {
        let cfg = ClientConfig::from_toml_str(
            r#"
            base_url = "https://poster.example.com/app/"
            post_path = "api/schedule-post"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.post_url().unwrap().as_str(), "https://poster.example.com/app/api/schedule-post");
        assert_eq!(cfg.pages_url().unwrap().as_str(), "https://poster.example.com/api/facebook-pages");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ClientConfig::from_toml_str("base_uri = \"http://x\"").is_err());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(ClientConfig::from_toml_str("base_url = \"not a url\"").is_err());
    }

    #[test]
    fn env_overrides_file() {
        let env: HashMap<&str, &str> =
            [("PAGECAST_BASE_URL", "http://10.0.0.2:8080"), ("PAGECAST_TIMEOUT_SECS", "3")].into();
        let mut cfg = ClientConfig::from_toml_str("base_url = \"http://other\"").unwrap();
        cfg.apply_env(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.base().unwrap().as_str(), "http://10.0.0.2:8080/");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn bad_env_timeout_is_an_error() {
        let mut cfg = ClientConfig::default();
        assert!(cfg.apply_env(|k| (k == "PAGECAST_TIMEOUT_SECS").then(|| "soon".to_string())).is_err());
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagecast.toml");
        std::fs::write(&path, "user_agent = \"custom/1\"\n").unwrap();
        let cfg = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.user_agent, "custom/1");
    }

    #[test]
    fn load_fails_on_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ClientConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
