use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP request parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total time allowed for one GET, in seconds.
    pub timeout_secs: u64,
    /// Time allowed to establish the connection, in seconds.
    pub connect_timeout_secs: u64,
    /// Sent as `User-Agent` on every request.
    pub user_agent: String,
    /// Sent as `Referer` on every request.
    pub referer: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 15,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36"
                .to_string(),
            referer: "https://www.urbanways.co.in/".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Both timeouts must be non-zero; curl treats 0 as "wait forever".
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("http.timeout_secs must be greater than 0");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("http.connect_timeout_secs must be greater than 0");
        }
        Ok(())
    }

    /// Static headers attached to every image request, as (name, value).
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("User-Agent".to_string(), self.user_agent.clone()),
            ("Referer".to_string(), self.referer.clone()),
        ]
    }
}

/// Global configuration, optionally loaded from `~/.config/imgopt/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgoptConfig {
    /// Directory that receives `{identifier}.webp` files.
    pub output_dir: PathBuf,
    /// Image host; each identifier is appended as a path segment.
    pub base_url: String,
    /// Value of the `q` query parameter asked of the image host.
    pub source_quality: u8,
    pub http: HttpConfig,
}

impl Default for ImgoptConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets/images"),
            base_url: "https://images.unsplash.com/".to_string(),
            source_quality: 80,
            http: HttpConfig::default(),
        }
    }
}

/// Default config location, if the file exists. Never creates anything.
pub fn default_config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgopt")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Parse a config file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<ImgoptConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ImgoptConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.http
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration: `explicit` if given, else the XDG config file if
/// present, else built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<ImgoptConfig> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    match default_config_path()? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_from_path(&path)
        }
        None => Ok(ImgoptConfig::default()),
    }
}
