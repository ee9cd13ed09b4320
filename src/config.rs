// Configuration for the shortening client.
//
// `ShortenerConfig` is what the client consumes. The CLI builds it from
// `ConfigLayer`s applied in order: the JSON file, then environment
// variables, then command-line flags. Unset fields in a layer leave the
// previous value alone.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://tinyurl.com/api-create.php";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENDPOINT_ENV: &str = "TINYURL_ENDPOINT";
pub const TIMEOUT_ENV: &str = "TINYURL_TIMEOUT_SECS";

/// Settings for a single shortening call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerConfig {
    /// Address the GET request is sent to.
    pub endpoint: String,
    /// Upper bound for the whole request, connect through body read.
    pub timeout: Duration,
    /// Strip surrounding whitespace from the response body.
    pub trim: bool,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            trim: true,
        }
    }
}

impl ShortenerConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Start from the defaults and apply each layer in order.
    pub fn resolve(layers: &[ConfigLayer]) -> Result<Self> {
        let mut config = Self::default();
        for layer in layers {
            config.apply(layer)?;
        }
        Ok(config)
    }

    fn apply(&mut self, layer: &ConfigLayer) -> Result<()> {
        if let Some(endpoint) = &layer.endpoint {
            if endpoint.trim().is_empty() {
                bail!("endpoint must not be empty");
            }
            self.endpoint = endpoint.clone();
        }
        if let Some(secs) = layer.timeout_secs {
            if secs == 0 {
                bail!("timeout must be at least 1 second");
            }
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(trim) = layer.trim {
            self.trim = trim;
        }
        Ok(())
    }
}

/// A partial configuration. Also the on-disk format of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub trim: Option<bool>,
}

impl ConfigLayer {
    /// `<config dir>/tinyurl-cli/config.json`, when the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tinyurl-cli").join("config.json"))
    }

    /// Read a layer from a JSON file. A missing file yields an empty layer.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let layer: ConfigLayer = serde_json::from_str(&data)
            .with_context(|| format!("Parsing config file {}", path.display()))?;
        tracing::debug!(?layer, "loaded config file {}", path.display());
        Ok(layer)
    }

    /// Layer built from `TINYURL_ENDPOINT` and `TINYURL_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let endpoint = lookup(ENDPOINT_ENV);
        let timeout_secs = match lookup(TIMEOUT_ENV) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))?,
            ),
            None => None,
        };
        Ok(Self {
            endpoint,
            timeout_secs,
            trim: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_public_service() {
        let config = ShortenerConfig::default();
        assert_eq!(config.endpoint, "http://tinyurl.com/api-create.php");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.trim);
    }

    #[test]
    fn later_layers_win() {
        let file = ConfigLayer {
            endpoint: Some("http://file.example/api".into()),
            timeout_secs: Some(30),
            trim: Some(false),
        };
        let flags = ConfigLayer {
            endpoint: Some("http://flag.example/api".into()),
            ..Default::default()
        };
        let config = ShortenerConfig::resolve(&[file, flags]).unwrap();
        assert_eq!(config.endpoint, "http://flag.example/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.trim);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let layer = ConfigLayer {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(ShortenerConfig::resolve(&[layer]).is_err());
    }

    #[test]
    fn missing_file_is_empty_layer() {
        let dir = tempfile::tempdir().unwrap();
        let layer = ConfigLayer::from_file(&dir.path().join("config.json")).unwrap();
        assert_eq!(layer, ConfigLayer::default());
    }

    #[test]
    fn partial_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, r#"{{ "timeout_secs": 3 }}"#).unwrap();

        let layer = ConfigLayer::from_file(&path).unwrap();
        assert_eq!(layer.timeout_secs, Some(3));
        assert_eq!(layer.endpoint, None);
        assert_eq!(layer.trim, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "timeout_secs = 3").unwrap();
        assert!(ConfigLayer::from_file(&path).is_err());
    }

    #[test]
    fn env_lookup() {
        let layer = ConfigLayer::from_lookup(|key| match key {
            ENDPOINT_ENV => Some("http://env.example/api".into()),
            TIMEOUT_ENV => Some(" 5 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(layer.endpoint.as_deref(), Some("http://env.example/api"));
        assert_eq!(layer.timeout_secs, Some(5));

        let bad = ConfigLayer::from_lookup(|key| (key == TIMEOUT_ENV).then(|| "soon".to_string()));
        assert!(bad.is_err());
    }
}
