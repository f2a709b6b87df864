use serde::Deserialize;

use crate::query::MetricsRange;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Max request body accepted by the normalization endpoints.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_max_body_bytes() -> usize {
    8 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Range used by /api/metrics/query when the request names none.
    #[serde(default = "default_range")]
    pub default_range: MetricsRange,
    /// Percentile requested for nginx:latency-histogram.
    #[serde(default = "default_percentile")]
    pub default_percentile: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_range: default_range(),
            default_percentile: default_percentile(),
        }
    }
}

fn default_range() -> MetricsRange {
    MetricsRange::SixHours
}

fn default_percentile() -> f64 {
    0.99
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        anyhow::ensure!(
            self.limits.max_body_bytes > 0,
            "limits.max_body_bytes must be > 0, got {}",
            self.limits.max_body_bytes
        );
        anyhow::ensure!(
            self.query.default_percentile > 0.0 && self.query.default_percentile <= 1.0,
            "query.default_percentile must be in (0, 1], got {}",
            self.query.default_percentile
        );
        Ok(())
    }
}
