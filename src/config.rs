//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="json"
//! export CHART_SEED="42"
//! ```
//!
//! ## Variables
//!
//! All variables are optional.
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `SITE_NAME` - Brand name shown in the navigation bar (default: `Dashly`)
//! - `PLOTLY_JS_URL` - plotly.js bundle loaded by the dashboards page
//! - `CHART_HEIGHT` - Chart height in pixels (default: 400, range: 200-1200)
//! - `CHART_SEED` - Fixed seed for the synthetic data; unset draws fresh data per request
//! - `CHART_ID_PREFIX` - Prefix of the chart element ids, `{prefix}-{chart}` (default: `chart`)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::ChartSettings;
use crate::infrastructure::plotly::PlotlyRenderer;

pub const DEFAULT_PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    pub site_name: String,
    pub plotly_js_url: String,
    pub chart_height: u32,
    /// Seed for the chart RNG. Makes every dashboards response identical.
    pub chart_seed: Option<u64>,
    pub chart_id_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "static".to_string(),
            site_name: "Dashly".to_string(),
            plotly_js_url: DEFAULT_PLOTLY_JS_URL.to_string(),
            chart_height: 400,
            chart_seed: None,
            chart_id_prefix: PlotlyRenderer::DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CHART_HEIGHT` or `CHART_SEED` is set but not a
    /// valid number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);
        let site_name = env::var("SITE_NAME").unwrap_or(defaults.site_name);
        let plotly_js_url = env::var("PLOTLY_JS_URL").unwrap_or(defaults.plotly_js_url);
        let chart_id_prefix = env::var("CHART_ID_PREFIX").unwrap_or(defaults.chart_id_prefix);

        let chart_height = match env::var("CHART_HEIGHT") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("CHART_HEIGHT must be a positive integer, got '{v}'"))?,
            Err(_) => defaults.chart_height,
        };

        let chart_seed = env::var("CHART_SEED")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                v.trim()
                    .parse::<u64>()
                    .with_context(|| format!("CHART_SEED must be an unsigned integer, got '{v}'"))
            })
            .transpose()?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            site_name,
            plotly_js_url,
            chart_height,
            chart_seed,
            chart_id_prefix,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `site_name` is empty
    /// - `plotly_js_url` is neither an absolute URL nor a root-relative path
    /// - `chart_height` is outside 200-1200
    /// - `chart_id_prefix` is not a valid HTML id prefix
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.site_name.trim().is_empty() {
            anyhow::bail!("SITE_NAME must not be empty");
        }

        if !self.plotly_js_url.starts_with("https://")
            && !self.plotly_js_url.starts_with("http://")
            && !self.plotly_js_url.starts_with('/')
        {
            anyhow::bail!(
                "PLOTLY_JS_URL must be an http(s) URL or start with '/', got '{}'",
                self.plotly_js_url
            );
        }

        if !(200..=1200).contains(&self.chart_height) {
            anyhow::bail!(
                "CHART_HEIGHT must be between 200 and 1200, got {}",
                self.chart_height
            );
        }

        self.renderer()?;

        Ok(())
    }

    /// Chart renderer using the configured element id prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if `chart_id_prefix` does not start with a letter or
    /// contains characters other than ASCII alphanumerics, `-` and `_`.
    pub fn renderer(&self) -> Result<PlotlyRenderer> {
        PlotlyRenderer::with_prefix(self.chart_id_prefix.as_str())
            .context("CHART_ID_PREFIX must start with a letter and use only [A-Za-z0-9_-]")
    }

    /// Chart settings for [`crate::application::services::DashboardService`].
    pub fn chart_settings(&self) -> ChartSettings {
        ChartSettings {
            height: self.chart_height,
            seed: self.chart_seed,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static directory: {}", self.static_dir);
        tracing::info!("  Site name: {}", self.site_name);
        tracing::info!("  plotly.js: {}", self.plotly_js_url);
        tracing::info!("  Chart height: {}px", self.chart_height);
        tracing::info!("  Chart id prefix: {}", self.chart_id_prefix);

        match self.chart_seed {
            Some(seed) => tracing::info!("  Chart seed: {} (deterministic)", seed),
            None => tracing::info!("  Chart seed: random per request"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charts::{Chart, ChartId, ChartRenderer, Layout};
    use serial_test::serial;

    const VARS: [&str; 9] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "STATIC_DIR",
        "SITE_NAME",
        "PLOTLY_JS_URL",
        "CHART_HEIGHT",
        "CHART_SEED",
        "CHART_ID_PREFIX",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:8080".to_string();

        config.site_name = "   ".to_string();
        assert!(config.validate().is_err());
        config.site_name = "Acme".to_string();

        config.plotly_js_url = "cdn.plot.ly/plotly.js".to_string();
        assert!(config.validate().is_err());
        config.plotly_js_url = "/static/js/plotly.min.js".to_string();
        assert!(config.validate().is_ok());

        config.chart_height = 100;
        assert!(config.validate().is_err());
        config.chart_height = 1200;
        assert!(config.validate().is_ok());

        config.chart_id_prefix = "9charts".to_string();
        assert!(config.validate().is_err());
        config.chart_id_prefix = "demo_charts".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.plotly_js_url, DEFAULT_PLOTLY_JS_URL);
        assert_eq!(config.chart_height, 400);
        assert_eq!(config.chart_seed, None);
        assert_eq!(config.chart_id_prefix, "chart");
    }

    #[test]
    #[serial]
    fn test_chart_settings_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CHART_HEIGHT", "520");
            env::set_var("CHART_SEED", " 42 ");
        }

        let config = Config::from_env().unwrap();
        let settings = config.chart_settings();

        assert_eq!(settings.height, 520);
        assert_eq!(settings.seed, Some(42));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_chart_id_prefix_from_env() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CHART_ID_PREFIX", "demo");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.chart_id_prefix, "demo");

        let chart = Chart::new(ChartId::Revenue, Layout::themed("Revenue", 400));
        assert_eq!(config.renderer().unwrap().element_id(&chart), "demo-line_chart");

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CHART_ID_PREFIX", "demo charts");
        }
        assert!(load_from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_seed_means_random() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CHART_SEED", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.chart_seed, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_numbers_are_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CHART_SEED", "not-a-number");
        }
        assert!(Config::from_env().is_err());

        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("CHART_SEED");
            env::set_var("CHART_HEIGHT", "-5");
        }
        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_validates() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "yaml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
