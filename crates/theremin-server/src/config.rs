//! Server configuration.
//!
//! Read once at startup. Invalid values are logged and replaced by the
//! detected or default value instead of failing startup.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::str::FromStr;

use theremin_action::{resolve_geometry, CursorDriver};
use theremin_models::{ScreenGeometry, SmoothingConfig, DEFAULT_SMOOTHING_ALPHA};
use tracing::warn;

/// Validated pipeline parameters shared read-only by every session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub geometry: ScreenGeometry,
    pub smoothing: SmoothingConfig,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind IP for the gRPC and metrics listeners (IPv4 or IPv6)
    pub host: String,
    /// gRPC bind port
    pub port: u16,
    /// Display width override (skips auto-detection on that axis)
    pub screen_width: Option<NonZeroU32>,
    /// Display height override
    pub screen_height: Option<NonZeroU32>,
    /// EMA smoothing coefficient
    pub smoothing: SmoothingConfig,
    /// Serve Prometheus metrics
    pub metrics_enabled: bool,
    /// Prometheus exporter port
    pub metrics_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
            screen_width: None,
            screen_height: None,
            smoothing: SmoothingConfig::default(),
            metrics_enabled: true,
            metrics_port: 9464,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let smoothing = parse_var::<f64>(&lookup, "MOUSE_SMOOTHING")
            .and_then(|alpha| match SmoothingConfig::new(alpha) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("Ignoring MOUSE_SMOOTHING: {}, using {}", e, DEFAULT_SMOOTHING_ALPHA);
                    None
                }
            })
            .unwrap_or(defaults.smoothing);

        Self {
            host: lookup("ACTION_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "ACTION_PORT").unwrap_or(defaults.port),
            screen_width: parse_var(&lookup, "SCREEN_WIDTH"),
            screen_height: parse_var(&lookup, "SCREEN_HEIGHT"),
            smoothing,
            metrics_enabled: lookup("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
            metrics_port: parse_var(&lookup, "METRICS_PORT").unwrap_or(defaults.metrics_port),
        }
    }

    /// Parse the bind host as an IP address.
    pub fn bind_ip(&self) -> Result<IpAddr, AddrParseError> {
        self.host.trim().parse()
    }

    /// Socket address for the gRPC listener.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        Ok(SocketAddr::new(self.bind_ip()?, self.port))
    }

    /// Socket address for the Prometheus exporter, on the same host as gRPC.
    pub fn metrics_addr(&self) -> Result<SocketAddr, AddrParseError> {
        Ok(SocketAddr::new(self.bind_ip()?, self.metrics_port))
    }

    /// Resolve the screen geometry against the driver and freeze the pipeline parameters.
    pub fn pipeline(&self, driver: &dyn CursorDriver) -> PipelineConfig {
        PipelineConfig {
            geometry: resolve_geometry(driver, self.screen_width, self.screen_height),
            smoothing: self.smoothing,
        }
    }
}

/// Parse a variable, warning (not failing) when it is set but invalid.
fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparsable {}={:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use theremin_action::TracingDriver;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 50051);
        assert_eq!(config.smoothing.alpha(), 0.30);
        assert_eq!(config.screen_width, None);
        assert_eq!(config.bind_addr().unwrap().port(), 50051);
    }

    #[test]
    fn test_overrides_are_read() {
        let config = config_from(&[
            ("SCREEN_WIDTH", "2560"),
            ("SCREEN_HEIGHT", " 1440 "),
            ("MOUSE_SMOOTHING", "0.4"),
            ("ACTION_PORT", "6000"),
            ("METRICS_ENABLED", "false"),
        ]);
        assert_eq!(config.screen_width, NonZeroU32::new(2560));
        assert_eq!(config.screen_height, NonZeroU32::new(1440));
        assert_eq!(config.smoothing.alpha(), 0.4);
        assert_eq!(config.port, 6000);
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn test_bind_addresses_share_host() {
        let config = config_from(&[("ACTION_HOST", "127.0.0.1"), ("METRICS_PORT", "9100")]);
        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:50051".parse().unwrap());
        assert_eq!(config.metrics_addr().unwrap(), "127.0.0.1:9100".parse().unwrap());
    }

    #[test]
    fn test_ipv6_host() {
        let config = config_from(&[("ACTION_HOST", "::"), ("ACTION_PORT", "6000")]);
        let addr = config.bind_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr, "[::]:6000".parse().unwrap());
        assert_eq!(config.metrics_addr().unwrap(), "[::]:9464".parse().unwrap());
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let config = config_from(&[("ACTION_HOST", "not a host")]);
        assert!(config.bind_addr().is_err());
        assert!(config.metrics_addr().is_err());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("SCREEN_WIDTH", "wide"),
            ("SCREEN_HEIGHT", "0"),
            ("MOUSE_SMOOTHING", "1.7"),
            ("ACTION_PORT", "99999"),
        ]);
        assert_eq!(config.screen_width, None);
        assert_eq!(config.screen_height, None);
        assert_eq!(config.smoothing.alpha(), 0.30);
        assert_eq!(config.port, 50051);
    }

    #[test]
    fn test_pipeline_applies_overrides() {
        let config = config_from(&[("SCREEN_WIDTH", "1280"), ("SCREEN_HEIGHT", "720")]);
        let pipeline = config.pipeline(&TracingDriver);
        assert_eq!(pipeline.geometry, ScreenGeometry::new(1280, 720).unwrap());

        let pipeline = config_from(&[]).pipeline(&TracingDriver);
        assert_eq!(pipeline.geometry, ScreenGeometry::FALLBACK);
    }
}
