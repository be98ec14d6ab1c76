use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub renderer_url: Option<String>,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    /// Reads the process environment, after pulling in a `.env` file if one exists.
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(v) => v.parse().with_context(|| format!("BIND_ADDR must be an IP address, got {v:?}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("PORT") {
            Some(v) => v.parse().with_context(|| format!("PORT must be a number, got {v:?}"))?,
            None => DEFAULT_PORT,
        };
        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => v.parse().with_context(|| format!("MAX_UPLOAD_BYTES must be a number, got {v:?}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        let renderer_url = lookup("RENDERER_URL").filter(|v| !v.trim().is_empty());

        Ok(Self { bind_addr, port, renderer_url, max_upload_bytes })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(
            cfg,
            AppConfig {
                bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                port: 8080,
                renderer_url: None,
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            }
        );
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = config(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "3000"),
            ("RENDERER_URL", "http://localhost:5173"),
            ("MAX_UPLOAD_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.renderer_url.as_deref(), Some("http://localhost:5173"));
        assert_eq!(cfg.max_upload_bytes, 1024);
    }

    #[test]
    fn blank_renderer_url_means_none() {
        assert_eq!(config(&[("RENDERER_URL", "  ")]).unwrap().renderer_url, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("PORT", "70000")]).is_err());
        assert!(config(&[("BIND_ADDR", "localhost")]).is_err());
        assert!(config(&[("MAX_UPLOAD_BYTES", "-1")]).is_err());
    }
}
