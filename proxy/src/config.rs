use anyhow::{anyhow, Context};
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};
use url::Url;

use crate::routes::Upstream;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_AUTH_UPSTREAM: &str = "http://34.122.21.18:4000";
pub const DEFAULT_ATTENDANCE_UPSTREAM: &str = "http://35.193.28.139:4002";
pub const DEFAULT_ADMIN_UPSTREAM: &str = "http://35.232.21.216:4001";
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub auth_upstream: Url,
    pub attendance_upstream: Url,
    pub admin_upstream: Url,
    pub static_dir: PathBuf,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_raw = get("PROXY_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw
            .parse()
            .with_context(|| format!("Invalid PROXY_BIND_ADDR value: {}", bind_raw))?;

        let timeout_raw = get(
            "UPSTREAM_TIMEOUT_SECS",
            &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs: u64 = timeout_raw
            .parse()
            .map_err(|_| anyhow!("Invalid UPSTREAM_TIMEOUT_SECS value: {}", timeout_raw))?;

        Ok(Config {
            bind_addr,
            auth_upstream: parse_upstream(
                "AUTH_UPSTREAM_URL",
                &get("AUTH_UPSTREAM_URL", DEFAULT_AUTH_UPSTREAM),
            )?,
            attendance_upstream: parse_upstream(
                "ATTENDANCE_UPSTREAM_URL",
                &get("ATTENDANCE_UPSTREAM_URL", DEFAULT_ATTENDANCE_UPSTREAM),
            )?,
            admin_upstream: parse_upstream(
                "ADMIN_UPSTREAM_URL",
                &get("ADMIN_UPSTREAM_URL", DEFAULT_ADMIN_UPSTREAM),
            )?,
            static_dir: PathBuf::from(get("STATIC_DIR", DEFAULT_STATIC_DIR)),
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn upstream_base(&self, upstream: Upstream) -> &Url {
        match upstream {
            Upstream::Auth => &self.auth_upstream,
            Upstream::Attendance => &self.attendance_upstream,
            Upstream::Admin => &self.admin_upstream,
        }
    }
}

fn parse_upstream(key: &str, raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid {} value: {}", key, raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("{} must use http or https, got {}", key, other)),
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
    fn defaults_apply_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.auth_upstream.as_str(), "http://34.122.21.18:4000/");
        assert_eq!(cfg.attendance_upstream.port(), Some(4002));
        assert_eq!(cfg.admin_upstream.port(), Some(4001));
        assert_eq!(cfg.static_dir, PathBuf::from("dist"));
        assert_eq!(cfg.upstream_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_and_blank_values() {
        let cfg = Config::from_lookup(lookup(&[
            ("PROXY_BIND_ADDR", "127.0.0.1:8080"),
            ("ADMIN_UPSTREAM_URL", "https://admin.internal"),
            ("STATIC_DIR", "  "),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.admin_upstream.host_str(), Some("admin.internal"));
        assert_eq!(cfg.static_dir, PathBuf::from("dist"));
        assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));
        assert_eq!(cfg.upstream_base(Upstream::Admin), &cfg.admin_upstream);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("PROXY_BIND_ADDR", "nope")])).is_err());
        assert!(Config::from_lookup(lookup(&[("AUTH_UPSTREAM_URL", "ftp://x")])).is_err());
        assert!(Config::from_lookup(lookup(&[("UPSTREAM_TIMEOUT_SECS", "soon")])).is_err());
    }
}
