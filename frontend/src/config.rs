use chrono_tz::Tz;
use leptos::*;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const AUTH_PREFIX: &str = "/api/auth";
const ATTENDANCE_PREFIX: &str = "/api/attendance";
const ADMIN_PREFIX: &str = "/api/admin";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "AUTH_API_URL")]
    pub auth_api_url: Option<String>,
    #[serde(default, alias = "ATTENDANCE_API_URL")]
    pub attendance_api_url: Option<String>,
    #[serde(default, alias = "ADMIN_API_URL")]
    pub admin_api_url: Option<String>,
    #[serde(default, alias = "DISPLAY_TIME_ZONE")]
    pub display_time_zone: Option<String>,
}

/// Base URLs of the three backend collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub auth: String,
    pub attendance: String,
    pub admin: String,
}

impl ApiEndpoints {
    pub fn new(
        auth: impl Into<String>,
        attendance: impl Into<String>,
        admin: impl Into<String>,
    ) -> Self {
        Self {
            auth: trim_base(auth.into()),
            attendance: trim_base(attendance.into()),
            admin: trim_base(admin.into()),
        }
    }

    /// Endpoints behind the bundled reverse proxy mounted at `origin`.
    pub fn under(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self::new(
            format!("{}{}", origin, AUTH_PREFIX),
            format!("{}{}", origin, ATTENDANCE_PREFIX),
            format!("{}{}", origin, ADMIN_PREFIX),
        )
    }

    /// Merges configuration sources in priority order, falling back to the proxy layout.
    pub fn resolve(sources: &[Option<&RuntimeConfig>], origin: &str) -> Self {
        let defaults = Self::under(origin);
        let pick = |select: fn(&RuntimeConfig) -> Option<&String>, fallback: String| {
            sources
                .iter()
                .flatten()
                .find_map(|cfg| non_empty(select(cfg)))
                .unwrap_or(fallback)
        };
        Self::new(
            pick(|cfg| cfg.auth_api_url.as_ref(), defaults.auth),
            pick(|cfg| cfg.attendance_api_url.as_ref(), defaults.attendance),
            pick(|cfg| cfg.admin_api_url.as_ref(), defaults.admin),
        )
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn trim_base(value: String) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// Zone used to render timestamps and the tracker clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Local,
    Named(Tz),
}

impl DisplayZone {
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => match name.parse::<Tz>() {
                Ok(tz) => DisplayZone::Named(tz),
                Err(_) => {
                    log::warn!("Ignoring unknown display time zone '{}'", name);
                    DisplayZone::Local
                }
            },
            None => DisplayZone::Local,
        }
    }
}

struct ResolvedConfig {
    endpoints: ApiEndpoints,
    display_zone: DisplayZone,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

fn origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".to_string())
}

fn read_env_js() -> Option<RuntimeConfig> {
    // Optional global written by env.js: window.__WFH_ENV = { AUTH_API_URL: "...", ... }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &"__WFH_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let read = |keys: &[&str]| {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .and_then(|v| v.as_string())
        })
    };
    Some(RuntimeConfig {
        auth_api_url: read(&["AUTH_API_URL", "auth_api_url"]),
        attendance_api_url: read(&["ATTENDANCE_API_URL", "attendance_api_url"]),
        admin_api_url: read(&["ADMIN_API_URL", "admin_api_url"]),
        display_time_zone: read(&["DISPLAY_TIME_ZONE", "display_time_zone"]),
    })
}

async fn fetch_runtime_config(origin: &str) -> Option<RuntimeConfig> {
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

async fn resolve() -> &'static ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached;
    }
    let origin = origin();
    let env_js = read_env_js();
    let file = fetch_runtime_config(&origin).await;
    let endpoints = ApiEndpoints::resolve(&[env_js.as_ref(), file.as_ref()], &origin);
    let zone_name = env_js
        .as_ref()
        .and_then(|c| c.display_time_zone.clone())
        .or_else(|| file.as_ref().and_then(|c| c.display_time_zone.clone()));
    let display_zone = DisplayZone::parse(zone_name.as_deref());
    log::debug!(
        "Resolved endpoints auth={} attendance={} admin={}",
        endpoints.auth,
        endpoints.attendance,
        endpoints.admin
    );
    RESOLVED.get_or_init(|| ResolvedConfig {
        endpoints,
        display_zone,
    })
}

pub async fn await_endpoints() -> ApiEndpoints {
    resolve().await.endpoints.clone()
}

pub fn display_zone() -> DisplayZone {
    RESOLVED
        .get()
        .map(|cfg| cfg.display_zone)
        .unwrap_or(DisplayZone::Local)
}

/// Display zone in context; starts from whatever is resolved now and settles
/// once env.js and config.json have been read.
pub fn provide_display_zone() -> RwSignal<DisplayZone> {
    let zone = create_rw_signal(display_zone());
    provide_context(zone);
    #[cfg(target_arch = "wasm32")]
    spawn_local(async move {
        let resolved = resolve().await.display_zone;
        log::info!("Runtime config initialized");
        let _ = zone.try_set(resolved);
    });
    zone
}

pub fn use_display_zone() -> Signal<DisplayZone> {
    use_context::<RwSignal<DisplayZone>>()
        .map(Signal::from)
        .unwrap_or_else(|| Signal::derive(display_zone))
}
