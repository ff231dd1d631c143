use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::Madrid;
const LOCAL_API_BASE_URL: &str = "http://localhost:8088";
const HOSTED_API_BASE_URL: &str = "https://arrivapp.onrender.com";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

impl RuntimeConfig {
    fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            time_zone: self.time_zone.or(fallback.time_zone),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.time_zone.is_some()
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn read_global(name: &str) -> Option<RuntimeConfig> {
    // window.__ARRIVAPP_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    Some(RuntimeConfig {
        api_base_url: read_string(&obj, &["API_BASE_URL", "api_base_url"]),
        time_zone: read_string(&obj, &["TIME_ZONE", "time_zone"]),
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    let env = read_global("__ARRIVAPP_ENV").unwrap_or_default();
    let window_config = read_global("__ARRIVAPP_CONFIG").unwrap_or_default();
    env.merge(window_config)
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn current_hostname() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

pub fn fallback_base_url(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_API_BASE_URL
    } else {
        HOSTED_API_BASE_URL
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn parse_time_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

fn cache(cfg: RuntimeConfig) -> String {
    let tz = cfg
        .time_zone
        .as_deref()
        .and_then(|name| {
            let parsed = parse_time_zone(name);
            if parsed.is_none() {
                log::warn!("Unknown time zone {:?}, using {}", name, DEFAULT_TIME_ZONE);
            }
            parsed
        })
        .unwrap_or(DEFAULT_TIME_ZONE);
    let _ = TIME_ZONE.set(tz);

    let base = cfg.api_base_url.map(|url| normalize_base_url(&url)).unwrap_or_else(|| {
        let host = current_hostname().unwrap_or_default();
        fallback_base_url(&host).to_string()
    });
    API_BASE_URL.get_or_init(|| base).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let mut cfg = snapshot_from_globals();
    if !cfg.is_complete() {
        if let Some(fetched) = fetch_runtime_config().await {
            cfg = cfg.merge(fetched);
        }
    }
    cache(cfg)
}

/// Application time zone; the default until [`init`] has resolved the config.
pub fn current_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(DEFAULT_TIME_ZONE)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {} ({})", base, current_time_zone());
}
