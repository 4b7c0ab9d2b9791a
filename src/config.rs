//! Runtime backend-URL resolution.
//!
//! The deployed bundle is static, so the backend base URL cannot be baked in
//! at compile time. Resolution order: `window.__AEGIS_ENV` (injected env.js),
//! `window.__AEGIS_CONFIG`, a `config.json` fetched next to the bundle, and
//! finally the page origin (same-origin requests).

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub backend_url: Option<String>,
}

static BACKEND_URL: OnceLock<String> = OnceLock::new();

/// Drops a trailing slash so endpoint paths can always be appended verbatim.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn cache_backend_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = BACKEND_URL.set(value.clone());
    BACKEND_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let any = js_sys::Reflect::get(&window(), &(*global).into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // Expect optional globals:
    //   window.__AEGIS_ENV = { BACKEND_URL: "..." }   (env.js)
    //   window.__AEGIS_CONFIG = { backend_url: "..." }
    read_global_key("__AEGIS_ENV", &["BACKEND_URL", "backend_url"])
        .or_else(|| read_global_key("__AEGIS_CONFIG", &["backend_url", "BACKEND_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn same_origin() -> Option<String> {
    window().location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn same_origin() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(config: &RuntimeConfig) {
    let url = match &config.backend_url {
        Some(url) => url,
        None => return,
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"backend_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window(), &"__AEGIS_CONFIG".into(), &obj);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_window_config(_config: &RuntimeConfig) {}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    // reqwest needs an absolute URL even for a sibling file.
    let origin = same_origin()?;
    let response = reqwest::get(&format!("{}/config.json", origin)).await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<RuntimeConfig>().await.ok()
}

pub async fn await_backend_url() -> String {
    if let Some(cached) = BACKEND_URL.get() {
        return cached.clone();
    }
    if let Some(url) = snapshot_from_globals() {
        return cache_backend_url(&url);
    }
    if let Some(config) = fetch_runtime_config().await {
        write_window_config(&config);
        if let Some(url) = config.backend_url {
            return cache_backend_url(&url);
        }
    }
    cache_backend_url(&same_origin().unwrap_or_default())
}

pub async fn init() {
    let _ = await_backend_url().await;
}
