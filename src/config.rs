#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Path of the device's JSON status endpoint
pub const STATUS_PATH: &str = "/wall-eno/json-status";

/// Delay between two status polls
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 6_000;

/// Runtime settings for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL prepended to API paths; empty means same origin
    pub api_url: String,
    pub status_path: String,
    pub poll_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            status_path: STATUS_PATH.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Build the config from `window.ENV`, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(api_url) = read_env("API_URL") {
            config.api_url = api_url.trim_end_matches('/').to_string();
        }

        if let Some(interval) = read_env("POLL_INTERVAL_MS").and_then(|raw| parse_interval(&raw)) {
            config.poll_interval_ms = interval;
        }

        config
    }
}

/// Parse a poll interval in milliseconds, rejecting zero
pub fn parse_interval(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

/// Read a key from window.ENV as a string (numbers are stringified)
fn read_env(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        value
            .as_string()
            .or_else(|| value.as_f64().map(|n| n.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_same_origin_status_endpoint() {
        let config = Config::default();
        assert_eq!(config.api_url, "");
        assert_eq!(config.status_path, "/wall-eno/json-status");
        assert_eq!(config.poll_interval_ms, 6000);
    }

    #[test]
    fn from_env_without_window_uses_defaults() {
        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    fn parse_interval_accepts_positive_millis() {
        assert_eq!(parse_interval("6000"), Some(6000));
        assert_eq!(parse_interval(" 2500 "), Some(2500));
    }

    #[test]
    fn parse_interval_rejects_zero_and_garbage() {
        assert_eq!(parse_interval("0"), None);
        assert_eq!(parse_interval("-5"), None);
        assert_eq!(parse_interval("soon"), None);
        assert_eq!(parse_interval(""), None);
    }
}
