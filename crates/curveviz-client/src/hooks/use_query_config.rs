//! Read-only configuration overrides from the page query string.

use std::rc::Rc;

use curveviz_core::{AmbientConfig, DemoConfig};
use yew::prelude::*;

/// Widget configuration resolved once at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub ambient: AmbientConfig,
    pub demo: DemoConfig,
    /// Seed for the hero animation.
    pub seed: u64,
}

fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key)
}

fn config_param<T>(key: &str, parse: impl Fn(&str) -> Result<T, curveviz_core::ConfigError>) -> T
where
    T: Default,
{
    let Some(raw) = query_param(key) else {
        return T::default();
    };
    parse(&raw).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "ignoring config override, using defaults");
        T::default()
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_param() -> u64 {
    query_param("seed")
        .and_then(|raw| match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(raw = %raw, error = %e, "ignoring invalid seed");
                None
            }
        })
        .unwrap_or_else(|| js_sys::Date::now() as u64)
}

/// Reads `?ambient=<json>`, `?demo=<json>` and `?seed=<u64>`.
///
/// Missing or invalid values fall back to defaults. Nothing is written back
/// to the URL.
#[hook]
pub fn use_query_config() -> Rc<QueryConfig> {
    use_memo((), |_| {
        let config = QueryConfig {
            ambient: config_param("ambient", AmbientConfig::from_json),
            demo: config_param("demo", DemoConfig::from_json),
            seed: seed_param(),
        };
        tracing::info!(seed = config.seed, "widget config resolved");
        config
    })
}
