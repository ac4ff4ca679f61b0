use serde::Deserialize;
use std::time::Duration;

use crate::shared::local_storage;

/// localStorage key holding an optional TOML override document
pub const CONFIG_STORAGE_KEY: &str = "app_config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub navigation: NavigationConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub inactivity_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout_secs: 15 * 60,
        }
    }
}

impl SessionConfig {
    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub fallback_timeout_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            fallback_timeout_ms: 5000,
        }
    }
}

impl NavigationConfig {
    pub fn fallback_timeout(&self) -> Duration {
        Duration::from_millis(self.fallback_timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub auto_dismiss_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Zero durations would sign the user out or drop overlays immediately;
    /// they are reset to the defaults.
    fn sanitized(mut self) -> Self {
        let defaults = AppConfig::default();
        if self.session.inactivity_timeout_secs == 0 {
            log::warn!("session.inactivity_timeout_secs = 0 ignored");
            self.session = defaults.session;
        }
        if self.navigation.fallback_timeout_ms == 0 {
            log::warn!("navigation.fallback_timeout_ms = 0 ignored");
            self.navigation = defaults.navigation;
        }
        self
    }
}

/// Parse configuration.
///
/// Defaults come from the `Default` impls only. `override_toml` replaces
/// them key by key; keys it does not mention keep their default values.
pub fn load_config(override_toml: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let config: AppConfig = match override_toml {
        Some(src) if !src.trim().is_empty() => toml::from_str(src)?,
        _ => AppConfig::default(),
    };
    Ok(config.sanitized())
}

/// Configuration for the running app: defaults plus the
/// `app_config` override from localStorage, if any
pub fn load_browser_config() -> AppConfig {
    let stored = local_storage::read_item(CONFIG_STORAGE_KEY);
    if stored.is_some() {
        log::info!("Loading config override from localStorage[{}]", CONFIG_STORAGE_KEY);
    }
    match load_config(stored.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Invalid config override, using defaults: {}", err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.inactivity_timeout(), Duration::from_secs(900));
        assert_eq!(config.navigation.fallback_timeout(), Duration::from_millis(5000));
        assert_eq!(config.notifications.auto_dismiss_ms, 5000);
    }

    #[test]
    fn test_empty_tables_match_defaults() {
        let config = load_config(Some("[session]\n[navigation]\n[notifications]\n")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            load_config(Some("# nothing overridden\n")).unwrap(),
            load_config(None).unwrap()
        );
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some("[session]\ninactivity_timeout_secs = 60\n")).unwrap();
        assert_eq!(config.session.inactivity_timeout(), Duration::from_secs(60));
        assert_eq!(config.navigation, NavigationConfig::default());
        assert_eq!(config.notifications, NotificationsConfig::default());
    }

    #[test]
    fn test_blank_override_uses_defaults() {
        assert_eq!(load_config(Some("   ")).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_zero_durations_are_reset() {
        let config = load_config(Some(
            "[session]\ninactivity_timeout_secs = 0\n[navigation]\nfallback_timeout_ms = 0\n",
        ))
        .unwrap();
        assert_eq!(config.session, SessionConfig::default());
        assert_eq!(config.navigation, NavigationConfig::default());
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(load_config(Some("[session\ninactivity_timeout_secs = ")).is_err());
        assert!(load_config(Some("[session]\ninactivity_timeout_secs = \"soon\"\n")).is_err());
    }
}
