use dioxus::prelude::*;
use serde::Deserialize;

use crate::theme::Theme;
use crate::typing::default_roles;

pub const DEFAULT_OWNER_NAME: &str = "Alex Morgan";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub owner_name: String,
    pub typing_roles: Vec<String>,
    pub default_theme: Theme,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            owner_name: DEFAULT_OWNER_NAME.to_string(),
            typing_roles: default_roles(),
            default_theme: Theme::default(),
        }
    }
}

impl RuntimeConfig {
    /// Drops blank entries and restores defaults for anything left empty.
    pub fn normalized(mut self) -> Self {
        self.owner_name = self.owner_name.trim().to_string();
        if self.owner_name.is_empty() {
            self.owner_name = DEFAULT_OWNER_NAME.to_string();
        }
        self.typing_roles = self
            .typing_roles
            .into_iter()
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
            .collect();
        if self.typing_roles.is_empty() {
            self.typing_roles = default_roles();
        }
        self
    }
}

pub fn use_runtime_config() -> Resource<Result<RuntimeConfig, String>> {
    use_resource(|| async move { fetch_runtime_config().await.map(RuntimeConfig::normalized) })
}

/// Deployed overrides first, then the copy bundled with the assets.
#[cfg(target_arch = "wasm32")]
const CONFIG_PATHS: [&str; 2] = ["/config.json", "/assets/config.json"];

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let mut last_error = String::from("no config location");
    for path in CONFIG_PATHS {
        match load_portfolio_config(path).await {
            Ok(config) => {
                tracing::debug!("config: loaded {path}");
                return Ok(config);
            }
            Err(err) => {
                tracing::debug!("config: {path}: {err}");
                last_error = err;
            }
        }
    }
    Err(last_error)
}

#[cfg(target_arch = "wasm32")]
async fn load_portfolio_config(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("request failed: {err}"))?;
    match response.status() {
        200..=299 => response
            .json::<RuntimeConfig>()
            .await
            .map_err(|err| format!("invalid portfolio config: {err}")),
        status => Err(format!("unexpected status {status}")),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let mut config = RuntimeConfig::default();
    if let Ok(owner_name) = std::env::var("PORTFOLIO_OWNER_NAME") {
        config.owner_name = owner_name;
    }
    if let Ok(theme) = std::env::var("PORTFOLIO_DEFAULT_THEME") {
        config.default_theme = theme.parse()?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.default_theme, Theme::Light);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"default_theme":"dark","owner_name":"Sam"}"#).unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.owner_name, "Sam");
        assert_eq!(config.typing_roles, default_roles());
    }

    #[test]
    fn unknown_theme_is_a_decode_error() {
        assert!(serde_json::from_str::<RuntimeConfig>(r#"{"default_theme":"sepia"}"#).is_err());
    }

    #[test]
    fn normalization_drops_blank_roles() {
        let config = RuntimeConfig {
            owner_name: "  Sam ".to_string(),
            typing_roles: vec![" Rustacean ".to_string(), "   ".to_string()],
            default_theme: Theme::Dark,
        }
        .normalized();
        assert_eq!(config.owner_name, "Sam");
        assert_eq!(config.typing_roles, vec!["Rustacean".to_string()]);
    }

    #[test]
    fn normalization_restores_defaults_for_empty_values() {
        let config = RuntimeConfig {
            owner_name: String::new(),
            typing_roles: Vec::new(),
            default_theme: Theme::Light,
        }
        .normalized();
        assert_eq!(config, RuntimeConfig::default());
    }
}
