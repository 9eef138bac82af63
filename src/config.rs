use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::recommend::{PromotionConfig, ShareConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub promotion: PromotionConfig,
    pub share: ShareConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngineConfig::default()
            }
        } else {
            EngineConfig::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok((config, config_path))
    }

    /// Rejects settings the recommenders cannot honour: an empty result list or
    /// a share link that is not an http(s) URL.
    pub fn validate(&self) -> Result<(), String> {
        if self.promotion.max_results == 0 {
            return Err("promotion.max_results must be at least 1".to_string());
        }
        let base_url = self.share.base_url.trim();
        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(format!(
                "share.base_url must be an http(s) URL, got `{}`",
                self.share.base_url
            ));
        }
        Ok(())
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(max_results) = env::var("PROMOTION_MAX_RESULTS") {
            match max_results.trim().parse::<usize>() {
                Ok(value) if value > 0 => self.promotion.max_results = value,
                _ => tracing::warn!(value = %max_results, "ignoring invalid PROMOTION_MAX_RESULTS"),
            }
        }
        if let Ok(base_url) = env::var("SHARE_BASE_URL") {
            if !base_url.trim().is_empty() {
                self.share.base_url = base_url;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("MIXPLAN_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/mixplan.toml")))
}
