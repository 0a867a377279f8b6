use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::ThemeMode;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub ads: AdsConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Where release metadata and artifacts come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the release-listing API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Host serving release pages and artifacts
    #[serde(default = "default_release_host")]
    pub release_host: String,
    /// Repository owner
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Browser repository
    #[serde(default = "default_repo")]
    pub repo: String,
    /// Repository publishing the portable build
    #[serde(default = "default_portable_repo")]
    pub portable_repo: String,
    /// Override for the environment string used in platform detection
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            release_host: default_release_host(),
            owner: default_owner(),
            repo: default_repo(),
            portable_repo: default_portable_repo(),
            user_agent: None,
        }
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_release_host() -> String {
    "https://github.com".to_string()
}

fn default_owner() -> String {
    "Floorp-Projects".to_string()
}

fn default_repo() -> String {
    "Floorp".to_string()
}

fn default_portable_repo() -> String {
    "Floorp-Portable-v2".to_string()
}

/// How ad units behave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdMode {
    /// Placeholder in debug builds, live in release builds
    #[default]
    Auto,
    Live,
    Placeholder,
}

impl AdMode {
    /// Whether ad units may contact the ad network
    pub fn is_live(&self) -> bool {
        match self {
            AdMode::Auto => !cfg!(debug_assertions),
            AdMode::Live => true,
            AdMode::Placeholder => false,
        }
    }
}

/// Ad placements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdsConfig {
    #[serde(default)]
    pub mode: AdMode,
    /// Publisher client identifier
    #[serde(default = "default_ad_client")]
    pub client: String,
    /// Slot below the main content of every page
    #[serde(default = "default_shell_slot")]
    pub shell_slot: String,
    /// Slot above the countdown
    #[serde(default = "default_modal_top_slot")]
    pub modal_top_slot: String,
    /// Slot below the countdown
    #[serde(default = "default_modal_bottom_slot")]
    pub modal_bottom_slot: String,
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self {
            mode: AdMode::default(),
            client: default_ad_client(),
            shell_slot: default_shell_slot(),
            modal_top_slot: default_modal_top_slot(),
            modal_bottom_slot: default_modal_bottom_slot(),
        }
    }
}

fn default_ad_client() -> String {
    "ca-pub-9988710026850454".to_string()
}

fn default_shell_slot() -> String {
    "7741827366".to_string()
}

fn default_modal_top_slot() -> String {
    "7741827366".to_string()
}

fn default_modal_bottom_slot() -> String {
    "9350244892".to_string()
}

/// Appearance settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Theme at startup
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("app", "floorp", "FloorpPortal")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}
