use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level configuration for the companion core
#[derive(Debug, Deserialize, Clone)]
pub struct CompanionConfig {
    /// Generative-model provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Path of the JSON file backing persisted settings and favorites
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            store_path: default_store_path(),
        }
    }
}

/// Configuration for the generative-model provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key (can also be set via the GEMINI_API_KEY environment variable)
    pub api_key: Option<String>,
    /// Base URL override for custom or proxy endpoints
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    8192
}

fn default_store_path() -> String {
    "companion-store.json".to_string()
}

impl CompanionConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COMPANION__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COMPANION__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("COMPANION")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
