use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::ScoringWeights;
use crate::services::SummarizerOptions;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub summarizer: SummarizerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Where candidates come from; the bundled dataset when no path is set
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    /// TOML policy document; the built-in policy when unset
    pub policy_path: Option<String>,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            policy_path: None,
            max_limit: default_max_limit(),
        }
    }
}

fn default_max_limit() -> u16 { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_tag_weight")]
    pub tag: u32,
    #[serde(default = "default_specialization_weight")]
    pub specialization: u32,
    #[serde(default = "default_title_weight")]
    pub title: u32,
    #[serde(default = "default_keyword_weight")]
    pub keyword: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            tag: default_tag_weight(),
            specialization: default_specialization_weight(),
            title: default_title_weight(),
            keyword: default_keyword_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            tag: config.tag,
            specialization: config.specialization,
            title: config.title,
            keyword: config.keyword,
        }
    }
}

fn default_tag_weight() -> u32 { 30 }
fn default_specialization_weight() -> u32 { 15 }
fn default_title_weight() -> u32 { 10 }
fn default_keyword_weight() -> u32 { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerSettings {
    #[serde(default = "default_summarizer_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    #[serde(default = "default_summarizer_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            endpoint: default_summarizer_endpoint(),
            api_key: None,
            model: default_summarizer_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl From<&SummarizerSettings> for SummarizerOptions {
    fn from(settings: &SummarizerSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            timeout_secs: settings.timeout_secs,
        }
    }
}

fn default_summarizer_endpoint() -> String { "https://ai.gateway.lovable.dev/v1".to_string() }
fn default_summarizer_model() -> String { "google/gemini-2.5-flash".to_string() }
fn default_temperature() -> f32 { 0.7 }
fn default_max_tokens() -> u32 { 800 }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CURALINK__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CURALINK__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CURALINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }
}

/// Pick up the gateway key from the variable the hosting platform exports
/// when none was configured explicitly
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    if settings.get_string("summarizer.api_key").is_ok() {
        return Ok(settings);
    }

    match env::var("AI_GATEWAY_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("summarizer.api_key", api_key)?
            .build(),
        _ => Ok(settings),
    }
}
