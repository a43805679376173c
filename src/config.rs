use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FinderConfig {
    /// Search behaviour shared by every source
    #[serde(default)]
    pub search: SearchConfig,
    /// Remote recipe API settings
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Speech engine settings
    #[serde(default)]
    pub voice: VoiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Recipe source to query: "sample" or "remote"
    #[serde(default = "default_source")]
    pub source: String,
    /// Upper bound for one search in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of result cards shown at once
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Artificial delay before answering from the sample set, in milliseconds
    #[serde(default = "default_sample_latency_ms")]
    pub sample_latency_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            timeout: default_timeout(),
            max_results: default_max_results(),
            sample_latency_ms: default_sample_latency_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    /// API key (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Base URL of the recipe API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of candidates requested from the ingredient search
    #[serde(default = "default_number")]
    pub number: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            number: default_number(),
        }
    }
}

impl RemoteConfig {
    /// API key from config, falling back to the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VoiceConfig {
    /// BCP 47 language tag handed to the speech engine
    #[serde(default = "default_language")]
    pub language: String,
    /// Keep listening across pauses
    #[serde(default = "default_true")]
    pub continuous: bool,
    /// Report partial transcripts while the user is speaking
    #[serde(default = "default_true")]
    pub interim_results: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            continuous: true,
            interim_results: true,
        }
    }
}

// Default value functions
fn default_source() -> String {
    "sample".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_results() -> usize {
    5
}

fn default_sample_latency_ms() -> u64 {
    800
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_number() -> u32 {
    5
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_true() -> bool {
    true
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__REMOTE__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the lookup order.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Use double underscore for nested: RECIPE_FINDER__SEARCH__SOURCE
fn environment() -> Environment {
    Environment::with_prefix("RECIPE_FINDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
