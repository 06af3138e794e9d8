use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct IntakeConfig {
    /// HTTP fetch settings for URL imports
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Extractors configuration
    #[serde(default)]
    pub extractors: ExtractorsConfig,
}

/// Configuration for fetching recipe pages
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Configuration for HTML recipe extractors
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorsConfig {
    /// Order in which extractors should be tried
    #[serde(default = "default_extractors")]
    pub order: Vec<String>,
}

impl Default for ExtractorsConfig {
    fn default() -> Self {
        Self {
            order: default_extractors(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeIntake/0.3)".to_string()
}

fn default_extractors() -> Vec<String> {
    vec!["json_ld".to_string(), "meta_tags".to_string()]
}

impl IntakeConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_INTAKE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_INTAKE__FETCH__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`IntakeConfig::load`] for the source priority.
pub fn load_config() -> Result<IntakeConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_INTAKE__FETCH__USER_AGENT
        .add_source(
            Environment::with_prefix("RECIPE_INTAKE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
