//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    // === Default Brand ===
    /// Name of the brand seeded into the registry at startup.
    #[serde(default = "default_brand_name")]
    pub default_brand_name: String,

    /// Industry of the seeded brand.
    #[serde(default = "default_industry")]
    pub default_industry: String,

    /// Voice of the seeded brand.
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Target audience of the seeded brand.
    #[serde(default = "default_audience")]
    pub default_audience: String,

    // === Generation Limits ===
    /// Minimum slides per carousel.
    #[serde(default = "default_min_slides")]
    pub min_slides: usize,

    /// Maximum slides per carousel.
    #[serde(default = "default_max_slides")]
    pub max_slides: usize,

    /// Maximum hashtag sets per request.
    #[serde(default = "default_max_hashtag_sets")]
    pub max_hashtag_sets: usize,

    /// Maximum calendar length in weeks.
    #[serde(default = "default_max_weeks")]
    pub max_calendar_weeks: u32,

    /// Maximum posts per week in a calendar.
    #[serde(default = "default_max_posts_per_week")]
    pub max_posts_per_week: u32,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_brand_name() -> String {
    "Default Brand".to_string()
}

fn default_industry() -> String {
    "ecommerce".to_string()
}

fn default_voice() -> String {
    "friendly".to_string()
}

fn default_audience() -> String {
    "Millennials and Gen Z shoppers".to_string()
}

fn default_min_slides() -> usize {
    5
}

fn default_max_slides() -> usize {
    10
}

fn default_max_hashtag_sets() -> usize {
    10
}

fn default_max_weeks() -> u32 {
    12
}

fn default_max_posts_per_week() -> u32 {
    7
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_slides < 2 {
            return Err("MIN_SLIDES must be at least 2".to_string());
        }

        if self.max_slides < self.min_slides {
            return Err("MAX_SLIDES must be >= MIN_SLIDES".to_string());
        }

        if self.max_hashtag_sets == 0 {
            return Err("MAX_HASHTAG_SETS must be at least 1".to_string());
        }

        if self.max_calendar_weeks == 0 {
            return Err("MAX_CALENDAR_WEEKS must be at least 1".to_string());
        }

        if self.max_posts_per_week == 0 || self.max_posts_per_week > 7 {
            return Err("MAX_POSTS_PER_WEEK must be between 1 and 7".to_string());
        }

        if self.default_brand_name.trim().is_empty() {
            return Err("DEFAULT_BRAND_NAME must not be empty".to_string());
        }

        Ok(())
    }

    /// Clamp a requested slide count into the configured range.
    pub fn clamp_slides(&self, requested: usize) -> usize {
        requested.clamp(self.min_slides, self.max_slides)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
            default_brand_name: default_brand_name(),
            default_industry: default_industry(),
            default_voice: default_voice(),
            default_audience: default_audience(),
            min_slides: default_min_slides(),
            max_slides: default_max_slides(),
            max_hashtag_sets: default_max_hashtag_sets(),
            max_calendar_weeks: default_max_weeks(),
            max_posts_per_week: default_max_posts_per_week(),
        }
    }
}
