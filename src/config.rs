use serde::Deserialize;

use crate::core::naming::vocabulary;
use crate::utils::SceneResult;

const VOCABULARY_LIST_KEYS: [&str; 5] = [
    "vocabulary.encoding",
    "vocabulary.movie_source",
    "vocabulary.tv_source",
    "vocabulary.ebook_source",
    "vocabulary.tags",
];

impl Config {

    pub fn init() -> SceneResult<Self> {
        // get config toml dir from env, with default
        let config_path = std::env::var("SCENE_EXTRACTOR_CONFIG_PATH")
            .unwrap_or_else(|_| String::from("./config.toml"));

        let mut environment = config::Environment::with_prefix("SCENE_EXTRACTOR")
            .separator("__")
            .try_parsing(true)
            .list_separator(",");
        for key in VOCABULARY_LIST_KEYS {
            environment = environment.with_list_parse_key(key);
        }

        let config = config::Config::builder()
            // Config file is optional, every field has a default
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of SCENE_EXTRACTOR)
            .add_source(environment)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String { "info".to_string() }

// ===============================================================================
// Extract
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Root directory releases are extracted under.
    #[serde(default = "default_extract_base")]
    pub base: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { base: default_extract_base() }
    }
}

fn default_extract_base() -> String { "To Watch".to_string() }

// ===============================================================================
// Vocabulary
// ===============================================================================

/// Recognized tags per category, in lookup order. Any list left out falls back to the built-in set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub encoding: Vec<String>,
    pub movie_source: Vec<String>,
    pub tv_source: Vec<String>,
    pub ebook_source: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            encoding: owned(vocabulary::ENCODINGS),
            movie_source: owned(vocabulary::MOVIE_SOURCES),
            tv_source: owned(vocabulary::TV_SOURCES),
            ebook_source: owned(vocabulary::EBOOK_SOURCES),
            tags: owned(vocabulary::TAGS),
        }
    }
}
