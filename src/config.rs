//! YAML / JSON configuration files for slug engines.
//!
//! A single file describes one engine and, optionally, the seed list of a
//! unique-slug registry. Files are parsed, validated, then turned into
//! engines with [`SlugkitConfig::build_slugify`] or
//! [`SlugkitConfig::build_unique`].
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Slugkit Configuration
//! version: "1.0"
//! name: "blog posts"
//!
//! slug:
//!   to_lower: true
//!   max_length: 80
//!   separator: "-"
//!   safe_chars: ""
//!   stop_words: ["a", "an", "the"]
//!   transliterate: "deunicode"
//!   pretranslate:
//!     "♥": "love"
//!     "&": "and"
//!
//! unique:
//!   uids: ["hello-world"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use slugcore::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SEPARATOR, SlugError, SlugOptions, Slugify,
    TransliterateKind, UniqueSlugify,
};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when loading configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error(transparent)]
    Configuration(#[from] SlugError),
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SlugkitConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Engine settings
    #[serde(default)]
    pub slug: SlugYamlConfig,

    /// Unique-slug registry settings
    #[serde(default)]
    pub unique: UniqueYamlConfig,
}

impl SlugkitConfig {
    /// Load a configuration file, picking the format from its extension.
    ///
    /// `.json` files are parsed as JSON, everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };
        info!(path = %path.display(), name = ?config.name, "slug_config_loaded");
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SlugkitConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON configuration from a string
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let config: SlugkitConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(error = %err, name = ?self.name, "slug_config_rejected");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.slug.validate()?;
        Ok(())
    }

    /// Engine described by the `slug` section.
    pub fn build_slugify(&self) -> Result<Slugify, ConfigLoadError> {
        let options = self.slug.to_options()?;
        Ok(Slugify::from_options(&options)?)
    }

    /// Engine plus a registry seeded with `unique.uids`.
    pub fn build_unique(&self) -> Result<UniqueSlugify, ConfigLoadError> {
        let engine = self.build_slugify()?;
        Ok(UniqueSlugify::with_uids(engine, self.unique.uids.iter().cloned()))
    }
}

impl Default for SlugkitConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            slug: SlugYamlConfig::default(),
            unique: UniqueYamlConfig::default(),
        }
    }
}

/// Engine section of the configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugYamlConfig {
    #[serde(default)]
    pub safe_chars: String,

    #[serde(default)]
    pub stop_words: Vec<String>,

    #[serde(default)]
    pub to_lower: bool,

    #[serde(default = "default_max_length")]
    pub max_length: usize,

    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default)]
    pub capitalize: bool,

    #[serde(default)]
    pub extract_phrase: bool,

    #[serde(default)]
    pub truncate_words: bool,

    /// Kept raw so a malformed table is reported as a configuration error
    /// rather than a parse error.
    #[serde(default)]
    pub pretranslate: Value,

    #[serde(default)]
    pub transliterate: TransliterateKind,
}

impl SlugYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.pretranslate_table()?;
        Ok(())
    }

    fn pretranslate_table(&self) -> Result<BTreeMap<String, String>, SlugError> {
        let invalid = || {
            SlugError::Configuration(
                "slug.pretranslate must be a mapping of strings to strings".to_string(),
            )
        };
        match &self.pretranslate {
            Value::Null => Ok(BTreeMap::new()),
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| match value {
                    Value::String(s) => Ok((key.clone(), s.clone())),
                    _ => Err(invalid()),
                })
                .collect(),
            _ => Err(invalid()),
        }
    }

    /// The plain-data engine options this section describes.
    pub fn to_options(&self) -> Result<SlugOptions, ConfigLoadError> {
        Ok(SlugOptions {
            safe_chars: self.safe_chars.clone(),
            stop_words: self.stop_words.clone(),
            to_lower: self.to_lower,
            max_length: self.max_length,
            min_length: self.min_length,
            separator: self.separator.clone(),
            capitalize: self.capitalize,
            extract_phrase: self.extract_phrase,
            truncate_words: self.truncate_words,
            pretranslate: self.pretranslate_table()?,
            transliterate: self.transliterate,
        })
    }
}

impl Default for SlugYamlConfig {
    fn default() -> Self {
        Self {
            safe_chars: String::new(),
            stop_words: vec![],
            to_lower: false,
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            separator: DEFAULT_SEPARATOR.to_string(),
            capitalize: false,
            extract_phrase: false,
            truncate_words: false,
            pretranslate: Value::Null,
            transliterate: TransliterateKind::default(),
        }
    }
}

/// Unique-slug registry section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniqueYamlConfig {
    /// Slugs treated as already issued.
    #[serde(default)]
    pub uids: Vec<String>,
}

// Helper functions for serde defaults
fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}
fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}
fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
slug:
  to_lower: true
  stop_words: ["a", "the"]
  max_length: 80
"#;

        let config = SlugkitConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert!(config.slug.to_lower);
        assert_eq!(config.slug.max_length, 80);
        assert_eq!(config.slug.separator, "-");

        let engine = config.build_slugify().unwrap();
        assert_eq!(engine.slugify("The Red Apple"), "red-apple");
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
slug:
  separator: "_"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = SlugkitConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.slug.separator, "_");
    }

    #[test]
    fn test_load_json_by_extension() {
        let json = r#"{
            "version": "1.0",
            "slug": {"capitalize": true},
            "unique": {"uids": ["Hello-world"]}
        }"#;

        let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(json.as_bytes()).unwrap();

        let config = SlugkitConfig::from_file(temp_file.path()).unwrap();
        let unique = config.build_unique().unwrap();
        assert_eq!(unique.generate("hello world"), "Hello-world-1");
    }

    #[test]
    fn test_default_config() {
        let config = SlugkitConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.slug.to_options().unwrap(), SlugOptions::default());
    }

    #[test]
    fn test_version_validation() {
        let result = SlugkitConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_empty_separator_loads() {
        let yaml = r#"
version: "1.0"
slug:
  separator: ""
"#;

        let config = SlugkitConfig::from_yaml(yaml).unwrap();
        let engine = config.build_slugify().unwrap();
        assert_eq!(engine.slugify("a b c"), "abc");
    }

    #[test]
    fn test_max_length_below_default_min_length_loads() {
        let yaml = r#"
version: "1.0"
slug:
  max_length: 10
"#;
        let config = SlugkitConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.slug.min_length, DEFAULT_MIN_LENGTH);

        let engine = config.build_slugify().unwrap();
        assert_eq!(engine.slugify("one two three four"), "one-two");
    }

    #[test]
    fn test_pretranslate_must_be_a_mapping() {
        let yaml = r#"
version: "1.0"
slug:
  pretranslate: ["not", "a", "mapping"]
"#;
        let result = SlugkitConfig::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(ConfigLoadError::Configuration(SlugError::Configuration(_)))
        ));

        let nested = r#"
version: "1.0"
slug:
  pretranslate:
    "a": 1
"#;
        assert!(matches!(
            SlugkitConfig::from_yaml(nested),
            Err(ConfigLoadError::Configuration(_))
        ));
    }

    #[test]
    fn test_pretranslate_null_is_identity() {
        let yaml = r#"
version: "1.0"
slug:
  pretranslate: ~
"#;
        let config = SlugkitConfig::from_yaml(yaml).unwrap();
        assert!(config.slug.to_options().unwrap().pretranslate.is_empty());
    }

    #[test]
    fn test_empty_pretranslate_key_fails_at_build() {
        let yaml = r#"
version: "1.0"
slug:
  pretranslate:
    "": "x"
"#;
        let config = SlugkitConfig::from_yaml(yaml).unwrap();
        assert!(matches!(
            config.build_slugify(),
            Err(ConfigLoadError::Configuration(_))
        ));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let yaml = r#"
version: "1.0"
name: "production"
slug:
  safe_chars: "_"
  stop_words: ["a", "an", "the"]
  to_lower: true
  max_length: 80
  min_length: 25
  separator: "-"
  capitalize: false
  extract_phrase: false
  truncate_words: false
  transliterate: "ascii_fold"
  pretranslate:
    "♥": "love"
    "&": "and"

unique:
  uids: ["rock-and-roll"]
"#;

        let config = SlugkitConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.slug.transliterate, TransliterateKind::AsciiFold);
        assert_eq!(config.unique.uids, vec!["rock-and-roll".to_string()]);

        let unique = config.build_unique().unwrap();
        assert_eq!(unique.generate("Rock & Roll"), "rock-and-roll-1");
        assert_eq!(unique.generate("I ♥ snake_case"), "i-love-snake_case");
    }
}
