// crates/bunkai/src/config.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::decoder::DecodeMode;
use crate::errors::ConfigError;

/// Upper bound accepted for `engine.max_grouping_len`.
///
/// MeCab itself uses 24; anything beyond this is almost certainly a typo.
pub const MAX_GROUPING_LEN_LIMIT: usize = 1024;

/// Engine option keys accepted by [`BunkaiConfig::from_options`].
pub mod option_keys {
  /// Preset dictionary name
  pub const PRESET: &str = "preset";
  /// Local dictionary file
  pub const DICTIONARY: &str = "dictionary";
  /// Dictionary cache directory
  pub const CACHE_DIR: &str = "cache-dir";
  /// Whether spaces are dropped before analysis
  pub const IGNORE_SPACE: &str = "ignore-space";
  /// Maximum grouping length of unknown words
  pub const MAX_GROUPING_LEN: &str = "max-grouping-len";
  /// Decode mode of the output blob
  pub const DECODE_MODE: &str = "decode-mode";
}

/// Top-level configuration for bunkai.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BunkaiConfig {
  /// [dictionary] section
  #[serde(default)]
  pub dictionary: DictionaryConfig,
  /// [engine] section
  #[serde(default)]
  pub engine: EngineConfig,
  /// [decode] section
  #[serde(default)]
  pub decode: DecodeConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  #[serde(default)]
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// `None` leaves the choice to `DictionaryManager` (OS cache directory).
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
  /// Local dictionary file. Takes precedence over `preset` when set.
  #[serde(default)]
  pub path: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` belongs to vibrato-rkyv and does not implement `Deserialize`
/// (orphan rule), so this enum is the configuration-side twin and converts via `.into()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  Ipadic,
  /// Unidic for written language
  #[default]
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl FromStr for DictionaryPreset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
        s
      )),
    }
  }
}

/// [engine] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
  /// Drop whitespace before analysis (the dictionary must define `SPACE` in char.def)
  #[serde(default)]
  pub ignore_space: bool,
  /// Maximum grouping length of unknown words. 0 means unlimited; 24 matches MeCab.
  #[serde(default)]
  pub max_grouping_len: usize,
}

/// [decode] section configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DecodeConfig {
  /// "lenient" (default) | "strict"
  #[serde(default)]
  pub mode: DecodeMode,
}

/// [logging] section configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

// ===== Loading =====

impl BunkaiConfig {
  /// Parses a JSON document with the same sections as the struct.
  ///
  /// Missing sections fall back to their defaults.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Json(Arc::new(e)))
  }

  /// Loads configuration from environment variables
  ///
  /// | Variable             | Field                 |
  /// |----------------------|-----------------------|
  /// | `BUNKAI_PRESET`      | `dictionary.preset`   |
  /// | `BUNKAI_DICTIONARY`  | `dictionary.path`     |
  /// | `BUNKAI_CACHE_DIR`   | `dictionary.cache_dir`|
  /// | `BUNKAI_DECODE_MODE` | `decode.mode`         |
  /// | `BUNKAI_LOG_LEVEL`   | `logging.level`       |
  ///
  /// # Errors
  /// Returns an error if an environment variable value cannot be parsed
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as [`from_env`](Self::from_env) with an injectable variable source.
  fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(v) = lookup("BUNKAI_PRESET") {
      config.dictionary.preset = parse_value("BUNKAI_PRESET", &v, "ipadic | unidic-cwj | unidic-csj")?;
    }
    if let Some(v) = lookup("BUNKAI_DICTIONARY") {
      config.dictionary.path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("BUNKAI_CACHE_DIR") {
      config.dictionary.cache_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("BUNKAI_DECODE_MODE") {
      config.decode.mode = parse_value("BUNKAI_DECODE_MODE", &v, "lenient | strict")?;
    }
    if let Some(v) = lookup("BUNKAI_LOG_LEVEL") {
      config.logging.level =
        parse_value("BUNKAI_LOG_LEVEL", &v, "trace | debug | info | warn | error")?;
    }

    Ok(config)
  }

  /// Builds a configuration from MeCab-style `key -> value` engine options.
  ///
  /// Recognised keys are listed in [`option_keys`]; any other key is rejected.
  pub fn from_options(options: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    for (key, value) in options {
      match key.as_str() {
        option_keys::PRESET => {
          config.dictionary.preset = parse_value(key, value, "ipadic | unidic-cwj | unidic-csj")?;
        }
        option_keys::DICTIONARY => config.dictionary.path = Some(PathBuf::from(value)),
        option_keys::CACHE_DIR => config.dictionary.cache_dir = Some(PathBuf::from(value)),
        option_keys::IGNORE_SPACE => {
          config.engine.ignore_space = parse_value(key, value, "true | false")?;
        }
        option_keys::MAX_GROUPING_LEN => {
          config.engine.max_grouping_len = parse_value(key, value, "non-negative integer")?;
        }
        option_keys::DECODE_MODE => {
          config.decode.mode = parse_value(key, value, "lenient | strict")?;
        }
        _ => return Err(ConfigError::UnknownOption { key: key.clone() }),
      }
    }

    Ok(config)
  }
}

/// Parses one textual setting, mapping failures to `InvalidOptionValue`.
fn parse_value<T: FromStr>(key: &str, value: &str, expected: &'static str) -> Result<T, ConfigError> {
  value.trim().parse().map_err(|_| ConfigError::InvalidOptionValue {
    key: key.to_string(),
    value: value.to_string(),
    expected,
  })
}

// ===== Accessor Methods =====

impl BunkaiConfig {
  /// Returns the preset dictionary type to pass to DictionaryManager.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.dictionary.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  ///
  /// `None` if unspecified.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.dictionary.cache_dir.as_deref()
  }

  /// Returns the local dictionary file, if one is configured.
  pub fn dictionary_path(&self) -> Option<&Path> {
    self.dictionary.path.as_deref()
  }

  /// Returns the decode mode.
  pub fn decode_mode(&self) -> DecodeMode {
    self.decode.mode
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `engine.max_grouping_len` <= [`MAX_GROUPING_LEN_LIMIT`]
  /// - `dictionary.path` is an existing file (when set)
  /// - `dictionary.cache_dir` exists or can be created (when set)
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.engine.max_grouping_len > MAX_GROUPING_LEN_LIMIT {
      return Err(ConfigError::InvalidMaxGroupingLen {
        max: MAX_GROUPING_LEN_LIMIT,
        actual: self.engine.max_grouping_len,
      });
    }

    if let Some(path) = &self.dictionary.path {
      if !path.is_file() {
        return Err(ConfigError::InvalidDictionaryPath { path: path.clone() });
      }
    }

    // dictionary.cache_dir exists or can be created
    if let Some(cache_dir) = &self.dictionary.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// Implements conversion from DictionaryPreset (for configuration) -> PresetDictionaryKind (for vibrato-rkyv).
impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}
