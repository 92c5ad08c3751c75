use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_timestamp_formats")]
    pub timestamp_formats: Vec<String>,
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_input_dir() -> String {
    "data/raw".to_string()
}
fn default_output_file() -> String {
    "data/processed/clean_data.csv".to_string()
}
fn default_separator_char() -> String {
    ";".to_string()
}
fn default_timestamp_formats() -> Vec<String> {
    vec![
        "%Y-%m-%d %H:%M:%S".to_string(),
        "%Y-%m-%d %H:%M".to_string(),
        "%Y-%m-%dT%H:%M:%S".to_string(),
    ]
}
fn default_format() -> String {
    "csv".to_string()
}

/// Keys every configuration file is expected to carry.
const KNOWN_KEYS: [&str; 5] = [
    "input_dir",
    "output_file",
    "separator_char",
    "timestamp_formats",
    "default_format",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_file: default_output_file(),
            separator_char: default_separator_char(),
            timestamp_formats: default_timestamp_formats(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rshoptrace")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rshoptrace")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshoptrace.conf")
    }

    /// Load configuration from `path`, or defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| {
            log::error!("cannot parse {}: {}", path.display(), e);
            AppError::ConfigLoad
        })
    }

    /// Single-byte column separator for the csv reader.
    pub fn separator(&self) -> AppResult<u8> {
        match self.separator_char.as_bytes() {
            [b] => Ok(*b),
            _ => Err(AppError::Config(format!(
                "separator_char must be a single ASCII character, got {:?}",
                self.separator_char
            ))),
        }
    }

    /// Write the default configuration file (unless in test mode).
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<Config> {
        let config = Config::default();

        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        }

        Ok(config)
    }

    /// Keys missing from the file at `path`. An absent file misses nothing:
    /// the defaults apply as a whole.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: Value = serde_yaml::from_str(&content)?;

        let missing = match yaml.as_mapping() {
            Some(map) => KNOWN_KEYS
                .iter()
                .copied()
                .filter(|k| !map.contains_key(Value::String(k.to_string())))
                .collect(),
            None => KNOWN_KEYS.to_vec(),
        };

        Ok(missing)
    }
}
