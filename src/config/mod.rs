use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Every key a complete configuration file carries.
pub const KNOWN_KEYS: [&str; 3] = ["data_file", "refresh_millis", "log_level"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_refresh_millis")]
    pub refresh_millis: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    Config::data_file_default().to_string_lossy().to_string()
}
fn default_refresh_millis() -> u64 {
    200
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            refresh_millis: default_refresh_millis(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdowntime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdowntime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdowntime.conf")
    }

    /// Return the default path of the event log
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("data.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(AppError::Config("data_file must not be empty".into()));
        }
        if self.refresh_millis == 0 {
            return Err(AppError::Config(
                "refresh_millis must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Keys from `KNOWN_KEYS` absent from the YAML text (filled by defaults
    /// on load, but worth reporting).
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        let map = value.as_mapping();
        Ok(KNOWN_KEYS
            .into_iter()
            .filter(|k| {
                map.map(|m| !m.contains_key(*k))
                    .unwrap_or(true)
            })
            .collect())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_millis)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Turn a user-supplied log path into the path every command uses:
    /// `~` is expanded and a relative path is taken from the current directory.
    pub fn resolve_data_file(raw: &str) -> PathBuf {
        let p = expand_tilde(raw);
        if p.is_absolute() {
            return p;
        }
        match env::current_dir() {
            Ok(cwd) => cwd.join(p),
            Err(_) => p,
        }
    }

    /// Initialize configuration directory, config file and the data directory.
    /// Returns the configuration that was (or would have been) written.
    /// In test mode nothing is written to disk.
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let data_path = match custom_file {
            Some(name) => Self::resolve_data_file(&name),
            None => Self::data_file_default(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if is_test {
            return Ok(config);
        }

        config.save()?;
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
