use crate::core::summary::{HOURLY_RATE, NET_RATE_FACTOR, PayRate};
use crate::errors::{AppError, AppResult};
use crate::models::SemesterFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    #[serde(default = "default_net_rate_factor")]
    pub net_rate_factor: f64,
    /// Semester filter used by `list`, `summary` and `export` when none is given.
    #[serde(default = "default_semester")]
    pub default_semester: String,
}

fn default_hourly_rate() -> f64 {
    HOURLY_RATE
}
fn default_net_rate_factor() -> f64 {
    NET_RATE_FACTOR
}
fn default_semester() -> String {
    "all".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            hourly_rate: default_hourly_rate(),
            net_rate_factor: default_net_rate_factor(),
            default_semester: default_semester(),
        }
    }
}

impl Config {
    /// `~/.huskyhours`, or `./.huskyhours` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".huskyhours")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("huskyhours.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("huskyhours.sqlite")
    }

    /// Load the configuration file, or defaults when there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn pay_rate(&self) -> PayRate {
        PayRate {
            hourly_rate: self.hourly_rate,
            net_rate_factor: self.net_rate_factor,
        }
    }

    /// Explicit `--semester` value, else the configured default.
    pub fn semester_filter(&self, requested: Option<&str>) -> AppResult<SemesterFilter> {
        let raw = requested.unwrap_or(self.default_semester.as_str());
        raw.parse().map_err(AppError::InvalidSemester)
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// an empty database file. Returns the configuration written.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
