use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::face::Rgb;

pub const DEFAULT_DURATION_SECS: u64 = 360;

/// Visual theme of the remaining-time pie.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Red,
    Yellow,
    Blue,
    Green,
}

impl Appearance {
    pub fn fill_color(self) -> Rgb {
        match self {
            Appearance::Red => Rgb(230, 57, 70),
            Appearance::Yellow => Rgb(244, 211, 94),
            Appearance::Blue => Rgb(69, 123, 157),
            Appearance::Green => Rgb(82, 183, 136),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub duration_secs: u64,
    pub appearance: Appearance,
    pub show_labels: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            appearance: Appearance::Red,
            show_labels: true,
        }
    }
}

impl Config {
    pub fn hours(&self) -> u64 {
        self.duration_secs / 60 / 60
    }

    pub fn minutes(&self) -> u64 {
        (self.duration_secs / 60) % 60
    }

    pub fn seconds(&self) -> u64 {
        self.duration_secs % 60
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "klok") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("klok_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                // a zero duration can't drive a countdown
                if cfg.duration_secs > 0 {
                    return cfg;
                }
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
