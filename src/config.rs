use crate::app_dirs::AppDirs;
use crate::question::{Category, Difficulty};
use crate::session::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Saved preferences used as defaults for new sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub user_name: String,
    pub categories: Vec<Category>,
    pub difficulty: Difficulty,
    pub number_of_questions: usize,
    pub number_of_secs: u32,
    pub shuffle: bool,
    pub skip_repeats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: std::env::var("USER").unwrap_or_else(|_| "player".to_string()),
            categories: Category::ALL.to_vec(),
            difficulty: Difficulty::Easy,
            number_of_questions: 10,
            number_of_secs: 10,
            shuffle: true,
            skip_repeats: false,
        }
    }
}

impl From<&Config> for SessionConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            user_name: cfg.user_name.clone(),
            categories: cfg.categories.iter().copied().collect(),
            difficulty: cfg.difficulty,
            number_of_questions: cfg.number_of_questions,
            number_of_secs: cfg.number_of_secs,
            shuffle: cfg.shuffle,
            skip_repeats: cfg.skip_repeats,
        }
    }
}

impl From<&SessionConfig> for Config {
    fn from(sc: &SessionConfig) -> Self {
        Self {
            user_name: sc.user_name.clone(),
            categories: sc.categories.iter().copied().collect(),
            difficulty: sc.difficulty,
            number_of_questions: sc.number_of_questions,
            number_of_secs: sc.number_of_secs,
            shuffle: sc.shuffle,
            skip_repeats: sc.skip_repeats,
        }
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
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
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
                return cfg;
            }
            tracing::debug!(path = %self.path.display(), "ignoring unreadable config");
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            user_name: "grace".into(),
            categories: vec![Category::Division, Category::SeriesCompletion],
            difficulty: Difficulty::Hard,
            number_of_questions: 25,
            number_of_secs: 15,
            shuffle: false,
            skip_repeats: true,
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{"difficulty": "medium", "number_of_secs": 30}"#).unwrap();
        let loaded = FileConfigStore::with_path(&path).load();
        assert_eq!(loaded.difficulty, Difficulty::Medium);
        assert_eq!(loaded.number_of_secs, 30);
        assert_eq!(loaded.number_of_questions, 10);
        assert_eq!(loaded.categories, Category::ALL.to_vec());
    }

    #[test]
    fn converts_to_session_config() {
        let cfg = Config {
            user_name: "ada".into(),
            categories: vec![Category::Addition, Category::Addition],
            ..Config::default()
        };
        let session = SessionConfig::from(&cfg);
        assert_eq!(session.categories.len(), 1);
        assert_eq!(session.user_name, "ada");
        assert!(session.validate().is_ok());
        assert_eq!(Config::from(&session).categories, vec![Category::Addition]);
    }
}
