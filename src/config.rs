use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "https://ow.blizzard.cn/news/patch-notes/live";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub patch_notes_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("HERO_TRENDS_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        if data_dir.is_empty() {
            return Err(AppError::ConfigError(
                "HERO_TRENDS_DATA_DIR is set but empty".to_string(),
            ));
        }

        let patch_notes_base_url =
            env::var("PATCH_NOTES_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            patch_notes_base_url,
        })
    }

    pub fn patch_store_path(&self) -> PathBuf {
        self.data_dir.join("patch_notes.json")
    }

    pub fn daily_dir(&self) -> PathBuf {
        self.data_dir.join("daily")
    }

    pub fn merged_data_path(&self) -> PathBuf {
        self.data_dir.join("merged_data.json")
    }

    pub fn hero_table_path(&self) -> PathBuf {
        self.data_dir.join("hero_names.json")
    }
}
