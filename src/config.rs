use crate::error::{AnalyzerError, Result};
use resume_analyzer_common::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "RESUME_ANALYZER_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    /// リクエストのタイムアウト秒（未設定ならタイムアウトなし）
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AnalyzerError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("resume-analyzer").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: None,
        }
    }

    /// 使用するエンドポイント（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> String {
        let env = std::env::var(ENDPOINT_ENV).ok();
        pick_endpoint(flag, env.as_deref(), &self.endpoint)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        validate_endpoint(&endpoint)?;
        self.endpoint = endpoint;
        self.save()
    }
}

pub fn pick_endpoint(flag: Option<&str>, env: Option<&str>, file: &str) -> String {
    flag.filter(|s| !s.is_empty())
        .or(env.filter(|s| !s.is_empty()))
        .unwrap_or(file)
        .to_string()
}

pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(AnalyzerError::Config(format!(
            "endpoint must start with http:// or https://: {}",
            endpoint
        )))
    }
}
