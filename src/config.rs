//! 設定
//!
//! `~/.docfilter/config.toml` から読み込む。ファイルがなければ既定値。
//!
//! ```toml
//! locale = "de-DE"
//! debounce_ms = 400
//! ```
//!
//! ロケールの優先順位: CLI 引数 > `DOCFILTER_LOCALE` > 設定ファイル > `LANG` > `en-US`

use crate::date::normalize_locale_tag;
use crate::debounce::DEFAULT_DELAY;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const LOCALE_ENV: &str = "DOCFILTER_LOCALE";
pub const FALLBACK_LOCALE: &str = "en-US";

/// 設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 日付表示に使うロケール
    pub locale: Option<String>,
    /// 手入力のデバウンス時間（ミリ秒）
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: None,
            debounce_ms: DEFAULT_DELAY.as_millis() as u64,
        }
    }
}

impl Config {
    /// 設定ファイルのパス（HOME 未設定なら `None`）
    pub fn config_path() -> Option<PathBuf> {
        let home = std::env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".docfilter").join("config.toml"))
    }

    /// 既定の場所から読み込む
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 指定パスから読み込む（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// 使用するロケールを決定
    pub fn resolve_locale(&self, cli: Option<&str>) -> String {
        let env_locale = std::env::var(LOCALE_ENV).ok();
        let lang = std::env::var("LANG").ok();

        cli.and_then(normalize_locale_tag)
            .or_else(|| env_locale.as_deref().and_then(normalize_locale_tag))
            .or_else(|| self.locale.as_deref().and_then(normalize_locale_tag))
            .or_else(|| lang.as_deref().and_then(normalize_locale_tag))
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
