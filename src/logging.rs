//! ログ設定
//!
//! TUI が端末を占有するため、ログは `DOCFILTER_LOG` で指定された
//! ファイルにのみ出力する。レベルは `DOCFILTER_LOG_LEVEL`（既定 `info`）。

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_ENV: &str = "DOCFILTER_LOG";
pub const LOG_LEVEL_ENV: &str = "DOCFILTER_LOG_LEVEL";

/// ファイルログを初期化
///
/// 有効になった場合はログファイルのパスを返す。
pub fn init() -> Option<String> {
    let path = std::env::var(LOG_FILE_ENV).ok()?;

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", path, e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}
