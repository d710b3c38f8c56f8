use thiserror::Error;

/// docfilter 統一エラー型
///
/// コンポーネント層はエラーを返さない（不正な入力は未設定になる）。
/// ここで扱うのはホスト側（CLI・設定・出力）のエラーのみ。
#[derive(Debug, Error)]
pub enum DocFilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}. Expected 'yyyy-MM-dd'")]
    InvalidDate(String),

    #[error("Unknown quick filter: {0}. Expected 0-3")]
    UnknownQuickFilter(u8),
}

pub type Result<T> = std::result::Result<T, DocFilterError>;
