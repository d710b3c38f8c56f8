use owo_colors::OwoColorize;
use std::fmt;

/// コマンド結果の1行表示（stderr 向け）
pub struct StatusLine {
    pub prefix: String,
    pub message: String,
}

impl StatusLine {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            prefix: "✓".green().to_string(),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            prefix: "✗".red().to_string(),
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            prefix: "•".yellow().to_string(),
            message: message.into(),
        }
    }

    /// 選択範囲の要約
    pub fn selection(after: Option<&str>, before: Option<&str>) -> Self {
        match (after, before) {
            (None, None) => Self::info("No date range set"),
            (after, before) => Self::success(format!(
                "after {}  before {}",
                after.unwrap_or("-").cyan(),
                before.unwrap_or("-").cyan()
            )),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}
