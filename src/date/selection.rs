//! 選択範囲とピッカー用の日付

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// 外部へ通知する日付範囲
///
/// 各境界は `yyyy-MM-dd`、未設定なら `None`（JSON では `null`）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    pub after: Option<String>,
    pub before: Option<String>,
}

impl DateSelection {
    pub fn from_dates(before: Option<NaiveDate>, after: Option<NaiveDate>) -> Self {
        Self {
            after: after.map(format_iso),
            before: before.map(format_iso),
        }
    }

    /// 両境界とも未設定か
    pub fn is_empty(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }
}

/// カレンダーピッカーが扱う日付（月は 1 始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PickerDate {
    /// 暦上存在しない組み合わせなら `None`
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for PickerDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ISO_FORMAT).ok()
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
