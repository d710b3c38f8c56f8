//! ロケール別の日付プレースホルダ
//!
//! ロケールの短い日付書式（`M/d/yy` など）を、年4桁・月日2桁の
//! プレースホルダ（`mm/dd/yyyy`）に正規化する。

use regex::Regex;
use std::sync::LazyLock;

/// ロケールごとの短い日付書式
///
/// 完全一致（`en-GB`）を優先し、なければ言語部分（`en`）で引く。
const SHORT_DATE_FORMATS: &[(&str, &str)] = &[
    ("en-US", "M/d/yy"),
    ("en-GB", "dd/MM/y"),
    ("en-AU", "d/M/yy"),
    ("en-CA", "y-MM-dd"),
    ("en", "M/d/yy"),
    ("de", "dd.MM.yy"),
    ("fr-CA", "y-MM-dd"),
    ("fr", "dd/MM/y"),
    ("es", "d/M/yy"),
    ("it", "dd/MM/yy"),
    ("nl", "dd-MM-y"),
    ("pt", "dd/MM/y"),
    ("sv", "y-MM-dd"),
    ("da", "dd.MM.y"),
    ("fi", "d.M.y"),
    ("pl", "d.MM.y"),
    ("cs", "dd.MM.yy"),
    ("ru", "dd.MM.y"),
    ("tr", "d.MM.y"),
    ("ja", "y/MM/dd"),
    ("zh", "y/M/d"),
];

const DEFAULT_SHORT_DATE: &str = "y-MM-dd";

static YEAR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"y+").expect("valid regex"));
static MONTH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"M+").expect("valid regex"));
static DAY_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"d+").expect("valid regex"));
static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})(?:[_-]([A-Za-z]{2}))?(?:[.@].*)?$").expect("valid regex")
});

/// ロケールの短い日付書式を取得
fn short_date_format(locale: &str) -> &'static str {
    let locale = normalize_locale_tag(locale).unwrap_or_default();
    let language = locale.split('-').next().unwrap_or_default();

    SHORT_DATE_FORMATS
        .iter()
        .find(|(tag, _)| *tag == locale)
        .or_else(|| SHORT_DATE_FORMATS.iter().find(|(tag, _)| *tag == language))
        .map(|(_, format)| *format)
        .unwrap_or(DEFAULT_SHORT_DATE)
}

/// ロケールに対応するプレースホルダを生成
///
/// 例: `en-US` → `mm/dd/yyyy`、`de-DE` → `dd.mm.yyyy`、不明 → `yyyy-mm-dd`
pub fn placeholder_for_locale(locale: &str) -> String {
    let format = short_date_format(locale);
    let format = YEAR_RUN.replace_all(format, "yyyy");
    let format = MONTH_RUN.replace_all(&format, "mm");
    DAY_RUN.replace_all(&format, "dd").into_owned()
}

/// ロケール表記を `ll-RR` 形式に正規化
///
/// `de_DE.UTF-8` → `de-DE`、`ja` → `ja`。`C` や `POSIX` は `None`。
pub fn normalize_locale_tag(raw: &str) -> Option<String> {
    let caps = LOCALE_TAG.captures(raw.trim())?;
    let language = caps.get(1)?.as_str().to_lowercase();

    match caps.get(2) {
        Some(region) => Some(format!("{}-{}", language, region.as_str().to_uppercase())),
        None => Some(language),
    }
}

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;
