//! 日付ロジック
//!
//! ロケール別のプレースホルダとマスク、表示文字列と日付の相互変換、
//! クイックフィルタ、外部へ通知する選択範囲を提供する。
//!
//! - `locale`: ロケール → プレースホルダ（`yyyy-mm-dd` など）
//! - `pattern`: プレースホルダの解析、マスク生成、deformat / 表示フォーマット
//! - `quick_filter`: 「過去7日」などのプリセット
//! - `selection`: 外部へ通知する `DateSelection` とピッカー用の `PickerDate`
//! - `clock`: 「今日」の取得元

mod clock;
mod locale;
mod pattern;
mod quick_filter;
mod selection;

pub use clock::{Clock, FixedClock, SystemClock};
pub use locale::{normalize_locale_tag, placeholder_for_locale};
pub use pattern::{mask_for_placeholder, DateField, DatePattern, Segment, YEAR_RANGE};
pub use quick_filter::QuickFilter;
pub use selection::{parse_iso, DateSelection, PickerDate};
