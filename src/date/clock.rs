//! 「今日」の取得元
//!
//! クイックフィルタは現在日付からの相対範囲を計算するため、
//! テストでは固定日付に差し替える。

use chrono::{NaiveDate, Utc};

/// 現在日付の取得元
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// システム時計（UTC）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// 固定日付を返す時計
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
