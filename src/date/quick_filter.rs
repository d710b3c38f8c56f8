//! クイックフィルタ
//!
//! 「過去7日」「過去1か月」などのプリセット範囲。

use chrono::{Days, Months, NaiveDate};

/// クイックフィルタの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    Last7Days,
    LastMonth,
    Last3Months,
    LastYear,
}

impl QuickFilter {
    pub fn all() -> &'static [QuickFilter] {
        &[
            QuickFilter::Last7Days,
            QuickFilter::LastMonth,
            QuickFilter::Last3Months,
            QuickFilter::LastYear,
        ]
    }

    pub fn id(&self) -> u8 {
        match self {
            QuickFilter::Last7Days => 0,
            QuickFilter::LastMonth => 1,
            QuickFilter::Last3Months => 2,
            QuickFilter::LastYear => 3,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::all().iter().copied().find(|qf| qf.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickFilter::Last7Days => "Last 7 days",
            QuickFilter::LastMonth => "Last month",
            QuickFilter::Last3Months => "Last 3 months",
            QuickFilter::LastYear => "Last year",
        }
    }

    /// 範囲の開始日（after）を計算
    ///
    /// 月・年の減算は暦に従い、存在しない日は月末に丸める
    /// （3月31日の1か月前は2月末日）。
    pub fn after_bound(&self, today: NaiveDate) -> NaiveDate {
        let shifted = match self {
            QuickFilter::Last7Days => today.checked_sub_days(Days::new(7)),
            QuickFilter::LastMonth => today.checked_sub_months(Months::new(1)),
            QuickFilter::Last3Months => today.checked_sub_months(Months::new(3)),
            QuickFilter::LastYear => today.checked_sub_months(Months::new(12)),
        };
        // chrono の最小日付付近でのみ失敗する
        shifted.unwrap_or(today)
    }
}

#[cfg(test)]
#[path = "quick_filter_test.rs"]
mod tests;
