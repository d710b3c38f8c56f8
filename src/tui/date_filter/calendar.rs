//! カレンダーピッカー
//!
//! 月表示のカレンダー上でカーソルを動かし、日付を1つ選ぶ。

use super::component::Bound;
use crate::date::{PickerDate, YEAR_RANGE};
use chrono::{Datelike, Days, Months, NaiveDate};

/// カレンダーピッカーの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPicker {
    /// 選択結果を反映する境界
    pub target: Bound,
    /// カーソル位置の日付
    pub cursor: NaiveDate,
}

impl CalendarPicker {
    pub fn new(target: Bound, initial: NaiveDate) -> Self {
        Self {
            target,
            cursor: initial,
        }
    }

    /// 表示可能な年の範囲内ならカーソルを移す
    fn move_to(&mut self, moved: Option<NaiveDate>) {
        if let Some(date) = moved.filter(|d| YEAR_RANGE.contains(&d.year())) {
            self.cursor = date;
        }
    }

    /// 日単位で移動（負数で過去へ）
    pub fn move_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        self.move_to(moved);
    }

    /// 月単位で移動（日は月末に丸める）
    pub fn move_months(&mut self, months: i32) {
        let moved = if months >= 0 {
            self.cursor
                .checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.cursor
                .checked_sub_months(Months::new(months.unsigned_abs()))
        };
        self.move_to(moved);
    }

    /// 選択中の日付
    pub fn selected(&self) -> PickerDate {
        PickerDate::from(self.cursor)
    }

    /// 表示中の月（例: `February 2024`）
    pub fn month_label(&self) -> String {
        self.cursor.format("%B %Y").to_string()
    }

    /// 表示中の月の週ごとの日付（月曜始まり、月外は `None`）
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.cursor.with_day(1) else {
            return Vec::new();
        };
        let offset = first.weekday().num_days_from_monday() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = offset;

        for date in first.iter_days().take_while(|d| d.month() == first.month()) {
            week[slot] = Some(date);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }
        weeks
    }
}

#[cfg(test)]
#[path = "calendar_test.rs"]
mod tests;
