//! 日付範囲フィルタの本体
//!
//! 2つのマスク付き入力欄（after / before）の生テキストだけを状態として持ち、
//! ピッカー用の値や ISO 形式の値は常にそこから導出する。
//!
//! 正規化（`on_change`）が外部への唯一の通知点で、次の経路から呼ばれる。
//!
//! - 手入力: `on_change_debounce` → 待ち時間経過後の `tick`
//! - カレンダー選択・クリア・クイックフィルタ: 即時

use super::calendar::CalendarPicker;
use super::masked_input::MaskedInput;
use crate::date::{
    mask_for_placeholder, placeholder_for_locale, Clock, DatePattern, DateSelection, PickerDate,
    QuickFilter,
};
use crate::debounce::Debouncer;
use chrono::NaiveDate;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

/// 範囲の境界
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    After,
    Before,
}

impl Bound {
    pub fn label(&self) -> &'static str {
        match self {
            Bound::After => "After",
            Bound::Before => "Before",
        }
    }
}

/// フォーカス位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    QuickFilters,
    Field(Bound),
}

impl Focus {
    pub fn all() -> &'static [Focus] {
        &[
            Focus::QuickFilters,
            Focus::Field(Bound::After),
            Focus::Field(Bound::Before),
        ]
    }

    fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::all()[(self.index() + 1) % Self::all().len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::all().len();
        Self::all()[(self.index() + len - 1) % len]
    }
}

/// 日付範囲フィルタ
pub struct DateFilter {
    /// ドロップダウンの見出し
    pub title: String,
    placeholder: String,
    mask: String,
    clock: Box<dyn Clock>,
    date_after: MaskedInput,
    date_before: MaskedInput,
    debounce: Debouncer<DateSelection>,
    destroyed: bool,
    /// フォーカス位置
    pub focus: Focus,
    /// クイックフィルタ一覧の選択状態
    pub quick_filter_state: ListState,
    /// 開いているカレンダー
    pub picker: Option<CalendarPicker>,
    /// ドロップダウンを閉じるか
    pub should_close: bool,
}

impl DateFilter {
    /// ロケールからプレースホルダとマスクを決定して作成
    pub fn new(locale: &str, clock: Box<dyn Clock>, debounce_delay: Duration) -> Self {
        let placeholder = placeholder_for_locale(locale);
        let mask = mask_for_placeholder(&placeholder);
        let pattern = DatePattern::parse(&placeholder).unwrap_or_default();

        let mut quick_filter_state = ListState::default();
        quick_filter_state.select(Some(0));

        Self {
            title: String::new(),
            placeholder,
            mask,
            date_after: MaskedInput::new(pattern.clone()),
            date_before: MaskedInput::new(pattern),
            clock,
            debounce: Debouncer::new(debounce_delay),
            destroyed: false,
            focus: Focus::default(),
            quick_filter_state,
            picker: None,
            should_close: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// 初期値（after）を設定
    pub fn with_after(mut self, date: Option<NaiveDate>) -> Self {
        set_or_clear(&mut self.date_after, date);
        self
    }

    /// 初期値（before）を設定
    pub fn with_before(mut self, date: Option<NaiveDate>) -> Self {
        set_or_clear(&mut self.date_before, date);
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }

    fn input(&self, bound: Bound) -> &MaskedInput {
        match bound {
            Bound::After => &self.date_after,
            Bound::Before => &self.date_before,
        }
    }

    fn input_mut(&mut self, bound: Bound) -> &mut MaskedInput {
        match bound {
            Bound::After => &mut self.date_after,
            Bound::Before => &mut self.date_before,
        }
    }

    /// 入力欄の生テキスト
    pub fn text(&self, bound: Bound) -> &str {
        self.input(bound).text()
    }

    /// 境界の日付（未入力・入力途中・不正なら `None`）
    pub fn value(&self, bound: Bound) -> Option<NaiveDate> {
        self.input(bound).resolve()
    }

    /// カレンダー用の値
    pub fn dp_value(&self, bound: Bound) -> Option<PickerDate> {
        self.value(bound).map(PickerDate::from)
    }

    /// 現在のテキストから導出した選択範囲
    pub fn selection(&self) -> DateSelection {
        DateSelection::from_dates(self.value(Bound::Before), self.value(Bound::After))
    }

    // ------------------------------------------------------------------
    // 正規化
    // ------------------------------------------------------------------

    /// 正規化して選択範囲を通知する
    ///
    /// テキストが変わらなければ何度呼んでも同じ値を返す。
    pub fn on_change(&mut self) -> DateSelection {
        let selection = self.selection();
        self.debounce.record(selection.clone());
        tracing::info!(
            after = selection.after.as_deref().unwrap_or("null"),
            before = selection.before.as_deref().unwrap_or("null"),
            "dates set"
        );
        selection
    }

    /// キー入力ごとに呼ぶ
    ///
    /// 入力途中・不正なテキストは未設定として扱い、デバウンスに通知する。
    pub fn on_change_debounce(&mut self, now: Instant) {
        for bound in [Bound::After, Bound::Before] {
            let input = self.input(bound);
            if !input.is_empty() && input.resolve().is_none() {
                tracing::debug!(
                    bound = bound.label(),
                    text = input.text(),
                    "incomplete date treated as unset"
                );
            }
        }
        let selection = self.selection();
        self.debounce.signal(selection, now);
    }

    /// デバウンスの締め切りを過ぎていれば正規化して通知する
    pub fn tick(&mut self, now: Instant) -> Option<DateSelection> {
        if self.destroyed {
            return None;
        }
        self.debounce.poll(now)?;
        tracing::debug!("debounced normalization");
        Some(self.on_change())
    }

    /// 次にデバウンスが発火する時刻
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.destroyed {
            return None;
        }
        self.debounce.deadline()
    }

    /// 破棄。保留中のデバウンスは発火しない
    pub fn destroy(&mut self) {
        self.debounce.cancel();
        self.destroyed = true;
    }

    // ------------------------------------------------------------------
    // 操作
    // ------------------------------------------------------------------

    /// クイックフィルタを適用
    ///
    /// before をクリアし、after を今日から遡った日付にする。
    /// 未知の ID では after は今日になる。
    pub fn set_date_quick_filter(&mut self, id: u8) -> DateSelection {
        let today = self.clock.today();
        let after = QuickFilter::from_id(id).map_or(today, |qf| qf.after_bound(today));

        self.date_before.clear();
        self.date_after.set_date(after);
        self.on_change()
    }

    /// カレンダーで after を選択
    pub fn dp_after_date_select(&mut self, date: PickerDate) -> DateSelection {
        self.date_select(Bound::After, date)
    }

    /// カレンダーで before を選択
    pub fn dp_before_date_select(&mut self, date: PickerDate) -> DateSelection {
        self.date_select(Bound::Before, date)
    }

    fn date_select(&mut self, bound: Bound, date: PickerDate) -> DateSelection {
        set_or_clear(self.input_mut(bound), date.to_date());
        self.on_change()
    }

    pub fn clear_after(&mut self) -> DateSelection {
        self.clear(Bound::After)
    }

    pub fn clear_before(&mut self) -> DateSelection {
        self.clear(Bound::Before)
    }

    fn clear(&mut self, bound: Bound) -> DateSelection {
        self.input_mut(bound).clear();
        self.on_change()
    }

    /// 入力欄に1文字入力（デバウンス経由で通知される）
    pub fn type_char(&mut self, bound: Bound, c: char, now: Instant) {
        if self.input_mut(bound).push(c) {
            self.on_change_debounce(now);
        }
    }

    /// 入力欄の末尾を1文字削除（デバウンス経由で通知される）
    pub fn backspace(&mut self, bound: Bound, now: Instant) {
        if self.input(bound).is_empty() {
            return;
        }
        self.input_mut(bound).pop();
        self.on_change_debounce(now);
    }

    /// カレンダーを開く（現在値、なければ今日）
    pub fn open_picker(&mut self, bound: Bound) {
        let initial = self
            .dp_value(bound)
            .and_then(PickerDate::to_date)
            .unwrap_or_else(|| self.clock.today());
        self.picker = Some(CalendarPicker::new(bound, initial));
    }

    /// 開いているカレンダーの選択を確定
    pub fn confirm_picker(&mut self) -> Option<DateSelection> {
        let picker = self.picker.take()?;
        let selection = match picker.target {
            Bound::After => self.dp_after_date_select(picker.selected()),
            Bound::Before => self.dp_before_date_select(picker.selected()),
        };
        Some(selection)
    }

    /// 選択中のクイックフィルタ
    pub fn selected_quick_filter(&self) -> Option<QuickFilter> {
        let index = self.quick_filter_state.selected()?;
        QuickFilter::all().get(index).copied()
    }

    /// いずれかの境界が設定されているか
    pub fn is_active(&self) -> bool {
        !self.selection().is_empty()
    }
}

fn set_or_clear(input: &mut MaskedInput, date: Option<NaiveDate>) {
    match date {
        Some(date) => input.set_date(date),
        None => input.clear(),
    }
}

#[cfg(test)]
#[path = "component_test.rs"]
mod tests;
