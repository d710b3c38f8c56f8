//! 日付範囲フィルタのキー入力処理
//!
//! キー → `Msg` への変換と、`Msg` に応じた状態更新。

use super::component::{Bound, DateFilter, Focus};
use crate::date::{DateSelection, QuickFilter};
use crossterm::event::KeyCode;
use std::time::Instant;

/// カレンダー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMsg {
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
    PrevMonth,
    NextMonth,
    Select,
    Cancel,
}

/// メッセージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    NextFocus,
    PrevFocus,
    Up,
    Down,
    /// クイックフィルタ適用、または入力欄でカレンダーを開く
    Enter,
    /// 入力欄への文字入力
    Input(char),
    Backspace,
    /// 入力欄のクリア
    Clear,
    Close,
    Picker(PickerMsg),
}

/// キー入力をメッセージに変換
pub fn key_to_msg(model: &DateFilter, key: KeyCode) -> Option<Msg> {
    if model.picker.is_some() {
        let msg = match key {
            KeyCode::Left | KeyCode::Char('h') => PickerMsg::PrevDay,
            KeyCode::Right | KeyCode::Char('l') => PickerMsg::NextDay,
            KeyCode::Up | KeyCode::Char('k') => PickerMsg::PrevWeek,
            KeyCode::Down | KeyCode::Char('j') => PickerMsg::NextWeek,
            KeyCode::PageUp => PickerMsg::PrevMonth,
            KeyCode::PageDown => PickerMsg::NextMonth,
            KeyCode::Enter => PickerMsg::Select,
            KeyCode::Esc | KeyCode::Char('q') => PickerMsg::Cancel,
            _ => return None,
        };
        return Some(Msg::Picker(msg));
    }

    match (model.focus, key) {
        (_, KeyCode::Tab) => Some(Msg::NextFocus),
        (_, KeyCode::BackTab) => Some(Msg::PrevFocus),
        (_, KeyCode::Esc) => Some(Msg::Close),
        (_, KeyCode::Enter) => Some(Msg::Enter),
        (Focus::QuickFilters, KeyCode::Up | KeyCode::Char('k')) => Some(Msg::Up),
        (Focus::QuickFilters, KeyCode::Down | KeyCode::Char('j')) => Some(Msg::Down),
        (Focus::QuickFilters, KeyCode::Char('q')) => Some(Msg::Close),
        (Focus::Field(_), KeyCode::Up) => Some(Msg::PrevFocus),
        (Focus::Field(_), KeyCode::Down) => Some(Msg::NextFocus),
        (Focus::Field(_), KeyCode::Backspace) => Some(Msg::Backspace),
        (Focus::Field(_), KeyCode::Delete) => Some(Msg::Clear),
        (Focus::Field(_), KeyCode::Char(c))
            if c.is_ascii_digit() || c.is_ascii_punctuation() || c == ' ' =>
        {
            Some(Msg::Input(c))
        }
        _ => None,
    }
}

/// メッセージに応じて状態を更新
///
/// 即時に正規化した場合のみ選択範囲を返す。手入力の結果は
/// `DateFilter::tick` から返る。
pub fn update(model: &mut DateFilter, msg: Msg, now: Instant) -> Option<DateSelection> {
    match msg {
        Msg::NextFocus => {
            model.focus = model.focus.next();
            None
        }
        Msg::PrevFocus => {
            model.focus = model.focus.prev();
            None
        }
        Msg::Up => {
            let current = model.quick_filter_state.selected().unwrap_or(0);
            model.quick_filter_state.select(Some(current.saturating_sub(1)));
            None
        }
        Msg::Down => {
            let last = QuickFilter::all().len().saturating_sub(1);
            let current = model.quick_filter_state.selected().unwrap_or(0);
            model.quick_filter_state.select(Some((current + 1).min(last)));
            None
        }
        Msg::Enter => match model.focus {
            Focus::QuickFilters => {
                let qf = model.selected_quick_filter()?;
                Some(model.set_date_quick_filter(qf.id()))
            }
            Focus::Field(bound) => {
                model.open_picker(bound);
                None
            }
        },
        Msg::Input(c) => {
            let bound = focused_bound(model)?;
            model.type_char(bound, c, now);
            None
        }
        Msg::Backspace => {
            let bound = focused_bound(model)?;
            model.backspace(bound, now);
            None
        }
        Msg::Clear => match focused_bound(model)? {
            Bound::After => Some(model.clear_after()),
            Bound::Before => Some(model.clear_before()),
        },
        Msg::Close => {
            model.should_close = true;
            None
        }
        Msg::Picker(msg) => update_picker(model, msg),
    }
}

fn focused_bound(model: &DateFilter) -> Option<Bound> {
    match model.focus {
        Focus::Field(bound) => Some(bound),
        Focus::QuickFilters => None,
    }
}

fn update_picker(model: &mut DateFilter, msg: PickerMsg) -> Option<DateSelection> {
    match msg {
        PickerMsg::Select => return model.confirm_picker(),
        PickerMsg::Cancel => {
            model.picker = None;
            return None;
        }
        _ => {}
    }

    let picker = model.picker.as_mut()?;
    match msg {
        PickerMsg::PrevDay => picker.move_days(-1),
        PickerMsg::NextDay => picker.move_days(1),
        PickerMsg::PrevWeek => picker.move_days(-7),
        PickerMsg::NextWeek => picker.move_days(7),
        PickerMsg::PrevMonth => picker.move_months(-1),
        PickerMsg::NextMonth => picker.move_months(1),
        PickerMsg::Select | PickerMsg::Cancel => {}
    }
    None
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
