//! 日付範囲フィルタ（ドロップダウン）
//!
//! クイックフィルタ一覧、マスク付きの after / before 入力欄、
//! カレンダーピッカーで日付範囲を選び、`DateSelection` を通知する。
//!
//! - `component`: 状態と各操作（正規化・デバウンス・クイックフィルタ）
//! - `masked_input`: マスク付き入力欄
//! - `calendar`: カレンダーピッカー
//! - `input`: キー入力処理
//! - `view`: 描画

mod calendar;
mod component;
mod input;
mod masked_input;
mod view;

pub use component::{Bound, DateFilter};

use input::{key_to_msg, update};
use view::view;

use super::common::{enter_terminal, restore_terminal};
use crate::date::DateSelection;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

/// デバウンス待ちがないときのイベント待ち時間
const IDLE_POLL: Duration = Duration::from_millis(250);

/// ドロップダウンを表示
///
/// 選択範囲が通知されるたびに `on_dates_set` を呼ぶ。閉じるときに
/// 保留中のデバウンスは破棄される。
pub fn run<F>(model: &mut DateFilter, mut on_dates_set: F) -> io::Result<()>
where
    F: FnMut(&DateSelection),
{
    let mut terminal = enter_terminal()?;

    while !model.should_close {
        terminal.draw(|f| view(f, model))?;

        let timeout = model
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = key_to_msg(model, key.code) {
                        if let Some(selection) = update(model, msg, Instant::now()) {
                            on_dates_set(&selection);
                        }
                    }
                }
            }
        }

        if let Some(selection) = model.tick(Instant::now()) {
            on_dates_set(&selection);
        }
    }

    model.destroy();
    restore_terminal()
}
