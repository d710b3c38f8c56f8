//! 削除確認ダイアログ
//!
//! タイトルとメッセージを表示し、確定で `DeleteClicked` を通知する。
//! キャンセルはホストのモーダルを閉じるだけで何も通知しない。
//!
//! - `model`: 状態・メッセージ・update
//! - `view`: 描画

mod model;
mod view;

pub use model::DeleteDialog;

use super::common::{enter_terminal, restore_terminal, ActiveModal};
use model::{key_to_msg, update, DeleteClicked};
use view::view;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;

/// ダイアログを表示
///
/// `on_delete` は確定のたびに呼ばれ、ホストとしてモーダルを閉じるかを決める。
pub fn run<F>(dialog: &mut DeleteDialog, mut on_delete: F) -> io::Result<()>
where
    F: FnMut(&mut ActiveModal),
{
    let mut terminal = enter_terminal()?;
    let mut modal = ActiveModal::new();

    while modal.is_open() {
        terminal.draw(|f| view(f, dialog))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = key_to_msg(key.code) {
                    if let Some(DeleteClicked) = update(dialog, msg, &mut modal) {
                        tracing::info!(title = %dialog.title, "delete clicked");
                        on_delete(&mut modal);
                    }
                }
            }
        }
    }

    restore_terminal()
}
