//! 削除確認ダイアログの Model/Msg/update

use crate::tui::common::ModalHandle;
use crossterm::event::KeyCode;

pub const DEFAULT_TITLE: &str = "Delete confirmation";
pub const DEFAULT_MESSAGE: &str = "Do you really want to delete this?";

/// 確定時に通知するイベント（ペイロードなし）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteClicked;

/// ボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    #[default]
    Cancel,
    Delete,
}

impl DialogButton {
    pub fn all() -> &'static [DialogButton] {
        &[DialogButton::Cancel, DialogButton::Delete]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DialogButton::Cancel => "Cancel",
            DialogButton::Delete => "Delete",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            DialogButton::Cancel => DialogButton::Delete,
            DialogButton::Delete => DialogButton::Cancel,
        }
    }
}

/// 削除確認ダイアログ
#[derive(Debug, Clone)]
pub struct DeleteDialog {
    pub title: String,
    pub message: String,
    pub message2: Option<String>,
    /// フォーカス中のボタン
    pub focused: DialogButton,
}

impl Default for DeleteDialog {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            message2: None,
            focused: DialogButton::default(),
        }
    }
}

impl DeleteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_message2(mut self, message2: impl Into<String>) -> Self {
        self.message2 = Some(message2.into());
        self
    }

    /// 確定。モーダルは閉じない
    pub fn delete_clicked(&self) -> DeleteClicked {
        DeleteClicked
    }

    /// キャンセル。結果なしでモーダルを閉じる
    pub fn cancel_clicked(&self, modal: &mut impl ModalHandle) {
        modal.close();
    }
}

/// メッセージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// フォーカスを切り替え
    ToggleFocus,
    /// フォーカス中のボタンを押す
    Activate,
    Confirm,
    Cancel,
}

/// キー入力をメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            Some(Msg::ToggleFocus)
        }
        KeyCode::Char('h') | KeyCode::Char('l') => Some(Msg::ToggleFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::Activate),
        KeyCode::Char('y') => Some(Msg::Confirm),
        KeyCode::Char('n') | KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Cancel),
        _ => None,
    }
}

/// メッセージに応じて状態を更新
///
/// 確定した場合のみ `Some(DeleteClicked)` を返す。
pub fn update(
    dialog: &mut DeleteDialog,
    msg: Msg,
    modal: &mut impl ModalHandle,
) -> Option<DeleteClicked> {
    match msg {
        Msg::ToggleFocus => {
            dialog.focused = dialog.focused.toggle();
            None
        }
        Msg::Activate => match dialog.focused {
            DialogButton::Delete => Some(dialog.delete_clicked()),
            DialogButton::Cancel => {
                dialog.cancel_clicked(modal);
                None
            }
        },
        Msg::Confirm => Some(dialog.delete_clicked()),
        Msg::Cancel => {
            dialog.cancel_clicked(modal);
            None
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
