//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用した削除確認ダイアログと日付範囲フィルタを提供する。

mod common;
pub mod date_filter;
pub mod delete_dialog;

pub use common::ModalHandle;
