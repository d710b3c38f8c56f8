//! 共通 UI ユーティリティ
//!
//! ターミナルの切り替え、モーダルのライフサイクル、ダイアログ領域の計算。

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// raw モード + 代替スクリーンに切り替えてターミナルを作成
pub fn enter_terminal() -> io::Result<Term> {
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// ターミナルを復元
pub fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// モーダルを閉じるハンドル
///
/// ダイアログ自身は開閉状態を持たず、ホストから渡されたハンドルを閉じる。
pub trait ModalHandle {
    fn close(&mut self);
}

/// ホスト側で保持するモーダルの開閉状態
#[derive(Debug)]
pub struct ActiveModal {
    open: bool,
}

impl ActiveModal {
    pub fn new() -> Self {
        Self { open: true }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Default for ActiveModal {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalHandle for ActiveModal {
    fn close(&mut self) {
        self.open = false;
    }
}

/// 画面中央にダイアログ領域を計算（領域からはみ出す場合は縮める）
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
