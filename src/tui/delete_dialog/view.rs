//! 削除確認ダイアログの描画

use super::model::{DeleteDialog, DialogButton};
use crate::tui::common::centered_rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const DIALOG_WIDTH: u16 = 50;

/// 画面を描画
pub fn view(f: &mut Frame, dialog: &DeleteDialog) {
    let message_lines = if dialog.message2.is_some() { 4 } else { 2 };
    let dialog_height = message_lines + 6;
    let area = centered_rect(DIALOG_WIDTH, dialog_height, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(message_lines), Constraint::Length(1)])
        .split(inner);

    // メッセージ
    let mut lines = vec![Line::from(dialog.message.as_str())];
    if let Some(message2) = &dialog.message2 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message2.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    let message = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    // ボタン
    let buttons: Vec<Span> = DialogButton::all()
        .iter()
        .flat_map(|button| {
            let style = button_style(*button, dialog.focused == *button);
            [
                Span::styled(format!("[ {} ]", button.label()), style),
                Span::raw("  "),
            ]
        })
        .collect();
    let buttons = Paragraph::new(Line::from(buttons)).alignment(Alignment::Right);
    f.render_widget(buttons, chunks[1]);
}

fn button_style(button: DialogButton, focused: bool) -> Style {
    let base = match button {
        DialogButton::Delete => Style::default().fg(Color::Red),
        DialogButton::Cancel => Style::default(),
    };
    if focused {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
