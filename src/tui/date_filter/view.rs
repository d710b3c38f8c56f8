//! 日付範囲フィルタの描画

use super::calendar::CalendarPicker;
use super::component::{Bound, DateFilter, Focus};
use crate::date::QuickFilter;
use crate::tui::common::centered_rect;
use chrono::Datelike;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

const DROPDOWN_WIDTH: u16 = 40;
const DROPDOWN_HEIGHT: u16 = 15;

/// 画面を描画
pub fn view(f: &mut Frame, model: &DateFilter) {
    let area = centered_rect(DROPDOWN_WIDTH, DROPDOWN_HEIGHT, f.area());
    f.render_widget(Clear, area);

    let title_style = if model.is_active() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", model.title), title_style))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(QuickFilter::all().len() as u16),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    view_quick_filters(f, model, chunks[0]);
    view_field(f, model, Bound::After, chunks[2]);
    view_field(f, model, Bound::Before, chunks[3]);

    let help = Paragraph::new("tab: focus  enter: apply/pick  del: clear  esc: close")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[5]);

    if let Some(picker) = &model.picker {
        view_picker(f, picker);
    }
}

fn view_quick_filters(f: &mut Frame, model: &DateFilter, area: Rect) {
    let focused = model.focus == Focus::QuickFilters;
    let items: Vec<ListItem> = QuickFilter::all()
        .iter()
        .map(|qf| ListItem::new(qf.label()))
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = model.quick_filter_state.clone();
    if !focused {
        state.select(None);
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn view_field(f: &mut Frame, model: &DateFilter, bound: Bound, area: Rect) {
    let focused = model.focus == Focus::Field(bound);
    let text = model.text(bound);

    let value = if text.is_empty() {
        Span::styled(model.placeholder(), Style::default().fg(Color::DarkGray))
    } else if model.value(bound).is_none() {
        // 入力途中または不正
        Span::styled(text, Style::default().fg(Color::Yellow))
    } else {
        Span::raw(text)
    };

    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![Span::raw(marker), value];
    if !text.is_empty() {
        spans.push(Span::styled("  ×", Style::default().fg(Color::DarkGray)));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(bound.label(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", model.mask()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(spans),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn view_picker(f: &mut Frame, picker: &CalendarPicker) {
    let weeks = picker.weeks();
    let area = centered_rect(24, weeks.len() as u16 + 4, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", picker.month_label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from(Span::styled(
        "Mo Tu We Th Fr Sa Su",
        Style::default().fg(Color::DarkGray),
    ))];
    for week in &weeks {
        let spans: Vec<Span> = week
            .iter()
            .flat_map(|day| {
                let cell = match day {
                    Some(date) if *date == picker.cursor => Span::styled(
                        format!("{:>2}", date.day()),
                        Style::default().add_modifier(Modifier::REVERSED),
                    ),
                    Some(date) => Span::raw(format!("{:>2}", date.day())),
                    None => Span::raw("  "),
                };
                [cell, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
