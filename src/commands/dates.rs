//! docfilter dates コマンド
//!
//! 日付範囲フィルタを対話的に表示し、最後に通知された選択範囲を出力する。

use super::print_selection;
use crate::config::Config;
use crate::date::{parse_iso, DateSelection, SystemClock};
use crate::error::{DocFilterError, Result};
use crate::output::StatusLine;
use crate::tui::date_filter::{self, DateFilter};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Initial lower bound (yyyy-MM-dd)
    #[arg(long)]
    pub after: Option<String>,

    /// Initial upper bound (yyyy-MM-dd)
    #[arg(long)]
    pub before: Option<String>,

    /// Dropdown title
    #[arg(long, default_value = "Date")]
    pub title: String,

    /// Locale used for the date input format
    #[arg(long)]
    pub locale: Option<String>,
}

pub async fn run(args: Args) -> std::result::Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    let locale = config.resolve_locale(args.locale.as_deref());
    let after = parse_bound(args.after.as_deref()).map_err(|e| e.to_string())?;
    let before = parse_bound(args.before.as_deref()).map_err(|e| e.to_string())?;

    let mut model = DateFilter::new(&locale, Box::new(SystemClock), config.debounce_delay())
        .with_title(args.title)
        .with_after(after)
        .with_before(before);

    let mut last = model.selection();
    date_filter::run(&mut model, |selection| {
        tracing::info!(?selection, "selection emitted");
        last = selection.clone();
    })
    .map_err(|e| e.to_string())?;

    report(&last)
}

fn report(selection: &DateSelection) -> std::result::Result<(), String> {
    eprintln!(
        "{}",
        StatusLine::selection(selection.after.as_deref(), selection.before.as_deref())
    );
    print_selection(selection).map_err(|e| e.to_string())
}

/// ISO 形式の初期値を解析
pub(super) fn parse_bound(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(text) => parse_iso(text)
            .map(Some)
            .ok_or_else(|| DocFilterError::InvalidDate(text.to_string())),
    }
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
