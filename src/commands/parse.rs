//! docfilter parse コマンド
//!
//! 手入力と同じ経路（マスク入力 → デバウンス → 正規化）でテキストを処理し、
//! 通知される選択範囲を出力する。

use super::print_selection;
use crate::config::Config;
use crate::date::{DateSelection, SystemClock};
use crate::tui::date_filter::{Bound, DateFilter};
use clap::Parser;
use std::time::Instant;

#[derive(Debug, Parser)]
pub struct Args {
    /// Text typed into the "after" field
    #[arg(long)]
    pub after: Option<String>,

    /// Text typed into the "before" field
    #[arg(long)]
    pub before: Option<String>,

    /// Locale used for the date input format
    #[arg(long)]
    pub locale: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    let locale = config.resolve_locale(args.locale.as_deref());
    let mut model = DateFilter::new(&locale, Box::new(SystemClock), config.debounce_delay());

    let selection = normalize(&mut model, args.after.as_deref(), args.before.as_deref());
    print_selection(&selection).map_err(|e| e.to_string())
}

/// テキストを1文字ずつ入力し、デバウンスが落ち着いた後の選択範囲を返す
fn normalize(model: &mut DateFilter, after: Option<&str>, before: Option<&str>) -> DateSelection {
    let start = Instant::now();
    for (bound, text) in [(Bound::After, after), (Bound::Before, before)] {
        for c in text.unwrap_or_default().chars() {
            model.type_char(bound, c, start);
        }
    }

    match model.next_deadline() {
        Some(deadline) => model.tick(deadline).unwrap_or_else(|| model.on_change()),
        None => model.on_change(),
    }
}
