//! docfilter quick コマンド
//!
//! クイックフィルタを適用した結果の選択範囲を出力する。

use super::dates::parse_bound;
use super::print_selection;
use crate::config::Config;
use crate::date::{Clock, DateSelection, FixedClock, QuickFilter, SystemClock};
use crate::error::{DocFilterError, Result};
use crate::tui::date_filter::DateFilter;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Quick filter id: 0 = last 7 days, 1 = last month, 2 = last 3 months, 3 = last year
    pub id: u8,

    /// Locale used for the date input format
    #[arg(long)]
    pub locale: Option<String>,

    /// Reference date instead of today (yyyy-MM-dd)
    #[arg(long)]
    pub today: Option<String>,
}

pub async fn run(args: Args) -> std::result::Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    let selection = apply(&args, &config).map_err(|e| e.to_string())?;
    print_selection(&selection).map_err(|e| e.to_string())
}

fn apply(args: &Args, config: &Config) -> Result<DateSelection> {
    let qf = QuickFilter::from_id(args.id).ok_or(DocFilterError::UnknownQuickFilter(args.id))?;
    let clock: Box<dyn Clock> = match parse_bound(args.today.as_deref())? {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    };

    let locale = config.resolve_locale(args.locale.as_deref());
    let mut model = DateFilter::new(&locale, clock, config.debounce_delay());
    tracing::debug!(quick_filter = qf.label(), "applying quick filter");
    Ok(model.set_date_quick_filter(qf.id()))
}
