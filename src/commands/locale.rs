//! docfilter locale コマンド
//!
//! ロケールから導出される日付プレースホルダと入力マスクを表示する。

use crate::config::Config;
use crate::date::{placeholder_for_locale, DatePattern};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Locale to inspect (defaults to the configured locale)
    #[arg(long)]
    pub locale: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    let locale = config.resolve_locale(args.locale.as_deref());
    print!("{}", describe(&locale));
    Ok(())
}

fn describe(locale: &str) -> String {
    let pattern = DatePattern::parse(&placeholder_for_locale(locale)).unwrap_or_default();
    let placeholder = pattern.placeholder();
    let mask = pattern.mask();
    format!("locale:      {locale}\nplaceholder: {placeholder}\nmask:        {mask}\n")
}
