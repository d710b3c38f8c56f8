use crate::cli::Command;
use crate::date::DateSelection;
use crate::error::Result;

pub mod confirm;
pub mod dates;
pub mod locale;
pub mod parse;
pub mod quick;

pub async fn dispatch(cli: crate::cli::Cli) -> std::result::Result<(), String> {
    match cli.command {
        Command::Dates(args) => dates::run(args).await,
        Command::Confirm(args) => confirm::run(args).await,
        Command::Quick(args) => quick::run(args).await,
        Command::Parse(args) => parse::run(args).await,
        Command::Locale(args) => locale::run(args).await,
    }
}

/// 選択範囲を JSON で標準出力へ
fn print_selection(selection: &DateSelection) -> Result<()> {
    let json = serde_json::to_string(selection)?;
    println!("{json}");
    Ok(())
}
