mod cli;
mod commands;
mod config;
mod date;
mod debounce;
mod error;
mod logging;
mod output;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    logging::init();
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", output::StatusLine::failure(err));
        std::process::exit(1);
    }
}
