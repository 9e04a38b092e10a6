mod cli;
mod command;
mod config;
mod error;
mod printer;

use api::SearchRequest;
use clap::CommandFactory;
use clap::Parser;
use error::WrapErr;
use tracing::{Level, debug};

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();

    let level = match command_line.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::Config::load().context("Load configuration error")?;
    debug!("Configuration path {}", config::Config::path().display());

    let Some(command) = command_line.command else {
        cli::Cli::command().print_help()?;
        return Ok(());
    };

    let cmd: Box<dyn command::Command> = match command {
        cli::Commands::Search { args, json } => {
            let options = args.options(&cfg.defaults);
            let request = SearchRequest::from_options(args.query, &options);
            Box::new(command::SearchCommand::new(
                cfg.search,
                cfg.player,
                request,
                options.show_scores,
                json,
            ))
        }
        cli::Commands::Url { args } => {
            let options = args.options(&cfg.defaults);
            let request = SearchRequest::from_options(args.query, &options);
            Box::new(command::UrlCommand::new(cfg.search.base_url, request))
        }
    };
    cmd.execute().await?;

    Ok(())
}
