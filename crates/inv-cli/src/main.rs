//! Inventaris admin console.

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use inv_cli::logging::{LogConfig, LogFormat, init_logging};
use inv_cli::source::RecordSource;
use inv_client::{ClientConfig, ClientError, InventarisClient, Session};
use inv_model::DisplayOptions;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, SourceArgs};
use crate::commands::{
    UpdateOutcome, run_decode, run_inventory, run_update_vendor, run_vendor, run_vendors,
};
use crate::summary::{print_inventory_table, print_vendor_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            report(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let options = DisplayOptions::new().with_placeholder(cli.placeholder.clone());
    match &cli.command {
        Command::Vendors => {
            let cards = run_vendors(&record_source(&cli.source)?, &options)?;
            print_vendor_table(&cards, &options.placeholder);
        }
        Command::Inventory => {
            let cards = run_inventory(&record_source(&cli.source)?, &options)?;
            print_inventory_table(&cards, &options.placeholder);
        }
        Command::Vendor(args) => {
            let card = run_vendor(&record_source(&cli.source)?, &options, args)?;
            println!("{card}");
        }
        Command::UpdateVendor(args) => {
            match run_update_vendor(&record_source(&cli.source)?, args)? {
                UpdateOutcome::DryRun(body) => println!("{body}"),
                UpdateOutcome::Saved(message) if message.is_empty() => {
                    println!("Vendor {} disimpan.", args.vendor_id);
                }
                UpdateOutcome::Saved(message) => println!("{message}"),
            }
        }
        Command::Decode(args) => println!("{}", run_decode(args)?),
    }
    Ok(())
}

/// Saved responses take precedence over the backend.
fn record_source(args: &SourceArgs) -> Result<RecordSource> {
    if let Some(path) = &args.input {
        return Ok(RecordSource::File(path.clone()));
    }
    let config = ClientConfig::default()
        .with_base_url(args.base_url.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let session = Session::from_token(args.token.clone(), args.user.clone().unwrap_or_default());
    let client = InventarisClient::new(&config, session).context("configure client")?;
    Ok(RecordSource::Remote(client))
}

fn report(error: &anyhow::Error) {
    eprintln!("error: {error:#}");
    let client_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ClientError>());
    if let Some(client_error) = client_error {
        eprintln!("{}", client_error.user_message());
        if client_error.is_retryable() {
            eprintln!("The request may succeed if retried.");
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
