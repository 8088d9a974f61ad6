//! CLI argument definitions for the inventaris admin console.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use inv_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use inv_model::VendorStatus;
use inv_model::options::DEFAULT_PLACEHOLDER;

#[derive(Parser)]
#[command(
    name = "inventaris",
    version,
    about = "Inventaris admin console - browse vendors and inventory",
    long_about = "Browse and edit vendors and inventory items held by the inventaris backend.\n\n\
                  Nullable fields are unwrapped and Base64 encoded status values are decoded\n\
                  before display. Read-only commands also accept a saved API response via --input."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Text shown for blank values in tables and cards.
    #[arg(long = "placeholder", default_value = DEFAULT_PLACEHOLDER, global = true)]
    pub placeholder: String,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow record field values (names, addresses) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

/// Where records come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Read a saved API response instead of calling the backend.
    #[arg(long = "input", value_name = "FILE", global = true)]
    pub input: Option<PathBuf>,

    /// Backend base URL.
    #[arg(
        long = "base-url",
        value_name = "URL",
        env = "INVENTARIS_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Session token sent as a bearer credential.
    #[arg(
        long = "token",
        value_name = "TOKEN",
        env = "INVENTARIS_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub token: Option<String>,

    /// User recorded as the editor on updates.
    #[arg(long = "user", value_name = "NAME", env = "INVENTARIS_USER", global = true)]
    pub user: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        global = true
    )]
    pub timeout_secs: u64,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all vendors.
    Vendors,

    /// List inventory items with their brand, vendor and room.
    Inventory,

    /// Show one vendor.
    Vendor(VendorArgs),

    /// Edit a vendor's name, address or status.
    UpdateVendor(UpdateVendorArgs),

    /// Decode an encoded status value the way the list views do.
    Decode(DecodeArgs),
}

#[derive(Parser)]
pub struct VendorArgs {
    #[arg(value_name = "VENDOR_ID")]
    pub vendor_id: String,
}

#[derive(Parser)]
pub struct UpdateVendorArgs {
    #[arg(value_name = "VENDOR_ID")]
    pub vendor_id: String,

    /// New vendor name.
    #[arg(long = "name")]
    pub name: Option<String>,

    /// New vendor address.
    #[arg(long = "address")]
    pub address: Option<String>,

    /// New vendor status.
    #[arg(long = "status", value_enum)]
    pub status: Option<StatusArg>,

    /// Print the request body without sending it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Raw field value, e.g. `QWt0aWY=`.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Aktif,
    TidakAktif,
}

impl From<StatusArg> for VendorStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Aktif => VendorStatus::Aktif,
            StatusArg::TidakAktif => VendorStatus::TidakAktif,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
