//! `cargas` command-line client for shipment operations.
//!
//! Run with: `cargas <command>`
//!
//! This is a CLI tool, so `println!` and `eprintln!` are used for user-facing
//! output; diagnostics go through `tracing` on stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use cargas_domain::CargasError;
use cargas_infra::config;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;

use context::AppContext;

const LOG_FORMAT_ENV: &str = "CARGAS_LOG_FORMAT";

/// Cargas shipment operations client
#[derive(Debug, Parser)]
#[command(name = "cargas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in against the auth provider
    Login {
        /// User name
        user: String,
        /// Password
        #[arg(env = "CARGAS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// End the session and reset the integration
    Logout,
    /// Show the session user and integration
    Whoami,
    /// List available integrations
    Integrations,
    /// Switch the active integration
    Select {
        /// Integration id
        id: String,
    },
    /// List status codes of the active integration
    Statuses {
        /// Only show this category
        category: Option<String>,
        /// Match codes and labels containing this text
        #[arg(long)]
        search: Option<String>,
    },
    /// List shipments, optionally filtered
    List {
        /// Match shipments containing this text
        #[arg(long)]
        search: Option<String>,
        /// Keep shipments with this status code
        #[arg(long = "status", value_name = "CODE", action = clap::ArgAction::Append)]
        statuses: Vec<String>,
    },
    /// Show one shipment
    Show {
        /// Shipment id
        id: String,
    },
    /// Change a shipment's status
    UpdateStatus {
        /// Shipment id
        id: String,
        /// New status code
        code: String,
        /// Free-text note
        #[arg(long)]
        note: Option<String>,
        /// Who received the cargo
        #[arg(long, num_args = 3, value_names = ["NAME", "DOCUMENT", "DATE"])]
        receiver: Option<Vec<String>>,
        /// Invoice key the change applies to
        #[arg(long = "invoice-key", value_name = "KEY", action = clap::ArgAction::Append)]
        invoice_keys: Vec<String>,
        /// Document attached to the change
        #[arg(long = "attach", value_name = "PATH", action = clap::ArgAction::Append)]
        attachments: Vec<PathBuf>,
    },
    /// Upload XML documents
    Upload {
        /// Shipment id
        id: String,
        /// Files to upload
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },
    /// Show tracking events
    Tracking {
        /// Shipment id
        id: String,
    },
}

impl Command {
    /// Whether the command runs without a session.
    fn is_public(&self) -> bool {
        matches!(self, Self::Login { .. } | Self::Integrations)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    let ctx = match config::load().and_then(|config| AppContext::new(&config)) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("error: {}", err.message());
            return ExitCode::FAILURE;
        }
    };

    match commands::run(&ctx, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CargasError>() {
                Some(cargas) => eprintln!("error: {}", cargas.message()),
                None => eprintln!("error: {err:#}"),
            }
            if ctx.redirect.was_redirected() {
                eprintln!("Session ended. Run `cargas login <user>` to sign in again.");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}
