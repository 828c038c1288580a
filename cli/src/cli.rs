//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::app::{AppContext, OutputFlags};
use crate::application::services::settings_service;
use crate::commands;
use crate::domain::{DiscoveryError, SettingsOverrides};
use crate::infra::settings::YamlSettingsStore;
use crate::output::json::format_error;

/// List remctl services and show their help output
#[derive(Parser, Debug)]
#[command(name = "remctl-help", version)]
pub struct Cli {
    /// Run each service's help program and print its output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the manual and exit
    #[arg(short, long)]
    pub manual: bool,

    /// remctl configuration directory [default: /etc/remctl/conf.d]
    #[arg(short = 'd', long, env = "REMCTL_CONF_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Kill help programs that run longer than this many seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress headers and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Only show these services
    #[arg(value_name = "SERVICE")]
    pub services: Vec<String>,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if settings are invalid or discovery fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            verbose,
            manual,
            config_dir,
            timeout,
            json,
            quiet,
            no_color,
            services,
        } = self;

        if manual {
            commands::manual::run();
            return Ok(ExitCode::SUCCESS);
        }

        let overrides = SettingsOverrides {
            config_dir,
            timeout_secs: timeout,
            verbose,
            services,
        };
        let settings = settings_service::resolve_settings(&YamlSettingsStore, overrides)?;
        tracing::debug!(?settings, "resolved settings");

        let flags = OutputFlags {
            no_color,
            quiet,
            json,
        };
        let app = AppContext::new(&flags, settings);
        commands::help::run(&app).await
    }
}

/// Print a fatal error to stderr, as a JSON error object when `json` is set.
pub fn report_error(err: &anyhow::Error, json: bool) {
    let message = format!("{err:#}");
    if json {
        let code = err
            .downcast_ref::<DiscoveryError>()
            .map_or("ERROR", DiscoveryError::code);
        match format_error(&message, code) {
            Ok(obj) => eprintln!("{obj}"),
            Err(_) => eprintln!("Error: {message}"),
        }
    } else {
        eprintln!("Error: {message}");
    }
}
