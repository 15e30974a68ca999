//! Profile Stats CLI
//!
//! Serves user profile statistics over HTTP, or computes them for a
//! saved payload.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::net::IpAddr;
use std::path::PathBuf;

use profile_stats::commands::{
    display_version, execute_report, execute_serve, validate_args, ReportArgs, ServeArgs,
};
use profile_stats::output::ResponseFormat;
use profile_stats::utils::config::{ServerConfig, DEFAULT_BODY_LIMIT, DEFAULT_HOST, DEFAULT_PORT};

/// Profile Stats - descriptive statistics over user profiles
#[derive(Parser, Debug)]
#[command(name = "profile-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Largest accepted request body, in bytes
        #[arg(long, default_value_t = DEFAULT_BODY_LIMIT)]
        body_limit: usize,
    },

    /// Compute statistics for a saved users payload
    Report {
        /// Path to JSON payload with a `results` array
        #[arg(short, long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ResponseFormat,

        /// Output path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            body_limit,
        } => {
            let args = ServeArgs {
                config: ServerConfig::new(host, port).with_body_limit(body_limit),
            };
            execute_serve(args).await?;
        }

        Commands::Report {
            file,
            format,
            output,
        } => {
            let args = ReportArgs {
                input: file,
                format,
                output,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
