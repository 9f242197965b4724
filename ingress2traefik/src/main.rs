use clap::{Parser, Subcommand};
use ingress2traefik_core::cli::{self, InputArgs};
use ingress2traefik_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "ingress2traefik",
    version,
    about = "Convert ingress-nginx annotations into Traefik middlewares"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert ingresses and print the generated Traefik resources
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// Write generated resources to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Report conversion warnings without writing resources
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    match cli.command {
        Command::Convert { input, out } => match cli::convert(&input, out.as_ref()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "conversion failed");
                eprintln!("convert error: {e:#}");
                ExitCode::FAILURE
            }
        },

        Command::Check { input } => match cli::check(&input) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::from(1),
            Err(e) => {
                error!(error = %e, "check failed");
                eprintln!("check error: {e:#}");
                ExitCode::from(2)
            }
        },
    }
}
