//! salestat - Main Entry Point

use clap::Parser;
use salestat::cli::{cmd_cef, cmd_encode, cmd_info, cmd_report, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salestat=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { data } => cmd_info(&data)?,
        Commands::Encode {
            data,
            hints,
            output,
        } => cmd_encode(&data, hints.as_deref(), output.as_deref())?,
        Commands::Cef {
            data,
            column,
            output,
        } => cmd_cef(&data, &column, output.as_deref())?,
        Commands::Report {
            data,
            column,
            out_dir,
            bins,
        } => cmd_report(&data, &column, &out_dir, bins)?,
    }

    Ok(())
}
