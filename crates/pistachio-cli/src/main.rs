//! Pistachio command-line entry point

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pistachio_core::SketchId;
use pistachio_io::JsonDocumentAdapter;

use crate::commands::SummaryRenderer;
use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "pistachio", version, about = "Inspect and convert sketch documents")]
struct Cli {
    /// RON config file (defaults to $PISTACHIO_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print entity and constraint counts per sketch
    Inspect { file: PathBuf },
    /// Load a document and save it again
    Convert { input: PathBuf, output: PathBuf },
    /// Build render scenes and print primitive counts
    Scene {
        file: PathBuf,
        /// Only this sketch
        #[arg(long)]
        sketch: Option<u64>,
    },
}

fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let cli = Cli::parse();
    let config = AppConfig::discover(cli.config.as_deref())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let adapter = JsonDocumentAdapter::new();
    match cli.command {
        Command::Inspect { file } => {
            let document = commands::load(&adapter, &file)?;
            print!("{}", commands::inspect(&document)?);
        }
        Command::Convert { input, output } => {
            commands::convert(&adapter, &input, &output)?;
            tracing::info!("Converted {:?} -> {:?}", input, output);
        }
        Command::Scene { file, sketch } => {
            let document = commands::load(&adapter, &file)?;
            let mut renderer = SummaryRenderer::default();
            commands::scene(
                &document,
                sketch.map(SketchId),
                &config.render,
                &mut renderer,
            )?;
            print!("{}", renderer.output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scene() {
        let cli = Cli::parse_from([
            "pistachio",
            "--config",
            "cfg.ron",
            "scene",
            "a.sketch.json",
            "--sketch",
            "10",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.ron")));
        match cli.command {
            Command::Scene { file, sketch } => {
                assert_eq!(file, PathBuf::from("a.sketch.json"));
                assert_eq!(sketch, Some(10));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
