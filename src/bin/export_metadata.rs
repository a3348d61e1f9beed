use clap::Parser;
use prime_catalog::export::{export, ExportConfig};
use prime_catalog::{load_all_algorithms, Registry};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "export-metadata",
    about = "Export prime algorithm metadata for the visualizer",
    version
)]
struct Cli {
    /// Path of the metadata JSON file
    #[arg(long, default_value = "public/algorithms.json")]
    output: PathBuf,
    /// Directory for the per-algorithm sample files
    #[arg(long = "examples-dir", default_value = "public/examples")]
    examples_dir: PathBuf,
    /// Also run each algorithm on its sample input
    #[arg(long)]
    samples: bool,
}

impl From<Cli> for ExportConfig {
    fn from(cli: Cli) -> Self {
        ExportConfig {
            output: cli.output,
            examples_dir: cli.examples_dir,
            samples: cli.samples,
        }
    }
}

fn run(config: ExportConfig) -> prime_catalog::Result<()> {
    let mut registry = Registry::new();
    load_all_algorithms(&mut registry)?;
    export(&registry, &config)?;
    log::info!("export finished: {}", config.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse().into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("export-metadata: {}", err);
            ExitCode::FAILURE
        }
    }
}
