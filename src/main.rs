use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use imgcmp::harness::{run_comparison, RunOptions};
use imgcmp::inspect::SniffInspector;
use imgcmp::paths::read_path_list;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "imgcmp",
    version,
    about = "Probes the same paths against two image servers and records side-by-side response metadata",
    disable_help_subcommand = true
)]
struct Cli {
    /// Base URL of the first endpoint
    #[arg(value_name = "BASE_URL_1")]
    base_url_1: String,

    /// Base URL of the second endpoint
    #[arg(value_name = "BASE_URL_2")]
    base_url_2: String,

    /// File listing request paths, one per line
    #[arg(value_name = "PATH_LIST")]
    path_list: PathBuf,

    /// Directory to store artifacts and case records (defaults to the
    /// current directory)
    #[arg(long = "output", short = 'O')]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Paths are concatenated onto the base URLs verbatim; the parse here
    // only rejects bases that are not URLs at all.
    for base in [&cli.base_url_1, &cli.base_url_2] {
        Url::parse(base).with_context(|| format!("invalid base URL {base}"))?;
    }

    let paths = read_path_list(&cli.path_list)?;

    let output_dir = match cli.output {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            dir
        }
        None => std::env::current_dir()?,
    };

    run_comparison(
        &paths,
        &RunOptions {
            base_url_1: &cli.base_url_1,
            base_url_2: &cli.base_url_2,
            output_dir: &output_dir,
            inspector: &SniffInspector,
        },
    )
    .await
}
