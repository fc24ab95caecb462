use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use takeoff_core::{PipelineKind, Profile};
use takeoff_enrich::enrich::{create_enricher, enrich_csv};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "takeoff")]
#[command(about = "Enrich takeoff CSV exports with project area and account columns")]
struct Cli {
    /// Input CSV exported from the model.
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV. Defaults to `<input stem>_enriched.<ext>` beside the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Built-in profile: `columns` (keyword rules) or `pipes` (pipe decision tree).
    #[arg(short, long, default_value = "columns")]
    profile: PipelineKind,

    /// TOML file overriding fields of the profile.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worker threads. Defaults to the available parallelism.
    #[arg(short, long)]
    workers: Option<usize>,

    /// Log every skipped and preserved row.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "takeoff=debug" } else { "takeoff=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let profile = match &cli.config {
        Some(path) => Profile::load(path, cli.profile)
            .with_context(|| format!("loading profile from {}", path.display()))?,
        None => Profile::builtin(cli.profile),
    };
    let workers = cli.workers.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });
    info!(profile = %profile.name, kind = %profile.kind, workers, "starting");

    let enricher = create_enricher(&profile);
    let (output, summary) = enrich_csv(&cli.input, cli.output.as_deref(), &enricher, workers)
        .with_context(|| format!("enriching {}", cli.input.display()))?;

    println!("Wrote enriched CSV: {}", output.display());
    println!(
        "rows read={} enriched={} preserved={} skipped={}",
        summary.rows_read, summary.enriched, summary.preserved, summary.skipped
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn profile_names_parse() {
        let cli = Cli::try_parse_from(["takeoff", "-i", "in.csv", "-p", "pipes"]).unwrap();
        assert_eq!(cli.profile, PipelineKind::Pipe);
        assert!(cli.output.is_none());

        let cli = Cli::try_parse_from(["takeoff", "--input", "in.csv"]).unwrap();
        assert_eq!(cli.profile, PipelineKind::Keyword);
    }

    #[test]
    fn unknown_profile_is_rejected() {
        assert!(Cli::try_parse_from(["takeoff", "-i", "in.csv", "-p", "ducts"]).is_err());
    }
}
