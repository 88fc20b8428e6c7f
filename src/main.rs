use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use entropy_partitions::{
    render_json, render_text, GaussianKernelModel, ModelConfig, RunConfig, ScoredPartition,
};
use std::path::PathBuf;
use std::time::Instant;

/// Rank every partition of a small data set by within-cluster entropy
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Values to partition, comma separated (default: 9,10,10,2,1)
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    data: Option<Vec<f64>>,

    /// JSON config file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Probability model used for cluster entropy
    #[arg(short, long, value_enum)]
    model: Option<ModelKind>,

    /// Norm exponent of the Gaussian kernel (implies --model gaussian)
    #[arg(long)]
    norm: Option<f64>,

    /// Print lowest entropy first (default: highest entropy first)
    #[arg(long)]
    ascending: bool,

    /// Print the ranking as JSON
    #[arg(long)]
    json: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModelKind {
    Empirical,
    Gaussian,
}

impl Cli {
    /// Merge flags over the config file (or the defaults)
    fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(data) = &self.data {
            config.data = data.clone();
        }

        let current_norm = match config.model {
            ModelConfig::Gaussian { norm } => norm,
            ModelConfig::Empirical => GaussianKernelModel::DEFAULT_NORM,
        };
        config.model = match (self.model, self.norm) {
            (Some(ModelKind::Empirical), _) => ModelConfig::Empirical,
            (Some(ModelKind::Gaussian), norm) => ModelConfig::Gaussian {
                norm: norm.unwrap_or(current_norm),
            },
            (None, Some(norm)) => ModelConfig::Gaussian { norm },
            (None, None) => config.model,
        };

        config.ascending |= self.ascending;
        Ok(config)
    }
}

macro_rules! progress {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            eprintln!($($arg)*);
        }
    };
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    let start_time = Instant::now();

    // Step 1: Resolve configuration and validate the data set
    let step1_start = Instant::now();
    progress!(quiet, "Step 1: Loading data set...");
    let config = cli.run_config()?;
    let enumerator = config
        .enumerator()
        .context("Failed to configure enumerator")?;
    progress!(
        quiet,
        "✓ {} values, {} distinct, model={} [{:.2}s]",
        enumerator.data().len(),
        enumerator.max_clusters(),
        enumerator.model_name(),
        step1_start.elapsed().as_secs_f64()
    );

    // Step 2: Enumerate, score and rank
    let step2_start = Instant::now();
    progress!(
        quiet,
        "Step 2: Enumerating partitions for k=1..={}...",
        enumerator.max_clusters()
    );
    let mut ranked: Vec<ScoredPartition> = enumerator.enumerate();
    if config.ascending {
        ranked.reverse();
    }
    progress!(
        quiet,
        "✓ {} codes → {} distinct partitions [{:.2}s]",
        enumerator.code_count(),
        ranked.len(),
        step2_start.elapsed().as_secs_f64()
    );

    // Step 3: Report
    if cli.json {
        println!("{}", render_json(&ranked).context("Failed to serialize ranking")?);
    } else {
        print!("{}", render_text(&ranked));
    }

    progress!(
        quiet,
        "Total execution: {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
