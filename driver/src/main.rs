use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use workflow::config::{Operation, WorkloadConfig};
use workflow::runner::Runner;

mod dataset;
mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Aggregate a field across a JSON record dataset")]
struct Args {
    /// Load a workload config from YAML (overrides the other input flags)
    #[arg(long)]
    workload: Option<PathBuf>,
    /// JSON array of flat objects to aggregate
    #[arg(long)]
    dataset: Option<PathBuf>,
    #[arg(long, default_value = "value")]
    field: String,
    /// Operation to run; repeat for several (defaults to sum, avg, min, max)
    #[arg(long = "op", value_enum)]
    operations: Vec<Operation>,
    /// Truncate values to integers before aggregating
    #[arg(long, default_value_t = false)]
    integer: bool,
    /// Number of synthetic records when no dataset is given
    #[arg(long)]
    generate: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write the JSON report here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workload = if let Some(path) = args.workload {
        WorkloadConfig::load(path)?
    } else {
        let mut config =
            WorkloadConfig::from_args(args.dataset, args.field, args.operations, args.integer);
        if let Some(records) = args.generate {
            let mut generator = config.generator_config();
            generator.records = records;
            generator.seed = args.seed;
            config.generator = Some(generator);
        }
        config
    };

    let runner = Runner::new(workload);
    let report = runner.run()?;
    let rendered = serde_json::to_string_pretty(&report).context("rendering report")?;

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, rendered.as_bytes())
                .with_context(|| format!("writing report {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
