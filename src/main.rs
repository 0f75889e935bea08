use anyhow::Result;
use clap::Parser;

use community_verifier::community::{self, CommunityKind};
use community_verifier::storage::{self, CandidateReport};
use community_verifier::{data, Config};

#[derive(Parser, Debug)]
#[clap(
    name = "community-verifier",
    about = "Check candidate vertex subsets against weak, strong and bounded community definitions"
)]
struct Cli {
    /// Path to the JSON graph document
    #[clap(long)]
    graph: String,

    /// Path to the JSON array of candidate label lists
    #[clap(long)]
    candidates: String,

    /// Minimum fraction (0.0-1.0) of the graph's nodes a community must contain
    #[clap(long, default_value = "0.0")]
    lower_bound: f64,

    /// Only report candidates of this kind
    /// (bounded, weak, weak-weighted, strong, strong-weighted);
    /// other candidates are dropped after this single check
    #[clap(long)]
    kind: Option<CommunityKind>,

    /// Write the report to this file instead of stdout
    #[clap(long)]
    output: Option<String>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(args.lower_bound, args.kind, args.threads);
    config.validate()?;

    let num_threads = config.worker_threads();
    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    // 1. Load inputs
    let graph = data::load_graph(&args.graph)?;
    let candidates = data::load_candidates(&args.candidates, &graph)?;

    // 2. Evaluate the candidates of the requested kind
    let reports = community::report_candidates(&graph, &candidates, config.lower_bound, config.kind)?;

    let results: Vec<CandidateReport> = reports
        .into_iter()
        .map(|(index, report)| CandidateReport::new(&graph, index, &candidates[index], report))
        .collect();

    log::info!("Reporting {} of {} candidates", results.len(), candidates.len());

    // 3. Emit results
    match &args.output {
        Some(path) => storage::save_reports(path, &results)?,
        None => storage::write_reports(std::io::stdout().lock(), &results)?,
    }

    Ok(())
}
