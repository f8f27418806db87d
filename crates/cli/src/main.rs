use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;
use tricmp::cfg::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TESTS};
use tricmp::harness::{Algorithm, Corpus, HarnessCfg, Report, Verdict};

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-in-triangle classifier comparison")]
struct Cmd {
    /// Defaults to `run` with default options
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a corpus, time both classifiers, print verdict and timings
    Run(RunArgs),
    /// Print a small provenance JSON block for the given corpus options
    Report(CorpusArgs),
}

#[derive(Args, Clone, Debug, PartialEq, Eq, Serialize)]
struct CorpusArgs {
    /// Number of (triangle, point) test cases
    #[arg(long, default_value_t = DEFAULT_TESTS)]
    tests: usize,
    /// Corpus seed; derived from the system clock when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Collinear redraws allowed per case (0 = unbounded)
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
}

impl Default for CorpusArgs {
    fn default() -> Self {
        Self {
            tests: DEFAULT_TESTS,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CorpusArgs {
    fn harness_cfg(&self) -> HarnessCfg {
        HarnessCfg {
            tests: self.tests,
            seed: self.seed.unwrap_or_else(clock_seed),
            max_attempts: (self.max_attempts > 0).then_some(self.max_attempts),
        }
    }
}

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
struct RunArgs {
    #[command(flatten)]
    corpus: CorpusArgs,
    /// Exit with status 1 when the classifiers disagree
    #[arg(long)]
    strict_exit: bool,
}

fn main() -> Result<ExitCode> {
    // stdout carries only the report
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action.unwrap_or_else(|| Action::Run(RunArgs::default())) {
        Action::Run(args) => run(args),
        Action::Report(args) => report(args).map(|()| ExitCode::SUCCESS),
    }
}

fn run(args: RunArgs) -> Result<ExitCode> {
    let cfg = args.corpus.harness_cfg();
    tracing::info!(
        tests = cfg.tests,
        seed = cfg.seed,
        max_attempts = ?cfg.max_attempts,
        "run"
    );

    let start = Instant::now();
    let corpus = Corpus::generate(&cfg)
        .with_context(|| format!("generating corpus (seed {})", cfg.seed))?;
    tracing::info!(elapsed_ms = millis(start.elapsed()), "corpus_generated");

    let report = Report::from_corpus(&corpus);
    for algorithm in Algorithm::ALL {
        tracing::info!(
            algo = algorithm.label(),
            elapsed_ms = millis(report.elapsed(algorithm)),
            "pass"
        );
    }
    match report.verdict {
        Verdict::Success => {
            tracing::info!(tests = report.tests, seed = cfg.seed, "classifiers_agree")
        }
        Verdict::Failure { first_mismatch } => tracing::warn!(
            tests = report.tests,
            seed = cfg.seed,
            first_mismatch,
            "classifiers_disagree"
        ),
    }
    println!("{report}");

    if args.strict_exit && !report.verdict.is_success() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[inline]
fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

fn report(args: CorpusArgs) -> Result<()> {
    let params = serde_json::to_value(&args)?;
    let doc = provenance::Payload::new(params).document();
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Milliseconds since the epoch, truncated to 32 bits.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_millis() % (1u128 << 32)) as u64)
        .unwrap_or(0)
}
