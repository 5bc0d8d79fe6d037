//! Binary entrypoint: score the working tree's change against a base branch
//! and print one pretty JSON report to stdout.
//!
//! Exit code is 0 for every handled condition — a HIGH band is a signal for
//! CI to act on, not a process failure. The one carve-out: when the git
//! backend is entirely unusable (the diff and the tracked-file fallback both
//! fail) there is no report to print, and the process exits 1 with the error
//! on stderr.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;

use risk_gate::changes::GitCli;
use risk_gate::prior::FileListingPrior;
use risk_gate::secrets::SecretScanner;
use risk_gate::{report, score_change, threat, Config, GateError, SecretPatternSet};

#[derive(Parser, Debug)]
#[command(
  name = "risk-gate",
  about = "Composite change-risk score for CI gating"
)]
struct Args {
  /// Base branch to diff against.
  #[arg(long, default_value = "main")]
  base_branch: String,

  /// Repository root to score.
  #[arg(long, default_value = ".")]
  repo: PathBuf,
}

fn main() {
  // Logs go to stderr; stdout carries only the JSON report.
  env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
  let args = Args::parse();
  if let Err(e) = run(&args) {
    eprintln!("risk-gate: {}", e);
    process::exit(1);
  }
}

fn run(args: &Args) -> Result<(), GateError> {
  let config = Config::default();
  let source = GitCli::new(&args.repo, config.git_timeout);
  let scanner = SecretScanner::new(&args.repo, SecretPatternSet::default(), &config);
  let prior = FileListingPrior::new(&args.repo);
  let threat = threat::resolve_from_env();

  let report = score_change(&source, &scanner, &prior, threat, &config, &args.base_branch)?;
  report::emit(&report, io::stdout().lock())
}
