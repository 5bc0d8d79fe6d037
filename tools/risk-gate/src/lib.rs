//! Risk Gate — composite change-risk scoring for CI (rule-based, V1).
//!
//! Pipeline: collect the change set from git, weigh changed paths by
//! location sensitivity, scan their contents for leaked-credential patterns,
//! blend in a prior-vulnerability placeholder and the operator threat level,
//! and reduce everything to a 0-100 score with a LOW/MEDIUM/HIGH band.
//!
//! No AI, no DB, no network of its own; git is the only external process.
//! Used by the binary for the CLI surface; can also be called as a library.

pub mod changes;
pub mod config;
pub mod error;
pub mod paths;
pub mod prior;
pub mod report;
pub mod score;
pub mod secrets;
pub mod threat;
pub mod types;

pub use config::{Config, PathWeightRule, SecretPatternSet};
pub use error::{GateError, SourceError};
pub use types::{Band, ChangeSet, RiskReport, Signals, ThreatLevel};

use changes::ChangeSource;
use prior::PriorEstimator;
use secrets::SecretScanner;

/// Run the scoring pipeline against explicit collaborators.
///
/// Only change-set acquisition can fail: the scanner and the estimator
/// absorb their own I/O problems, and every step after collection is pure.
pub fn score_change(
  source: &dyn ChangeSource,
  scanner: &SecretScanner,
  prior: &dyn PriorEstimator,
  threat: ThreatLevel,
  config: &Config,
  base: &str,
) -> Result<RiskReport, GateError> {
  let changed = changes::collect_changes(source, base)?;
  let signals = Signals {
    path_risk: paths::change_set_weight(&changed, config),
    secret_score: scanner.scan(&changed).score(config),
    prior_vuln: prior.estimate(),
    threat_weight: threat.weight(),
  };
  Ok(score::aggregate(&signals, changed, config))
}
