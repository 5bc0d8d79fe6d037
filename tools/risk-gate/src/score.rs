//! Signal aggregation: sum, normalize, clamp, band.

use crate::config::Config;
use crate::types::{Band, ChangeSet, RiskReport, Signals};

/// Blend the four signals into a report.
///
/// Integer division by the configured divisor compresses the unbounded-ish
/// raw sum into the 0-100 range, then the result is clamped.
pub fn aggregate(signals: &Signals, changed_files: ChangeSet, config: &Config) -> RiskReport {
  let raw = signals.path_risk + signals.secret_score + signals.prior_vuln + signals.threat_weight;
  let score = (raw / config.normalization_divisor.max(1)).min(100) as u8;
  RiskReport {
    score,
    band: Band::from_score(score),
    changed_files,
  }
}
