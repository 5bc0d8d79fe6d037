//! Core types for the risk gate (report contract + internal models).

use serde::Serialize;

/// Changed file paths in collector order. Duplicates are kept.
pub type ChangeSet = Vec<String>;

// ---------------------------------------------------------------------------
// Threat level
// ---------------------------------------------------------------------------

/// Operator-supplied contextual risk modifier, independent of the change
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatLevel {
  Low,
  Elevated,
  Severe,
  /// A set but unrecognized value. Scores like `Low`.
  Unknown,
}

impl ThreatLevel {
  /// Loose, case-insensitive parse. Unrecognized input is `Unknown`, not an
  /// error.
  pub fn parse(s: &str) -> Self {
    match s.to_ascii_lowercase().as_str() {
      "low" => Self::Low,
      "elevated" => Self::Elevated,
      "severe" => Self::Severe,
      _ => Self::Unknown,
    }
  }

  pub fn weight(self) -> u32 {
    match self {
      Self::Low | Self::Unknown => 0,
      Self::Elevated => 10,
      Self::Severe => 25,
    }
  }
}

// ---------------------------------------------------------------------------
// Band
// ---------------------------------------------------------------------------

/// Coarse severity tier, a pure function of the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Band {
  Low,
  Medium,
  High,
}

impl Band {
  pub fn from_score(score: u8) -> Self {
    if score >= 70 {
      Self::High
    } else if score >= 40 {
      Self::Medium
    } else {
      Self::Low
    }
  }
}

// ---------------------------------------------------------------------------
// Signals + report
// ---------------------------------------------------------------------------

/// The four integer signals the aggregator blends.
#[derive(Debug, Clone, Copy)]
pub struct Signals {
  pub path_risk: u32,
  pub secret_score: u32,
  pub prior_vuln: u32,
  pub threat_weight: u32,
}

/// Final report: the JSON contract CI consumes. Exactly these three fields.
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
  pub score: u8,
  pub band: Band,
  pub changed_files: ChangeSet,
}
