//! Threat level resolution from the operator environment.

use log::warn;

use crate::types::ThreatLevel;

/// Environment variable carrying the operator-set threat level.
pub const THREAT_LEVEL_VAR: &str = "THREAT_LEVEL";

/// Read `THREAT_LEVEL`. Absence is a valid, defaulted input (`Low`); an
/// unrecognized value resolves to `Unknown` (weight 0) with a warning.
pub fn resolve_from_env() -> ThreatLevel {
  match std::env::var(THREAT_LEVEL_VAR) {
    Ok(raw) => {
      let level = ThreatLevel::parse(&raw);
      if level == ThreatLevel::Unknown {
        warn!(
          "unrecognized {} value {:?}; scoring without an elevated threat",
          THREAT_LEVEL_VAR, raw
        );
      }
      level
    }
    Err(_) => ThreatLevel::Low,
  }
}
