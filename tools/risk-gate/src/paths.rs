//! Path sensitivity weights for changed files.

use crate::config::Config;
use crate::types::ChangeSet;

/// Weight for one path: the maximum matching prefix rule (not a sum), plus
/// the dependency-manifest bonus when the filename ends with a manifest
/// suffix.
pub fn path_weight(path: &str, config: &Config) -> u32 {
  let mut weight = config
    .path_rules
    .iter()
    .filter(|r| path.starts_with(r.prefix.as_str()))
    .map(|r| r.weight)
    .max()
    .unwrap_or(0);
  if config
    .manifest_suffixes
    .iter()
    .any(|s| path.ends_with(s.as_str()))
  {
    weight += config.manifest_bonus;
  }
  weight
}

/// Total path risk for a change set. Uncapped: more touched sensitive files
/// mean more risk; only the aggregator's normalization tames the total.
pub fn change_set_weight(changes: &ChangeSet, config: &Config) -> u32 {
  changes.iter().map(|p| path_weight(p, config)).sum()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn overlapping_prefixes_take_the_max_not_the_sum() {
    let config = Config::default();
    // Matches both "app/payments" (30) and "app/" (20).
    assert_eq!(path_weight("app/payments/charge.py", &config), 30);
  }

  #[test]
  fn unmatched_path_weighs_nothing() {
    let config = Config::default();
    assert_eq!(path_weight("scripts/build.sh", &config), 0);
  }

  #[test]
  fn manifest_bonus_is_additive() {
    let config = Config::default();
    assert_eq!(path_weight("app/payments/requirements.txt", &config), 45);
    assert_eq!(path_weight("requirements.txt", &config), 15);
  }

  #[test]
  fn change_set_weight_sums_per_path_scores() {
    let config = Config::default();
    let changes = vec![
      "app/payments/charge.py".to_string(),
      "docs/readme.md".to_string(),
      "k8s/deploy.yaml".to_string(),
    ];
    assert_eq!(change_set_weight(&changes, &config), 41);
  }

  #[test]
  fn duplicates_count_every_occurrence() {
    let config = Config::default();
    let changes = vec!["app/a.py".to_string(), "app/a.py".to_string()];
    assert_eq!(change_set_weight(&changes, &config), 40);
  }

  #[test]
  fn empty_change_set_weighs_nothing() {
    let config = Config::default();
    assert_eq!(change_set_weight(&vec![], &config), 0);
  }
}
