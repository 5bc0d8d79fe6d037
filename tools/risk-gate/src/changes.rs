//! Change-set collection from the version-control backend.
//!
//! Two-tier fallback: diff against the base branch; if that fails, treat
//! every tracked file as changed; if even the listing fails, the run is
//! unrecoverable.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::error::SourceError;
use crate::types::ChangeSet;

/// Narrow seam over the version-control backend.
pub trait ChangeSource {
  /// Paths modified between `base` and the current revision.
  fn changed_since(&self, base: &str) -> Result<ChangeSet, SourceError>;

  /// Every tracked path, used when the diff is unavailable.
  fn tracked_files(&self) -> Result<ChangeSet, SourceError>;
}

/// Collect the change set with the diff -> full-listing fallback.
///
/// A failure of the fallback itself propagates: nothing downstream can run
/// without some file list.
pub fn collect_changes(source: &dyn ChangeSource, base: &str) -> Result<ChangeSet, SourceError> {
  match source.changed_since(base) {
    Ok(paths) => Ok(paths),
    Err(e) => {
      warn!(
        "diff against {} unavailable ({}); treating every tracked file as changed",
        base, e
      );
      source.tracked_files()
    }
  }
}

/// `git` subprocess backend rooted at a working directory.
pub struct GitCli {
  root: PathBuf,
  timeout: Duration,
}

const POLL_INTERVAL: Duration = Duration::from_millis(20);

impl GitCli {
  pub fn new(root: &Path, timeout: Duration) -> Self {
    Self {
      root: root.to_path_buf(),
      timeout,
    }
  }

  /// Best-effort fetch so `origin/<base>` exists in shallow CI clones.
  fn fetch_base(&self, base: &str) {
    if let Err(e) = self.run_git(&["fetch", "origin", base, "--depth", "1"]) {
      debug!("fetch of {} failed ({}); diffing against the local ref", base, e);
    }
  }

  /// Run git with a deadline and return its stdout. Stdout is drained on a
  /// separate thread so a chatty command cannot fill the pipe and stall
  /// `try_wait`.
  fn run_git(&self, args: &[&str]) -> Result<String, SourceError> {
    let command = format!("git {}", args.join(" "));
    let mut child = Command::new("git")
      .args(args)
      .current_dir(&self.root)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::null())
      .spawn()
      .map_err(|e| SourceError::io(&command, e))?;

    let mut stdout = match child.stdout.take() {
      Some(s) => s,
      None => return Err(SourceError::backend(&command, "stdout not captured")),
    };
    let reader = thread::spawn(move || {
      let mut buf = Vec::new();
      let _ = stdout.read_to_end(&mut buf);
      buf
    });

    let status = self.wait_with_deadline(&mut child, &command)?;
    let raw = reader.join().unwrap_or_default();
    if !status.success() {
      return Err(SourceError::Exit { command, status });
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
  }

  fn wait_with_deadline(
    &self,
    child: &mut Child,
    command: &str,
  ) -> Result<ExitStatus, SourceError> {
    let deadline = Instant::now() + self.timeout;
    loop {
      match child.try_wait() {
        Ok(Some(status)) => return Ok(status),
        Ok(None) => {
          if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(SourceError::Timeout {
              command: command.to_string(),
              timeout: self.timeout,
            });
          }
          thread::sleep(POLL_INTERVAL);
        }
        Err(e) => return Err(SourceError::io(command, e)),
      }
    }
  }
}

impl ChangeSource for GitCli {
  fn changed_since(&self, base: &str) -> Result<ChangeSet, SourceError> {
    self.fetch_base(base);
    let range = format!("origin/{}...HEAD", base);
    let out = self.run_git(&["diff", "--name-only", &range])?;
    Ok(split_lines(&out))
  }

  fn tracked_files(&self) -> Result<ChangeSet, SourceError> {
    let out = self.run_git(&["ls-files"])?;
    Ok(split_lines(&out))
  }
}

/// Non-empty trimmed lines in command order.
fn split_lines(out: &str) -> ChangeSet {
  out
    .lines()
    .map(str::trim)
    .filter(|l| !l.is_empty())
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  struct FakeSource {
    diff: Option<ChangeSet>,
    tracked: Option<ChangeSet>,
  }

  impl ChangeSource for FakeSource {
    fn changed_since(&self, _base: &str) -> Result<ChangeSet, SourceError> {
      self
        .diff
        .clone()
        .ok_or_else(|| SourceError::backend("git diff", "simulated failure"))
    }

    fn tracked_files(&self) -> Result<ChangeSet, SourceError> {
      self
        .tracked
        .clone()
        .ok_or_else(|| SourceError::backend("git ls-files", "simulated failure"))
    }
  }

  #[test]
  fn diff_success_is_used_directly() {
    let source = FakeSource {
      diff: Some(vec!["app/a.py".into()]),
      tracked: Some(vec!["everything".into()]),
    };
    let changes = collect_changes(&source, "main").unwrap();
    assert_eq!(changes, vec!["app/a.py".to_string()]);
  }

  #[test]
  fn diff_failure_falls_back_to_tracked_files() {
    let source = FakeSource {
      diff: None,
      tracked: Some(vec!["a".into(), "b".into()]),
    };
    let changes = collect_changes(&source, "main").unwrap();
    assert_eq!(changes, vec!["a".to_string(), "b".to_string()]);
  }

  #[test]
  fn fallback_failure_is_fatal() {
    let source = FakeSource {
      diff: None,
      tracked: None,
    };
    let err = collect_changes(&source, "main").unwrap_err();
    assert!(err.to_string().contains("ls-files"));
  }

  #[test]
  fn empty_diff_is_a_valid_empty_change_set() {
    let source = FakeSource {
      diff: Some(vec![]),
      tracked: Some(vec!["unused".into()]),
    };
    let changes = collect_changes(&source, "main").unwrap();
    assert!(changes.is_empty());
  }

  #[test]
  fn split_lines_keeps_order_and_duplicates() {
    let out = "b.txt\na.txt\n\n  \nb.txt\n";
    assert_eq!(
      split_lines(out),
      vec!["b.txt".to_string(), "a.txt".to_string(), "b.txt".to_string()]
    );
  }
}
