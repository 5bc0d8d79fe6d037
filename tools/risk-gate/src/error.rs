//! Structured error types for the risk gate.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Failures from a change source (the git backend).
#[derive(Debug, Error)]
pub enum SourceError {
  #[error("{command}: {source}")]
  Io {
    command: String,
    #[source]
    source: io::Error,
  },

  #[error("{command}: exited with {status}")]
  Exit { command: String, status: ExitStatus },

  #[error("{command}: timed out after {timeout:?}")]
  Timeout { command: String, timeout: Duration },

  #[error("{command}: {reason}")]
  Backend { command: String, reason: String },
}

impl SourceError {
  pub fn io(command: &str, source: io::Error) -> Self {
    Self::Io {
      command: command.to_string(),
      source,
    }
  }

  pub fn backend(command: &str, reason: impl Into<String>) -> Self {
    Self::Backend {
      command: command.to_string(),
      reason: reason.into(),
    }
  }
}

/// Pipeline-level failures. Only change-set acquisition can escalate here;
/// the scanner and the estimator absorb their own I/O problems.
#[derive(Debug, Error)]
pub enum GateError {
  #[error("change source: {0}")]
  Source(#[from] SourceError),

  #[error("report: {0}")]
  Report(#[from] serde_json::Error),

  #[error("write: {0}")]
  Write(#[from] io::Error),
}
