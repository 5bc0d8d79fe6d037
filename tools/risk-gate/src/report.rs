//! Report emission: the boundary CI (or any outer layer) consumes.

use std::io::Write;

use crate::error::GateError;
use crate::types::RiskReport;

/// Write the report as pretty-printed JSON with a trailing newline.
pub fn emit<W: Write>(report: &RiskReport, mut out: W) -> Result<(), GateError> {
  serde_json::to_writer_pretty(&mut out, report)?;
  writeln!(out)?;
  Ok(())
}
