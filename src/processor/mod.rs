//! Header scanner – drives the line parser over one header file.
//!
//! A bad line never aborts the header: it is logged, recorded as a
//! `Diagnostic` and skipped, and the remaining lines are still scanned.

use crate::model::Function;
use crate::parser::{self, ParseError};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// A line that looked like a declaration but could not be stubbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number within the header.
    pub line: usize,
    pub error: ParseError,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// In file order; the emitter writes stubs in this order.
    pub functions: Vec<Function>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    pub fn had_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Read `path` as UTF-8 and scan it. Only I/O problems are errors here;
/// parse failures end up in `ScanResult::diagnostics`.
pub fn scan(path: &Path) -> Result<ScanResult> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    Ok(scan_source(&path.display().to_string(), &source))
}

/// Scan already-loaded header text. `origin` is only used in log output.
pub fn scan_source(origin: &str, source: &str) -> ScanResult {
    let mut result = ScanResult::default();

    for (idx, line) in source.lines().enumerate() {
        let line_number = idx + 1;
        match parser::parse(line) {
            Ok(Some(function)) => {
                info!("{origin}:{line_number} Found {function}");
                result.functions.push(function);
            }
            Ok(None) => {}
            Err(error) => {
                warn!("{origin}:{line_number} {error}");
                result.diagnostics.push(Diagnostic {
                    line: line_number,
                    error,
                });
            }
        }
    }

    result
}
