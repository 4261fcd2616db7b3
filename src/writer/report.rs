//! Machine-readable JSON summary of a whole run (`--report`).

use crate::model::{Function, Language};
use crate::processor::Diagnostic;
use crate::ModuleOutcome;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub language: Language,
    pub had_errors: bool,
    pub modules: Vec<ModuleReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ModuleReport<'a> {
    pub module: &'a str,
    pub header: &'a str,
    pub stub_header: String,
    pub stub_implementation: String,
    pub functions: &'a [Function],
    pub diagnostics: Vec<DiagnosticReport>,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub line: usize,
    pub message: String,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(d: &Diagnostic) -> Self {
        Self {
            line: d.line,
            message: d.error.to_string(),
        }
    }
}

pub fn build<'a>(language: Language, outcomes: &'a [ModuleOutcome]) -> Report<'a> {
    let modules = outcomes
        .iter()
        .map(|m| ModuleReport {
            module: &m.module,
            header: &m.header,
            stub_header: m.files.header.display().to_string(),
            stub_implementation: m.files.implementation.display().to_string(),
            functions: &m.scan.functions,
            diagnostics: m.scan.diagnostics.iter().map(Into::into).collect(),
        })
        .collect();

    Report {
        language,
        had_errors: outcomes.iter().any(|m| m.scan.had_errors()),
        modules,
    }
}

pub fn emit(language: Language, outcomes: &[ModuleOutcome], path: &Path) -> Result<()> {
    let report = build(language, outcomes);
    let json = serde_json::to_string_pretty(&report).with_context(|| "Serialising run report")?;
    fs::write(path, json).with_context(|| format!("Writing {}", path.display()))?;
    Ok(())
}
