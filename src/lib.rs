pub mod cli;
pub mod logging;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing::info;

use crate::processor::ScanResult;
use crate::writer::c::StubFiles;

/// What happened to one input header.
#[derive(Debug)]
pub struct ModuleOutcome {
    pub module: String,
    /// The header path as given on the command line.
    pub header: String,
    pub scan: ScanResult,
    pub files: StubFiles,
}

/// Outcomes for every header, in command-line order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub modules: Vec<ModuleOutcome>,
}

impl RunSummary {
    /// True when any line of any header failed to parse.
    pub fn had_errors(&self) -> bool {
        self.modules.iter().any(|m| m.scan.had_errors())
    }
}

/// Module name of a header: its file name without extension.
pub fn module_name(header: &Path) -> Result<String> {
    header
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("cannot derive a module name from {}", header.display()))
}

/// Generate stubs for every header in `args`, strictly in order.
///
/// Parse problems are logged and reflected in `RunSummary::had_errors`;
/// any I/O failure stops the run and is returned.
pub fn run(args: &cli::Cli) -> Result<RunSummary> {
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Creating {}", args.output_dir.display()))?;

    let mut summary = RunSummary::default();

    for header in &args.headers {
        let module = module_name(header)?;

        // 1. ── Scan ───────────────────────────────────────────────────
        let scan = processor::scan(header)?;

        // 2. ── Emit ───────────────────────────────────────────────────
        let header_text = header.display().to_string();
        let files = writer::c::emit(
            &module,
            &header_text,
            &scan.functions,
            args.language,
            &args.output_dir,
        )
        .with_context(|| format!("Writing stubs for {}", header.display()))?;

        info!(
            "{}: {} stubs -> {}, {}",
            header_text,
            scan.functions.len(),
            files.header.display(),
            files.implementation.display()
        );

        summary.modules.push(ModuleOutcome {
            module,
            header: header_text,
            scan,
            files,
        });
    }

    // 3. ── Report ─────────────────────────────────────────────────────
    if let Some(path) = &args.report {
        writer::report::emit(args.language, &summary.modules, path)?;
    }

    Ok(summary)
}
