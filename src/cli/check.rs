//! Check command implementation.
//!
//! Parses every discovered STL file and reports all diagnostics, in the
//! same spirit as a linter: human-readable status on stderr, optional
//! JSON on stdout, non-zero exit when anything failed.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::discover_stl_files;
use crate::error::{Result, StlError};
use crate::output::{display_path, plural, Printer};
use crate::parser::{parse_file, Diagnostic};

/// Check STL files and report every parse problem
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (directories are searched for .stl files)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Emit results as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Per-file result in `--json` output.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    name: String,
    triangles: usize,
    success: bool,
    diagnostics: Vec<Diagnostic>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let files = discover_stl_files(&args.paths);
    if files.is_empty() {
        return Err(StlError::Check {
            message: "no .stl files found".to_string(),
            help: Some("pass .stl files, or directories containing them".to_string()),
        });
    }

    let printer = Printer::new();
    let mut reports = Vec::new();
    let mut failed = 0;

    for file in &files {
        let shown = display_path(file);
        match parse_file(file) {
            Ok(report) => {
                let success = report.is_success();
                if !args.json {
                    if success {
                        printer.status("Checking", &shown);
                    } else {
                        printer.error("Checking", &shown);
                    }
                    print_diagnostics(&printer, &report.diagnostics);
                }
                if !success {
                    failed += 1;
                }
                reports.push(FileReport {
                    file: shown,
                    name: report.solid.name.clone(),
                    triangles: report.solid.triangle_count(),
                    success,
                    diagnostics: report.diagnostics.as_slice().to_vec(),
                });
            }
            Err(e) => {
                // Unreadable files are reported alongside parse failures
                // rather than aborting the remaining checks.
                if !args.json {
                    printer.error("Checking", &shown);
                    eprintln!("  {}", e);
                }
                failed += 1;
                reports.push(FileReport {
                    file: shown,
                    name: String::new(),
                    triangles: 0,
                    success: false,
                    diagnostics: Vec::new(),
                });
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if failed == 0 {
        eprintln!("Checked {}, all clean.", plural(files.len(), "file", "files"));
    }

    if failed > 0 {
        return Err(StlError::Check {
            message: format!(
                "{} of {} failed to parse cleanly",
                failed,
                plural(files.len(), "file", "files")
            ),
            help: None,
        });
    }
    Ok(())
}

/// Print a report's diagnostics indented under its status line.
fn print_diagnostics(printer: &Printer, diagnostics: &crate::parser::Diagnostics) {
    for d in diagnostics.iter() {
        let label = printer.severity("error", true);
        eprintln!("  {}[{}]: {}", label, d.kind.code(), d);
    }
}
