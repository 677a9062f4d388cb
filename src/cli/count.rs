//! Count command implementation.
//!
//! Parses one file and prints the count summary. Parse problems are
//! printed first but do not fail the process; only an unreadable file
//! does.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::parse_file;

/// Count the triangles in an STL file
#[derive(Args, Debug)]
pub struct CountArgs {
    /// STL file to read
    pub file: PathBuf,
}

pub fn run(args: CountArgs) -> Result<()> {
    let report = parse_file(&args.file)?;

    for diagnostic in report.diagnostics.iter() {
        println!("{}", diagnostic);
    }
    println!(
        "{} has {} triangles",
        report.solid.name,
        report.solid.triangle_count()
    );

    Ok(())
}
