pub mod check;
pub mod completions;
pub mod count;

use clap::{Parser, Subcommand};

/// tricount - ASCII STL triangle counter
#[derive(Parser, Debug)]
#[command(name = "tricount")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count the triangles in an STL file
    Count(count::CountArgs),

    /// Check STL files and report every parse problem
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_count() {
        let cli = Cli::try_parse_from(["tricount", "count", "cube.stl"]).unwrap();
        match cli.command {
            Commands::Count(args) => {
                assert_eq!(args.file.to_str(), Some("cube.stl"));
            }
            other => panic!("expected count, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_check_with_json() {
        let cli = Cli::try_parse_from(["tricount", "check", "--json", "a.stl", "parts"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert!(args.json);
                assert_eq!(args.paths.len(), 2);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_requires_check_paths() {
        assert!(Cli::try_parse_from(["tricount", "check"]).is_err());
    }
}
