// squad/src/cli.rs
//
// Single source of truth for the CLI definition (Clap structs).

use clap::Parser;
use std::path::PathBuf;

use squad_core::domain::RaggedPolicy;

/// Printed on stdout whenever the arguments cannot be parsed.
pub const USAGE: &str = "Usage: squad <folder_path> <output_file.csv>";

#[derive(Parser, Debug)]
#[command(name = "squad")]
#[command(about = "Summarises per-subject eddy QC files into a CSV table and violin plots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Folder holding one QC JSON file per subject
    pub folder_path: PathBuf,

    /// Where to write the summary table
    pub output_file: PathBuf,

    /// Where to save the figure (default: <output stem>_violin.svg)
    #[arg(long)]
    pub figure: Option<PathBuf>,

    /// Skip the figure, only write the table
    #[arg(long, conflicts_with = "figure")]
    pub no_plot: bool,

    /// Handling of CNR vectors with different lengths: truncate | strict | union
    #[arg(long)]
    pub ragged: Option<RaggedPolicy>,

    /// Optional YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_cli_parse_positionals() -> Result<()> {
        let cli = Cli::try_parse_from(["squad", "qc_dir", "out.csv"])?;
        assert_eq!(cli.folder_path.to_string_lossy(), "qc_dir");
        assert_eq!(cli.output_file.to_string_lossy(), "out.csv");
        assert!(!cli.no_plot);
        assert_eq!(cli.ragged, None);
        Ok(())
    }

    #[test]
    fn test_cli_parse_options() -> Result<()> {
        let cli = Cli::try_parse_from([
            "squad",
            "qc_dir",
            "out.csv",
            "--ragged",
            "union",
            "--figure",
            "/tmp/fig.svg",
        ])?;
        assert_eq!(cli.ragged, Some(RaggedPolicy::Union));
        assert_eq!(cli.figure, Some(PathBuf::from("/tmp/fig.svg")));
        Ok(())
    }

    #[test]
    fn test_cli_rejects_wrong_positional_count() {
        assert!(Cli::try_parse_from(["squad", "qc_dir"]).is_err());
        assert!(Cli::try_parse_from(["squad", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["squad", "a", "b", "--ragged", "maybe"]).is_err());
    }

    #[test]
    fn test_no_plot_conflicts_with_figure() {
        assert!(
            Cli::try_parse_from(["squad", "a", "b", "--no-plot", "--figure", "f.svg"]).is_err()
        );
    }
}
