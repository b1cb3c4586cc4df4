// squad/src/commands/run.rs
//
// USE CASE: Summarise a QC folder (Load -> Visualize -> Write).

use anyhow::Context;

use squad_core::application::{RunRequest, default_figure_path, run_squad};
use squad_core::infrastructure::config::load_config;
use squad_core::infrastructure::plot::SvgRenderer;

use crate::cli::Cli;

pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration{}",
            cli.config
                .as_ref()
                .map(|p| format!(" from {:?}", p))
                .unwrap_or_default()
        )
    })?;
    if let Some(policy) = cli.ragged {
        config.ragged_policy = policy;
    }

    let figure_path = if cli.no_plot {
        None
    } else {
        Some(
            cli.figure
                .unwrap_or_else(|| default_figure_path(&cli.output_file)),
        )
    };

    let request = RunRequest {
        input_dir: cli.folder_path,
        output_csv: cli.output_file,
        figure_path,
        config,
    };
    tracing::debug!(?request, "Run request");

    let result = run_squad(&SvgRenderer, &request).with_context(|| {
        format!(
            "Failed to summarise QC folder {:?}",
            request.input_dir
        )
    })?;

    println!("Data written to {}", result.output_csv.display());
    Ok(())
}
