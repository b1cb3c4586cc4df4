// squad-core/src/application/pipeline.rs
//
// Load -> Visualize -> Write. Each step runs to completion before the next.

use std::path::{Path, PathBuf};
use tracing::instrument;

use crate::application::report::{component_summary, outliers_table};
use crate::application::visualize::build_figure;
use crate::domain::configuration::SquadConfig;
use crate::error::SquadError;
use crate::infrastructure::csv_writer::write_csv;
use crate::infrastructure::loader::load_qc_table;
use crate::ports::renderer::FigureRenderer;

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input_dir: PathBuf,
    pub output_csv: PathBuf,
    /// `None` skips the Visualizer.
    pub figure_path: Option<PathBuf>,
    pub config: SquadConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub subjects: usize,
    pub panels: usize,
    pub figure_path: Option<PathBuf>,
    pub output_csv: PathBuf,
}

/// Default figure location: next to the CSV, `<stem>_violin.svg`.
pub fn default_figure_path(output_csv: &Path) -> PathBuf {
    let stem = output_csv
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "squad".to_string());
    output_csv.with_file_name(format!("{}_violin.svg", stem))
}

#[instrument(skip(renderer, request), fields(input = %request.input_dir.display()))]
pub fn run_squad<R: FigureRenderer>(
    renderer: &R,
    request: &RunRequest,
) -> Result<RunResult, SquadError> {
    // 1. LOADER
    let table = load_qc_table(&request.input_dir, request.config.malformed_policy)?;
    println!("📂 Loaded {} subjects", table.len());

    // 2. VISUALIZER
    let mut panels = 0;
    if let Some(figure_path) = &request.figure_path {
        println!("{}", outliers_table(&table));
        for line in component_summary(&table) {
            println!("   {}", line);
        }

        let figure = build_figure(&table, &request.config)?;
        panels = figure.panels.len();
        renderer.render(&figure, figure_path)?;
        println!("🎻 Figure saved to {}", figure_path.display());
    }

    // 3. WRITER
    write_csv(&table, &request.output_csv)?;

    Ok(RunResult {
        subjects: table.len(),
        panels,
        figure_path: request.figure_path.clone(),
        output_csv: request.output_csv.clone(),
    })
}
