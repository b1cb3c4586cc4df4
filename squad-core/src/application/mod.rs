// squad-core/src/application/mod.rs

pub mod pipeline;
pub mod report;
pub mod visualize;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI fait `use squad_core::application::{run_squad, RunRequest};`
// sans connaître la structure interne des fichiers.

pub use pipeline::{RunRequest, RunResult, default_figure_path, run_squad};
pub use visualize::build_figure;
