// squad-core/src/ports/renderer.rs

// What the pipeline needs from a plotting backend, without knowing which one.

use std::path::Path;

use crate::domain::figure::Figure;
use crate::error::SquadError;

pub trait FigureRenderer {
    fn render(&self, figure: &Figure, out_path: &Path) -> Result<(), SquadError>;
}
