// squad-core/src/ports/mod.rs

pub mod renderer;

pub use renderer::FigureRenderer;
