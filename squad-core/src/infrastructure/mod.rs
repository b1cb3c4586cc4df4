// squad-core/src/infrastructure/mod.rs

pub mod config;
pub mod csv_writer;
pub mod error;
pub mod fs;
pub mod loader;
pub mod plot;
