// squad-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(squad::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- QC FILES (JSON) ---
    #[error("JSON Parsing Error in {path:?}: {source}")]
    #[diagnostic(
        code(squad::infra::json),
        help("Every *.json file in the folder must be a valid JSON document.")
    )]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("QC file {0:?} does not hold a JSON object")]
    #[diagnostic(code(squad::infra::not_an_object))]
    NotAnObject(PathBuf),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(squad::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(squad::infra::config_missing))]
    ConfigNotFound(String),

    // --- PLOTTING ---
    #[error("Figure Rendering Error: {0}")]
    #[diagnostic(code(squad::infra::render))]
    Render(String),
}
