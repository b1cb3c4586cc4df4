// squad-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Malformed field '{field}' for subject '{subject}': expected {expected}")]
    #[diagnostic(
        code(squad::domain::malformed),
        help("Fix the QC file, or set 'malformed_policy: absent' to treat such values as missing.")
    )]
    MalformedField {
        subject: String,
        field: String,
        expected: String,
    },

    #[error("Ragged '{metric}' vectors: lengths range from {min} to {max}")]
    #[diagnostic(
        code(squad::domain::ragged),
        help("Subjects were acquired with different shell counts. Use '--ragged truncate' or '--ragged union'.")
    )]
    RaggedComponents {
        metric: String,
        min: usize,
        max: usize,
    },

    #[error("Nothing to plot: {0}")]
    #[diagnostic(
        code(squad::domain::no_data),
        help("Check that the folder contains QC files with motion metrics, or pass --no-plot.")
    )]
    NoPlottableData(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(squad::domain::config))]
    InvalidConfig(String),
}
