// squad-core/src/domain/mod.rs

pub mod configuration;
pub mod error;
pub mod figure;
pub mod policy;
pub mod record;
pub mod stats;
pub mod transpose;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use configuration::SquadConfig;
pub use error::DomainError;
pub use policy::{MalformedPolicy, RaggedPolicy};
pub use record::{COLUMNS, QcRecord, QcTable, ScalarMetric, VectorMetric};
