// squad-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contrat du rendu de figure.
pub mod ports;

// 2. Domain (Cœur du métier)
// Records QC, transposition des vecteurs CNR, statistiques, figure.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 3. Infrastructure (Adapters)
// JSON loader, CSV writer, config YAML, rendu SVG (plotters).
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration Load -> Visualize -> Write.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::SquadError;
