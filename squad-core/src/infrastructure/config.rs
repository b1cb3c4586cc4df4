// squad-core/src/infrastructure/config.rs

use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::configuration::SquadConfig;
use crate::domain::error::DomainError;
use crate::domain::policy::{MalformedPolicy, RaggedPolicy};
use crate::error::SquadError;
use crate::infrastructure::error::InfrastructureError;

pub const ENV_RAGGED_POLICY: &str = "SQUAD_RAGGED_POLICY";
pub const ENV_MALFORMED_POLICY: &str = "SQUAD_MALFORMED_POLICY";
pub const ENV_MAX_COLUMNS: &str = "SQUAD_MAX_COLUMNS";

/// Loads the run configuration.
///
/// Layers: defaults, then the optional YAML file, then `SQUAD_*` environment
/// variables. The result is validated before it is returned.
#[instrument]
pub fn load_config(config_path: Option<&Path>) -> Result<SquadConfig, SquadError> {
    let mut config = match config_path {
        Some(path) => load_file(path)?,
        None => SquadConfig::default(),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok());

    validate(&config)?;
    Ok(config)
}

fn load_file(path: &Path) -> Result<SquadConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    info!(path = ?path, "Loading configuration file");
    let content = fs::read_to_string(path)?;
    // An empty file means "all defaults".
    if content.trim().is_empty() {
        return Ok(SquadConfig::default());
    }
    Ok(serde_yaml::from_str(&content)?)
}

/// Environment layer. Unparseable values are ignored with a warning.
pub fn apply_overrides(config: &mut SquadConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup(ENV_RAGGED_POLICY) {
        match val.parse::<RaggedPolicy>() {
            Ok(policy) => {
                info!(old = %config.ragged_policy, new = %policy, "Overriding ragged policy via ENV");
                config.ragged_policy = policy;
            }
            Err(e) => warn!(var = ENV_RAGGED_POLICY, "Ignoring override: {}", e),
        }
    }
    if let Some(val) = lookup(ENV_MALFORMED_POLICY) {
        match val.parse::<MalformedPolicy>() {
            Ok(policy) => {
                info!(old = %config.malformed_policy, new = %policy, "Overriding malformed policy via ENV");
                config.malformed_policy = policy;
            }
            Err(e) => warn!(var = ENV_MALFORMED_POLICY, "Ignoring override: {}", e),
        }
    }
    if let Some(val) = lookup(ENV_MAX_COLUMNS) {
        match val.trim().parse::<usize>() {
            Ok(cols) => config.max_columns = cols,
            Err(e) => warn!(var = ENV_MAX_COLUMNS, value = %val, "Ignoring override: {}", e),
        }
    }
}

pub fn validate(config: &SquadConfig) -> Result<(), DomainError> {
    config
        .validate()
        .map_err(|e| DomainError::InvalidConfig(e.to_string()))
}
