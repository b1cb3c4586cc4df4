// squad-core/src/domain/configuration.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::policy::{MalformedPolicy, RaggedPolicy};

#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SquadConfig {
    #[serde(default)]
    pub ragged_policy: RaggedPolicy,

    #[serde(default)]
    pub malformed_policy: MalformedPolicy,

    /// Upper bound on per-component panels per row.
    #[validate(range(min = 1, max = 16, message = "max_columns must be within 1..=16"))]
    #[serde(default = "default_max_columns")]
    pub max_columns: usize,

    #[validate(range(min = 100, max = 4000))]
    #[serde(default = "default_panel_width")]
    pub panel_width: u32,

    #[validate(range(min = 100, max = 4000))]
    #[serde(default = "default_panel_height")]
    pub panel_height: u32,

    #[serde(default)]
    pub jitter_seed: u64,
}

impl Default for SquadConfig {
    fn default() -> Self {
        Self {
            ragged_policy: RaggedPolicy::default(),
            malformed_policy: MalformedPolicy::default(),
            max_columns: default_max_columns(),
            panel_width: default_panel_width(),
            panel_height: default_panel_height(),
            jitter_seed: 0,
        }
    }
}

fn default_max_columns() -> usize {
    4
}
fn default_panel_width() -> u32 {
    400
}
fn default_panel_height() -> u32 {
    300
}
