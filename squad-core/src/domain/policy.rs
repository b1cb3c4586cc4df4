// squad-core/src/domain/policy.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when subjects carry CNR vectors of different lengths.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum RaggedPolicy {
    /// Keep the components every subject has (shortest length wins).
    #[default]
    Truncate,
    /// Refuse mismatched lengths.
    Strict,
    /// Keep every component; each one gathers the subjects that have it.
    Union,
}

/// What to do when a known key holds a value of the wrong shape.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    #[default]
    Reject,
    Absent,
}

impl fmt::Display for RaggedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RaggedPolicy::Truncate => "truncate",
            RaggedPolicy::Strict => "strict",
            RaggedPolicy::Union => "union",
        };
        f.write_str(s)
    }
}

impl FromStr for RaggedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(RaggedPolicy::Truncate),
            "strict" => Ok(RaggedPolicy::Strict),
            "union" => Ok(RaggedPolicy::Union),
            other => Err(format!(
                "unknown ragged policy '{}' (expected truncate, strict or union)",
                other
            )),
        }
    }
}

impl fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPolicy::Reject => f.write_str("reject"),
            MalformedPolicy::Absent => f.write_str("absent"),
        }
    }
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(MalformedPolicy::Reject),
            "absent" => Ok(MalformedPolicy::Absent),
            other => Err(format!(
                "unknown malformed policy '{}' (expected reject or absent)",
                other
            )),
        }
    }
}
