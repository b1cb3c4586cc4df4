// squad-core/src/domain/transpose.rs
//
// Turns per-subject CNR vectors into per-component samples.

use tracing::warn;

use crate::domain::error::DomainError;
use crate::domain::policy::RaggedPolicy;

/// Transposes `rows` (one vector per subject) into components: the i-th
/// output holds the i-th entry of every subject, in subject order.
///
/// An empty input gives no components.
pub fn transpose_components(
    metric: &str,
    rows: &[&[f64]],
    policy: RaggedPolicy,
) -> Result<Vec<Vec<f64>>, DomainError> {
    let (Some(min), Some(max)) = (
        rows.iter().map(|r| r.len()).min(),
        rows.iter().map(|r| r.len()).max(),
    ) else {
        return Ok(Vec::new());
    };

    let width = if min == max {
        min
    } else {
        match policy {
            RaggedPolicy::Strict => {
                return Err(DomainError::RaggedComponents {
                    metric: metric.to_string(),
                    min,
                    max,
                });
            }
            RaggedPolicy::Truncate => {
                warn!(
                    metric,
                    kept = min,
                    longest = max,
                    "✂️  Ragged vectors truncated to the shortest length"
                );
                min
            }
            RaggedPolicy::Union => max,
        }
    };

    let components = (0..width)
        .map(|i| rows.iter().filter_map(|r| r.get(i).copied()).collect())
        .collect();

    Ok(components)
}
