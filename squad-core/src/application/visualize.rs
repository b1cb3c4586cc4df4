// squad-core/src/application/visualize.rs
//
// Table -> Figure: decides which panels exist and where they sit.

use tracing::{info, warn};

use crate::domain::configuration::SquadConfig;
use crate::domain::error::DomainError;
use crate::domain::figure::{Figure, GridLayout, Panel, PanelSlot, ViolinGroup};
use crate::domain::record::{QcTable, ScalarMetric, VectorMetric};
use crate::domain::transpose::transpose_components;

pub const MOTION_TITLE: &str = "Distribution of qc_mot_abs and qc_mot_rel";

pub fn build_figure(table: &QcTable, config: &SquadConfig) -> Result<Figure, DomainError> {
    let mot_abs = table.scalar_values(ScalarMetric::MotAbs);
    let mot_rel = table.scalar_values(ScalarMetric::MotRel);
    if mot_abs.is_empty() && mot_rel.is_empty() {
        return Err(DomainError::NoPlottableData(format!(
            "no subject has {} or {} ({} rows loaded)",
            ScalarMetric::MotAbs.name(),
            ScalarMetric::MotRel.name(),
            table.len()
        )));
    }

    let avg = components(table, VectorMetric::CnrAvg, config)?;
    let std = components(table, VectorMetric::CnrStd, config)?;
    info!(
        cnr_avg = avg.len(),
        cnr_std = std.len(),
        "📊 Component panels"
    );

    let layout = GridLayout::compute(avg.len(), std.len(), config.max_columns);

    let mut panels = Vec::with_capacity(1 + avg.len() + std.len());
    panels.push(Panel {
        title: MOTION_TITLE.to_string(),
        x_label: "Metrics".to_string(),
        y_label: "Values".to_string(),
        slot: layout.motion_slot(),
        groups: vec![
            ViolinGroup::new(ScalarMetric::MotAbs.name(), mot_abs),
            ViolinGroup::new(ScalarMetric::MotRel.name(), mot_rel),
        ],
    });

    for (i, values) in avg.into_iter().enumerate() {
        panels.push(component_panel(VectorMetric::CnrAvg, i, values, layout.avg_slot(i)));
    }
    for (i, values) in std.into_iter().enumerate() {
        panels.push(component_panel(VectorMetric::CnrStd, i, values, layout.std_slot(i)));
    }

    Ok(Figure {
        layout,
        panels,
        panel_width: config.panel_width,
        panel_height: config.panel_height,
        jitter_seed: config.jitter_seed,
    })
}

fn components(
    table: &QcTable,
    metric: VectorMetric,
    config: &SquadConfig,
) -> Result<Vec<Vec<f64>>, DomainError> {
    let rows = table.vector_values(metric);
    if rows.is_empty() {
        warn!(metric = metric.name(), "No subject carries this metric, no panel drawn");
    }
    transpose_components(metric.name(), &rows, config.ragged_policy)
}

fn component_panel(
    metric: VectorMetric,
    index: usize,
    values: Vec<f64>,
    slot: PanelSlot,
) -> Panel {
    Panel {
        title: format!("Distribution of {} {}", metric.name(), index + 1),
        x_label: metric.name().to_string(),
        y_label: "Values".to_string(),
        slot,
        groups: vec![ViolinGroup::new("", values)],
    }
}
