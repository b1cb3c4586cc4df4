// squad-core/src/application/report.rs
//
// Console side channel: what was loaded, before anything is drawn.

use comfy_table::Table;

use crate::domain::record::{QcTable, ScalarMetric, VectorMetric};
use crate::infrastructure::csv_writer::format_number;

/// Per-subject outlier totals, in table order.
pub fn outliers_table(table: &QcTable) -> Table {
    let mut out = Table::new();
    out.set_header(vec!["subject_id", ScalarMetric::OutliersTot.name()]);
    for record in table.records() {
        let value = record
            .qc_outliers_tot
            .map(format_number)
            .unwrap_or_else(|| "-".to_string());
        out.add_row(vec![record.subject_id.clone(), value]);
    }
    out
}

/// One line per vector metric: how many subjects carry it and which
/// lengths were seen.
pub fn component_summary(table: &QcTable) -> Vec<String> {
    [VectorMetric::CnrAvg, VectorMetric::CnrStd]
        .into_iter()
        .map(|metric| {
            let rows = table.vector_values(metric);
            let mut lengths: Vec<usize> = rows.iter().map(|r| r.len()).collect();
            lengths.sort_unstable();
            lengths.dedup();
            let lengths: Vec<String> = lengths.iter().map(|l| l.to_string()).collect();
            format!(
                "{}: {}/{} subjects, lengths [{}]",
                metric.name(),
                rows.len(),
                table.len(),
                lengths.join(", ")
            )
        })
        .collect()
}
