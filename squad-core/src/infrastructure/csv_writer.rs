// squad-core/src/infrastructure/csv_writer.rs
//
// Serializes the QC table as comma-separated values.

use serde_json::Value;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::record::{COLUMNS, QcRecord, QcTable};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

#[instrument(skip(table), fields(rows = table.len()))]
pub fn write_csv(table: &QcTable, path: &Path) -> Result<(), InfrastructureError> {
    atomic_write(path, render_csv(table))?;
    info!(path = %path.display(), "💾 Summary table written");
    Ok(())
}

/// Header row, then one row per record in table order. Absent values are
/// empty fields.
pub fn render_csv(table: &QcTable) -> String {
    let mut csv = String::new();
    push_row(&mut csv, COLUMNS.iter().map(|c| c.to_string()));
    for record in table.records() {
        push_row(&mut csv, record_fields(record));
    }
    csv
}

fn push_row(csv: &mut String, fields: impl IntoIterator<Item = String>) {
    let line = fields
        .into_iter()
        .map(|field| escape_csv(&field))
        .collect::<Vec<_>>()
        .join(",");
    csv.push_str(&line);
    csv.push('\n');
}

fn record_fields(record: &QcRecord) -> [String; 9] {
    [
        opt(record.qc_mot_abs, format_number),
        opt(record.qc_mot_rel, format_number),
        opt(record.qc_cnr_avg.as_deref(), format_list),
        opt(record.qc_cnr_std.as_deref(), format_list),
        opt(record.qc_outliers_tot, format_number),
        opt(record.qc_params_avg.as_ref(), format_value),
        opt(record.qc_s2v_params_avg_std.as_ref(), format_value),
        opt(record.qc_vox_displ_std.as_ref(), format_value),
        record.subject_id.clone(),
    ]
}

fn opt<T>(value: Option<T>, render: impl Fn(T) -> String) -> String {
    value.map(render).unwrap_or_default()
}

/// Shortest round-trip form, integral values keep a `.0` (`1.0`, `0.25`).
pub fn format_number(value: f64) -> String {
    serde_json::Number::from_f64(value)
        .map(|n| n.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Bracketed list literal: `[10.1, 9.8]`.
pub fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
    format!("[{}]", items.join(", "))
}

/// Pass-through values: arrays as bracketed lists, top-level strings as is,
/// anything else as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => format_nested(other),
    }
}

fn format_nested(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(format_nested).collect();
            format!("[{}]", inner.join(", "))
        }
        other => other.to_string(),
    }
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
