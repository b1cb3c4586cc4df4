// squad-core/src/domain/record.rs
//
// One QC record per subject, and the ordered table built from them.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::error::DomainError;
use crate::domain::policy::MalformedPolicy;

/// Fixed column order of the summary table (and of the CSV header).
pub const COLUMNS: [&str; 9] = [
    "qc_mot_abs",
    "qc_mot_rel",
    "qc_cnr_avg",
    "qc_cnr_std",
    "qc_outliers_tot",
    "qc_params_avg",
    "qc_s2v_params_avg_std",
    "qc_vox_displ_std",
    "subject_id",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarMetric {
    MotAbs,
    MotRel,
    OutliersTot,
}

impl ScalarMetric {
    pub fn name(self) -> &'static str {
        match self {
            ScalarMetric::MotAbs => "qc_mot_abs",
            ScalarMetric::MotRel => "qc_mot_rel",
            ScalarMetric::OutliersTot => "qc_outliers_tot",
        }
    }

    pub fn value(self, record: &QcRecord) -> Option<f64> {
        match self {
            ScalarMetric::MotAbs => record.qc_mot_abs,
            ScalarMetric::MotRel => record.qc_mot_rel,
            ScalarMetric::OutliersTot => record.qc_outliers_tot,
        }
    }
}

/// Per-shell metrics stored as one number per acquisition component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorMetric {
    CnrAvg,
    CnrStd,
}

impl VectorMetric {
    pub fn name(self) -> &'static str {
        match self {
            VectorMetric::CnrAvg => "qc_cnr_avg",
            VectorMetric::CnrStd => "qc_cnr_std",
        }
    }

    pub fn value(self, record: &QcRecord) -> Option<&[f64]> {
        match self {
            VectorMetric::CnrAvg => record.qc_cnr_avg.as_deref(),
            VectorMetric::CnrStd => record.qc_cnr_std.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QcRecord {
    pub qc_mot_abs: Option<f64>,
    pub qc_mot_rel: Option<f64>,
    pub qc_cnr_avg: Option<Vec<f64>>,
    pub qc_cnr_std: Option<Vec<f64>>,
    pub qc_outliers_tot: Option<f64>,
    pub qc_params_avg: Option<Value>,
    pub qc_s2v_params_avg_std: Option<Value>,
    pub qc_vox_displ_std: Option<Value>,
    pub subject_id: String,
}

impl QcRecord {
    /// Builds a record from a parsed QC document.
    ///
    /// Missing keys and JSON `null` are absent values. Keys holding the wrong
    /// shape go through `policy`. Unknown keys are ignored.
    pub fn from_json(
        subject_id: impl Into<String>,
        doc: &Map<String, Value>,
        policy: MalformedPolicy,
    ) -> Result<Self, DomainError> {
        let subject_id = subject_id.into();
        let reader = FieldReader {
            subject: &subject_id,
            doc,
            policy,
        };

        Ok(QcRecord {
            qc_mot_abs: reader.scalar("qc_mot_abs")?,
            qc_mot_rel: reader.scalar("qc_mot_rel")?,
            qc_cnr_avg: reader.vector("qc_cnr_avg")?,
            qc_cnr_std: reader.vector("qc_cnr_std")?,
            qc_outliers_tot: reader.scalar("qc_outliers_tot")?,
            qc_params_avg: reader.passthrough("qc_params_avg"),
            qc_s2v_params_avg_std: reader.passthrough("qc_s2v_params_avg_std"),
            qc_vox_displ_std: reader.passthrough("qc_vox_displ_std"),
            subject_id,
        })
    }
}

struct FieldReader<'a> {
    subject: &'a str,
    doc: &'a Map<String, Value>,
    policy: MalformedPolicy,
}

impl FieldReader<'_> {
    fn present(&self, key: &str) -> Option<&Value> {
        self.doc.get(key).filter(|v| !v.is_null())
    }

    fn scalar(&self, key: &str) -> Result<Option<f64>, DomainError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => match v.as_f64() {
                Some(n) => Ok(Some(n)),
                None => self.malformed(key, "a number"),
            },
        }
    }

    fn vector(&self, key: &str) -> Result<Option<Vec<f64>>, DomainError> {
        let Some(v) = self.present(key) else {
            return Ok(None);
        };
        let parsed = v
            .as_array()
            .and_then(|items| items.iter().map(Value::as_f64).collect::<Option<Vec<_>>>());
        match parsed {
            Some(values) => Ok(Some(values)),
            None => self.malformed(key, "an array of numbers"),
        }
    }

    fn passthrough(&self, key: &str) -> Option<Value> {
        self.present(key).cloned()
    }

    fn malformed<T>(&self, key: &str, expected: &str) -> Result<Option<T>, DomainError> {
        match self.policy {
            MalformedPolicy::Reject => Err(DomainError::MalformedField {
                subject: self.subject.to_string(),
                field: key.to_string(),
                expected: expected.to_string(),
            }),
            MalformedPolicy::Absent => {
                warn!(subject = self.subject, field = key, "⚠️  Malformed value treated as absent");
                Ok(None)
            }
        }
    }
}

/// Ordered cohort table. Row order is the order records were pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QcTable {
    records: Vec<QcRecord>,
}

impl QcTable {
    pub fn new(records: Vec<QcRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: QcRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[QcRecord] {
        &self.records
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Present values of a scalar metric, absent rows dropped.
    pub fn scalar_values(&self, metric: ScalarMetric) -> Vec<f64> {
        self.records.iter().filter_map(|r| metric.value(r)).collect()
    }

    /// Present vectors of a per-shell metric, absent rows dropped.
    pub fn vector_values(&self, metric: VectorMetric) -> Vec<&[f64]> {
        self.records.iter().filter_map(|r| metric.value(r)).collect()
    }
}
