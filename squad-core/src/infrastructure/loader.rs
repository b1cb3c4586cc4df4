// squad-core/src/infrastructure/loader.rs
//
// Reads a folder of per-subject QC JSON files into a QcTable.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::domain::policy::MalformedPolicy;
use crate::domain::record::{QcRecord, QcTable};
use crate::error::SquadError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::list_files_with_extension;

/// Subject identifier: the file name up to its first `.`.
pub fn subject_id_from_file_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

#[instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load_qc_table(dir: &Path, policy: MalformedPolicy) -> Result<QcTable, SquadError> {
    let files = list_files_with_extension(dir, "json")?;
    info!(count = files.len(), "📂 QC files found");

    let mut table = QcTable::default();
    for path in files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let subject_id = subject_id_from_file_name(&file_name);
        debug!(file = %file_name, subject = subject_id, "Reading QC file");

        let content = fs::read_to_string(&path).map_err(InfrastructureError::Io)?;
        let doc: Value =
            serde_json::from_str(&content).map_err(|source| InfrastructureError::Json {
                path: path.clone(),
                source,
            })?;
        let Value::Object(map) = doc else {
            return Err(InfrastructureError::NotAnObject(path).into());
        };

        table.push(QcRecord::from_json(subject_id, &map, policy)?);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use anyhow::{Context, Result};
    use tempfile::tempdir;

    fn by_subject<'a>(table: &'a QcTable, id: &str) -> Result<&'a QcRecord> {
        table
            .records()
            .iter()
            .find(|r| r.subject_id == id)
            .with_context(|| format!("subject {} missing", id))
    }

    #[test]
    fn test_subject_id_cuts_at_first_dot() {
        assert_eq!(subject_id_from_file_name("sub-01.json"), "sub-01");
        assert_eq!(subject_id_from_file_name("sub-01.qc.json"), "sub-01");
        assert_eq!(subject_id_from_file_name(".json"), "");
    }

    #[test]
    fn test_load_example_cohort() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("sub1.json"),
            r#"{"qc_mot_abs": 0.5, "qc_mot_rel": 0.3, "qc_cnr_avg": [10.1, 9.8]}"#,
        )?;
        fs::write(dir.path().join("sub2.json"), r#"{"qc_mot_abs": 0.7}"#)?;
        fs::write(dir.path().join("README.md"), "not a QC file")?;

        let table = load_qc_table(dir.path(), MalformedPolicy::Reject)?;
        assert_eq!(table.len(), 2);

        let sub1 = by_subject(&table, "sub1")?;
        assert_eq!(sub1.qc_mot_rel, Some(0.3));
        assert_eq!(sub1.qc_cnr_avg, Some(vec![10.1, 9.8]));

        let sub2 = by_subject(&table, "sub2")?;
        assert_eq!(sub2.qc_mot_abs, Some(0.7));
        assert_eq!(sub2.qc_mot_rel, None);
        assert_eq!(sub2.qc_cnr_avg, None);
        Ok(())
    }

    #[test]
    fn test_missing_key_only_affects_its_row() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.json"), r#"{"qc_mot_rel": 0.1}"#)?;
        fs::write(dir.path().join("b.json"), r#"{"qc_mot_abs": 0.4, "qc_mot_rel": 0.2}"#)?;

        let table = load_qc_table(dir.path(), MalformedPolicy::Reject)?;
        assert_eq!(by_subject(&table, "a")?.qc_mot_abs, None);
        assert_eq!(by_subject(&table, "b")?.qc_mot_abs, Some(0.4));
        Ok(())
    }

    #[test]
    fn test_empty_folder_gives_empty_table_with_columns() -> Result<()> {
        let dir = tempdir()?;
        let table = load_qc_table(dir.path(), MalformedPolicy::Reject)?;
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 9);
        assert_eq!(table.columns().last(), Some(&"subject_id"));
        Ok(())
    }

    #[test]
    fn test_invalid_json_aborts() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("ok.json"), r#"{"qc_mot_abs": 1.0}"#)?;
        fs::write(dir.path().join("broken.json"), "{ not json")?;

        let res = load_qc_table(dir.path(), MalformedPolicy::Reject);
        assert!(matches!(
            res,
            Err(SquadError::Infrastructure(InfrastructureError::Json { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_top_level_array_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("list.json"), "[1, 2]")?;
        let res = load_qc_table(dir.path(), MalformedPolicy::Reject);
        assert!(matches!(
            res,
            Err(SquadError::Infrastructure(InfrastructureError::NotAnObject(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_malformed_field_follows_policy() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("s.json"), r#"{"qc_mot_abs": "high"}"#)?;

        let strict = load_qc_table(dir.path(), MalformedPolicy::Reject);
        assert!(matches!(
            strict,
            Err(SquadError::Domain(DomainError::MalformedField { .. }))
        ));

        let lenient = load_qc_table(dir.path(), MalformedPolicy::Absent)?;
        assert_eq!(lenient.records()[0].qc_mot_abs, None);
        Ok(())
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let res = load_qc_table(Path::new("/no/such/qc/folder"), MalformedPolicy::Reject);
        assert!(res.is_err());
    }
}
