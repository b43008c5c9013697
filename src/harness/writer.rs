use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::models::CaseRecord;

/// Artifact file for one endpoint's raw body: `<case_no>_<endpoint>`.
pub fn artifact_path(dir: &Path, case_no: usize, endpoint: u8) -> PathBuf {
    dir.join(format!("{case_no}_{endpoint}"))
}

/// Comparison record file for one case: `<case_no>.txt`.
pub fn record_path(dir: &Path, case_no: usize) -> PathBuf {
    dir.join(format!("{case_no}.txt"))
}

pub(super) fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("writing artifact {}", path.display()))
}

pub(super) fn write_case_record(dir: &Path, record: &CaseRecord) -> Result<()> {
    let path = record_path(dir, record.case_no);
    let json = serde_json::to_vec(record).context("serializing case record")?;
    fs::write(&path, json).with_context(|| format!("writing case record {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::harness::models::FetchRecord;
    use tempfile::tempdir;

    fn empty_record(status_code: u16) -> FetchRecord {
        FetchRecord {
            elapsed_millis: 0,
            status_code,
            response_headers: BTreeMap::new(),
            image_type: "unknown".to_string(),
            height: -1,
            width: -1,
        }
    }

    #[test]
    fn names_are_deterministic() {
        let dir = Path::new("out");
        assert_eq!(artifact_path(dir, 0, 1), dir.join("0_1"));
        assert_eq!(artifact_path(dir, 0, 2), dir.join("0_2"));
        assert_eq!(artifact_path(dir, 17, 1), dir.join("17_1"));
        assert_eq!(record_path(dir, 17), dir.join("17.txt"));
    }

    #[test]
    fn artifact_bytes_are_written_verbatim() -> Result<()> {
        let temp = tempdir()?;
        let path = artifact_path(temp.path(), 0, 1);
        let body = [0u8, 159, 146, 150];

        write_artifact(&path, &body)?;
        assert_eq!(fs::read(&path)?, body);
        Ok(())
    }

    #[test]
    fn record_file_carries_the_wire_contract() -> Result<()> {
        let temp = tempdir()?;
        let record = CaseRecord {
            case_no: 5,
            result1: empty_record(200),
            result2: empty_record(404),
        };

        write_case_record(temp.path(), &record)?;

        let raw = fs::read_to_string(record_path(temp.path(), 5))?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        assert_eq!(value["case_no"], 5);
        assert_eq!(value["result1"]["status_code"], 200);
        assert_eq!(value["result2"]["status_code"], 404);
        assert!(raw.contains("elasped_millis"));
        Ok(())
    }
}
