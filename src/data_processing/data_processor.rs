use crate::data_processing::raw_record::RawRecord;
use crate::data_processing::record_load_error::RecordLoadError;
use crate::data_summary::bedwars_report::BedWarsReport;
use crate::data_summary::data_summarizer::summarize;
use crate::data_summary::report_batch::ReportBatch;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{read_dir, read_to_string};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Summarizes every raw record found at `input_path`, in parallel.
///
/// # Arguments
///
/// * `input_path` - A single JSON record file, or a directory whose `*.json` files are records.
/// * `num_threads` - Worker count for the thread pool. `None` lets rayon decide.
///
/// # Returns
///
/// A `ReportBatch` with one report per readable record, keyed by file stem. Unreadable
/// files are logged and left out. Fails only when the directory cannot be listed or
/// the thread pool cannot be built.
pub fn process_records_in_parallel(
    input_path: &Path,
    num_threads: Option<usize>,
) -> Result<ReportBatch, RecordLoadError> {
    let thread_pool = ThreadPoolBuilder::new()
        .num_threads(num_threads.unwrap_or(0))
        .build()?;

    let paths = collect_record_files(input_path)?;
    info!(
        files = paths.len(),
        threads = thread_pool.current_num_threads(),
        "processing records"
    );

    let reports = thread_pool.install(|| {
        paths
            .par_iter()
            .map(process_file)
            .reduce(BTreeMap::new, merge_reports)
    });

    info!(reports = reports.len(), "finished processing records");
    Ok(ReportBatch { reports })
}

/// Loads one raw record from a JSON file.
///
/// # Returns
///
/// The record, or a `RecordLoadError` if the file cannot be read, is not JSON, or is
/// not a JSON object.
pub fn load_record(path: &Path) -> Result<RawRecord, RecordLoadError> {
    let content = read_to_string(path).map_err(|source| RecordLoadError::Read {
        path: path.to_owned(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| RecordLoadError::Parse {
        path: path.to_owned(),
        source,
    })?;

    match value {
        Value::Object(fields) => Ok(RawRecord::from(fields)),
        _ => Err(RecordLoadError::NotAnObject {
            path: path.to_owned(),
        }),
    }
}

/// Collects the record files to process.
///
/// A file path is returned as-is. For a directory, every `*.json` entry is returned,
/// sorted so that logs are stable between runs.
fn collect_record_files(input_path: &Path) -> Result<Vec<PathBuf>, RecordLoadError> {
    if !input_path.is_dir() {
        return Ok(vec![input_path.to_owned()]);
    }

    let dir = read_dir(input_path).map_err(|source| RecordLoadError::ReadDir {
        path: input_path.to_owned(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = dir
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Summarizes a single record file.
///
/// A file that fails to load is logged and yields an empty map.
fn process_file(path: &PathBuf) -> BTreeMap<String, BedWarsReport> {
    let mut local_reports = BTreeMap::new();

    match load_record(path) {
        Ok(record) => {
            debug!(path = %path.display(), "summarizing record");
            local_reports.insert(record_name(path), summarize(&record));
        }
        Err(err) => warn!("skipping record: {}", err),
    }

    local_reports
}

/// Name a report is stored under: the file stem, or the whole path if there is none.
fn record_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Merges the reports of one file into the accumulated reports.
fn merge_reports(
    mut final_reports: BTreeMap<String, BedWarsReport>,
    local_reports: BTreeMap<String, BedWarsReport>,
) -> BTreeMap<String, BedWarsReport> {
    final_reports.extend(local_reports);
    final_reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "bedwars-stats-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn processes_every_json_file_in_a_directory() {
        let dir = scratch_dir("dir");
        fs::write(dir.join("alice.json"), r#"{"wins_bedwars": 4, "Experience": 500}"#).unwrap();
        fs::write(dir.join("bob.json"), r#"{"wins_bedwars": "7"}"#).unwrap();
        fs::write(dir.join("notes.txt"), "not a record").unwrap();

        let batch = process_records_in_parallel(&dir, Some(2)).unwrap();

        assert_eq!(batch.reports.len(), 2);
        assert_eq!(batch.reports["alice"].overall.wins, 4);
        assert_eq!(batch.reports["alice"].level, 1.0);
        assert_eq!(batch.reports["bob"].overall.wins, 7);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn skips_malformed_files() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("good.json"), r#"{"kills_bedwars": 1}"#).unwrap();
        fs::write(dir.join("broken.json"), "{ not json").unwrap();
        fs::write(dir.join("array.json"), "[1, 2, 3]").unwrap();

        let batch = process_records_in_parallel(&dir, Some(1)).unwrap();

        let names: Vec<String> = batch.reports.keys().cloned().collect();
        assert_eq!(names, vec!["good".to_owned()]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn processes_a_single_file() {
        let dir = scratch_dir("single");
        let path = dir.join("carol.json");
        fs::write(&path, r#"{"coins": 10}"#).unwrap();

        let batch = process_records_in_parallel(&path, None).unwrap();

        assert_eq!(batch.reports["carol"].coins, 10);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_record_rejects_non_objects() {
        let dir = scratch_dir("non-object");
        let path = dir.join("number.json");
        fs::write(&path, "42").unwrap();

        assert!(matches!(
            load_record(&path),
            Err(RecordLoadError::NotAnObject { .. })
        ));
        assert!(matches!(
            load_record(&dir.join("missing.json")),
            Err(RecordLoadError::Read { .. })
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
