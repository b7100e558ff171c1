use crate::data_summary::bedwars_report::BedWarsReport;

use serde::Serialize;
use std::collections::BTreeMap;

/// Reports produced from a batch of record files.
///
/// # Fields
///
/// * `reports` - A `BTreeMap` where:
///   - The key is the record's name (its file stem).
///   - The value is the `BedWarsReport` summarized from it.
#[derive(Serialize, Debug, Default)]
pub struct ReportBatch {
    pub reports: BTreeMap<String, BedWarsReport>,
}
