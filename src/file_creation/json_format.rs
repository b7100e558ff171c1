use crate::data_summary::report_batch::ReportBatch;
use serde::Serialize;

/// Wrapper structure for serializing a `ReportBatch` with the version that produced it.
///
/// # Fields
///
/// * `version` - Version of this crate.
/// * `batch` - The `ReportBatch` data, flattened into the JSON object.
#[derive(Serialize, Debug)]
pub struct JsonFormat<'a> {
    pub(crate) version: &'static str,
    #[serde(flatten)]
    pub(crate) batch: &'a ReportBatch,
}
