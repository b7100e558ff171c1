use crate::data_summary::report_batch::ReportBatch;
use crate::file_creation::file_creation_error::FileCreationError;
use crate::file_creation::json_format::JsonFormat;

use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serializes a `ReportBatch` into a JSON string tagged with the crate version.
///
/// # Arguments
///
/// * `batch` - The reports to serialize.
/// * `pretty` - Whether to indent the output.
///
/// # Returns
///
/// The serialized JSON string, or a `FileCreationError` if serialization fails.
pub fn generate_json(batch: &ReportBatch, pretty: bool) -> Result<String, FileCreationError> {
    let wrapper = JsonFormat {
        version: VERSION,
        batch,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&wrapper)?
    } else {
        serde_json::to_string(&wrapper)?
    };
    Ok(json)
}

/// Writes a `ReportBatch` as JSON, followed by a newline, to any writer.
pub fn write_json<W: Write>(
    writer: W,
    batch: &ReportBatch,
    pretty: bool,
) -> Result<(), FileCreationError> {
    let json_output = generate_json(batch, pretty)?;

    let mut writer = BufWriter::new(writer);
    writer
        .write_all(json_output.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .and_then(|()| writer.flush())
        .map_err(FileCreationError::FileWrite)
}

/// Creates a JSON file from a `ReportBatch` at the specified filename.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by `FileCreationError`.
pub fn create_json_file(
    filename: &str,
    batch: &ReportBatch,
    pretty: bool,
) -> Result<(), FileCreationError> {
    let file = File::create(filename).map_err(|source| FileCreationError::FileCreation {
        filename: filename.to_owned(),
        source,
    })?;
    write_json(file, batch, pretty)?;

    info!(filename, reports = batch.reports.len(), "wrote reports");
    Ok(())
}
