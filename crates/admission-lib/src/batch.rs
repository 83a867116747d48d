//! Batch CSV prediction
//!
//! Reads a delimited table with a header row, runs the model over every row,
//! appends the probability columns, and writes the augmented table next to
//! the input.

use crate::predictor::{InferenceError, PredictionService};
use crate::report::{self, format_percent, BatchSummary};
use crate::schema::{FeatureVector, NUM_FEATURES, SCHEMA};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Name of the appended raw-probability column
pub const PROBABILITY_COLUMN: &str = "Chance_Admissao";

/// Name of the appended percentage-string column
pub const PERCENT_COLUMN: &str = "Chance_Admissao_Percentual";

/// Suffix inserted before the extension of the output file
pub const OUTPUT_SUFFIX: &str = "_resultados";

/// Errors from a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read input table: {0}")]
    ReadFailed(#[from] csv::Error),
    #[error("input table is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("row {row}: column \"{column}\" is not numeric")]
    BadCell { row: usize, column: String },
    #[error("row {row}: {source}")]
    Inference {
        row: usize,
        #[source]
        source: InferenceError,
    },
    #[error("input table has no data rows")]
    EmptyTable,
    #[error("failed to write output table: {0}")]
    WriteFailed(csv::Error),
}

/// Outcome of a successful batch run
#[derive(Debug)]
pub struct BatchReport {
    pub output_path: PathBuf,
    pub rows: usize,
    pub summary: BatchSummary,
}

/// Runs predictions over every row of a CSV table.
pub struct BatchRunner<'a> {
    service: &'a PredictionService,
}

impl<'a> BatchRunner<'a> {
    pub fn new(service: &'a PredictionService) -> Self {
        Self { service }
    }

    /// Predict every row of `input` and write the augmented table next to it.
    ///
    /// Batch input is trusted as pre-validated: cells are parsed as numbers
    /// but never range-checked. The run is all-or-nothing; the output file is
    /// only written once every row has predicted successfully, so no failure
    /// mode leaves a partial file behind.
    pub fn run(&self, input: &Path) -> Result<BatchReport, BatchError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(input)?;
        let headers = reader.headers()?.clone();
        let indices = resolve_columns(&headers)?;

        let mut rows: Vec<csv::StringRecord> = Vec::new();
        let mut probabilities: Vec<f64> = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let vector = extract_vector(&record, &indices, row)?;
            let probability = self
                .service
                .predict_one(&vector)
                .map_err(|source| BatchError::Inference { row, source })?;
            probabilities.push(probability);
            rows.push(record);
        }

        let summary = match report::summarize(&probabilities) {
            Some(summary) => summary,
            None => return Err(BatchError::EmptyTable),
        };

        let output_path = derive_output_path(input);
        let mut writer = csv::Writer::from_path(&output_path).map_err(BatchError::WriteFailed)?;
        let mut out_headers = headers.clone();
        out_headers.push_field(PROBABILITY_COLUMN);
        out_headers.push_field(PERCENT_COLUMN);
        writer.write_record(&out_headers).map_err(BatchError::WriteFailed)?;
        for (record, &probability) in rows.iter().zip(probabilities.iter()) {
            let mut augmented = record.clone();
            augmented.push_field(&probability.to_string());
            augmented.push_field(&format_percent(probability));
            writer.write_record(&augmented).map_err(BatchError::WriteFailed)?;
        }
        writer
            .flush()
            .map_err(|e| BatchError::WriteFailed(e.into()))?;

        info!(rows = rows.len(), output = %output_path.display(), "batch prediction written");
        Ok(BatchReport {
            output_path,
            rows: rows.len(),
            summary,
        })
    }
}

/// Resolve each schema column to its index in the header row, reporting all
/// missing names at once. Matching is exact and case-sensitive.
fn resolve_columns(headers: &csv::StringRecord) -> Result<[usize; NUM_FEATURES], BatchError> {
    let mut indices = [0usize; NUM_FEATURES];
    let mut missing = Vec::new();
    for (slot, field) in indices.iter_mut().zip(SCHEMA.iter()) {
        match headers.iter().position(|h| h == field.name) {
            Some(idx) => *slot = idx,
            None => missing.push(field.name.to_string()),
        }
    }
    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(BatchError::MissingColumns(missing))
    }
}

/// Pull the seven feature cells out of one row by the resolved indices.
/// No FieldValidator here: batch tables are trusted.
fn extract_vector(
    record: &csv::StringRecord,
    indices: &[usize; NUM_FEATURES],
    row: usize,
) -> Result<FeatureVector, BatchError> {
    let mut values = [0.0; NUM_FEATURES];
    for ((slot, &idx), field) in values.iter_mut().zip(indices.iter()).zip(SCHEMA.iter()) {
        let cell = record.get(idx).unwrap_or("");
        *slot = cell.parse().map_err(|_| BatchError::BadCell {
            row,
            column: field.name.to_string(),
        })?;
    }
    Ok(FeatureVector::new(values))
}

/// `data.csv` -> `data_resultados.csv`, preserving directory and extension.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{OUTPUT_SUFFIX}.{ext}"),
        None => format!("{stem}{OUTPUT_SUFFIX}"),
    };
    input.with_file_name(name)
}
