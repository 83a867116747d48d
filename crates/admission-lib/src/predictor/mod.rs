//! Admission probability inference

mod onnx;

pub use onnx::OnnxModel;

use crate::schema::{FeatureVector, NUM_FEATURES};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by model loading and inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("failed to load model: {0}")]
    ModelLoad(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("model returned an empty output tensor")]
    EmptyOutput,
}

/// The externally supplied inference component.
///
/// Implementations take one feature row in schema order and return the raw
/// admission probability. A value outside [0, 1] is passed through to the
/// caller unaltered: a misbehaving model is reported, not corrected.
pub trait AdmissionModel: Send + Sync {
    fn predict_row(&self, row: &[f64; NUM_FEATURES]) -> Result<f64, InferenceError>;
}

/// Wraps an injected model handle behind the prediction contract.
///
/// The handle is immutable and shared for the process lifetime; tests
/// substitute a stub without touching any other component.
pub struct PredictionService {
    model: Arc<dyn AdmissionModel>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn AdmissionModel>) -> Self {
        Self { model }
    }

    /// Probability for a single record
    pub fn predict_one(&self, vector: &FeatureVector) -> Result<f64, InferenceError> {
        self.model.predict_row(vector.values())
    }

    /// Probabilities for a batch, in input order.
    ///
    /// Exactly equivalent to calling [`predict_one`](Self::predict_one) once
    /// per vector; the first failure aborts the batch.
    pub fn predict_batch(&self, vectors: &[FeatureVector]) -> Result<Vec<f64>, InferenceError> {
        vectors.iter().map(|v| self.predict_one(v)).collect()
    }
}
