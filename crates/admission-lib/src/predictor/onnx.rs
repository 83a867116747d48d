//! ONNX inference using tract
//!
//! Loads the pre-trained admission model via tract-onnx with the input
//! shape fixed to a single row of seven features.

use super::{AdmissionModel, InferenceError};
use crate::schema::NUM_FEATURES;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use tract_onnx::prelude::*;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Admission model loaded from an ONNX file
pub struct OnnxModel {
    model: TractModel,
}

impl OnnxModel {
    /// Load and optimize the model from `path`.
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let model = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .with_input_fact(0, f32::fact([1, NUM_FEATURES]).into())
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .into_optimized()
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?
            .into_runnable()
            .map_err(|e| InferenceError::ModelLoad(e.to_string()))?;
        info!(path = %path.display(), "admission model loaded");
        Ok(Self { model })
    }

    /// Reshape one feature row into the model's [1, 7] f32 input tensor
    fn row_to_tensor(row: &[f64; NUM_FEATURES]) -> Result<Tensor, InferenceError> {
        let data: Vec<f32> = row.iter().map(|&v| v as f32).collect();
        tract_ndarray::Array2::from_shape_vec((1, NUM_FEATURES), data)
            .map(Into::into)
            .map_err(|e| InferenceError::Inference(e.to_string()))
    }
}

impl AdmissionModel for OnnxModel {
    fn predict_row(&self, row: &[f64; NUM_FEATURES]) -> Result<f64, InferenceError> {
        let start = Instant::now();
        let input = Self::row_to_tensor(row)?;
        let result = self
            .model
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::Inference(e.to_string()))?;
        let output = result.get(0).ok_or(InferenceError::EmptyOutput)?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Inference(e.to_string()))?;
        let probability = view.iter().next().copied().ok_or(InferenceError::EmptyOutput)?;

        debug!(elapsed_us = start.elapsed().as_micros(), "inference completed");
        Ok(f64::from(probability))
    }
}
