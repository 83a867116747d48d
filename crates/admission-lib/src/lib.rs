//! Admission prediction library
//!
//! This crate provides the core pipeline for the admission predictor CLI:
//! - Fixed seven-feature input schema
//! - Scalar input validation
//! - Interactive feature vector assembly
//! - ONNX inference behind the `AdmissionModel` seam
//! - Probability banding and report formatting
//! - CSV batch prediction

pub mod batch;
pub mod builder;
pub mod predictor;
pub mod report;
pub mod schema;
pub mod validator;

pub use batch::{BatchError, BatchReport, BatchRunner};
pub use builder::{FeatureVectorBuilder, InputSource, PromptReply};
pub use predictor::{AdmissionModel, InferenceError, OnnxModel, PredictionService};
pub use report::{summarize, Band, BatchSummary};
pub use schema::{FeatureVector, FieldKind, FieldSpec, NUM_FEATURES, SCHEMA};
pub use validator::ValidationError;
