//! End-to-end pipeline tests against a stub model

use admission_lib::{
    report, AdmissionModel, BatchRunner, Band, FeatureVector, FeatureVectorBuilder, InferenceError,
    InputSource, PredictionService, PromptReply, ValidationError, NUM_FEATURES,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Stub predictor returning 0.75 for the default vector and 0.30 otherwise
struct ThresholdModel;

impl AdmissionModel for ThresholdModel {
    fn predict_row(&self, row: &[f64; NUM_FEATURES]) -> Result<f64, InferenceError> {
        if row == FeatureVector::defaults().values() {
            Ok(0.75)
        } else {
            Ok(0.30)
        }
    }
}

/// Input source that answers every prompt with a blank line
struct AllBlank;

impl InputSource for AllBlank {
    fn prompt(&mut self, _field: &admission_lib::FieldSpec) -> PromptReply {
        PromptReply::Entered(String::new())
    }

    fn report_invalid(&mut self, field: &admission_lib::FieldSpec, _error: &ValidationError) {
        panic!("blank input must never be validated (field {})", field.name);
    }

    fn report_default(&mut self, _field: &admission_lib::FieldSpec, _value: f64) {}
}

#[test]
fn interactive_flow_with_defaults() {
    let service = PredictionService::new(Arc::new(ThresholdModel));

    let vector = FeatureVectorBuilder::build(&mut AllBlank).expect("build must complete");
    assert_eq!(vector.values(), &[312.0, 109.0, 3.0, 3.0, 3.0, 8.69, 0.0]);

    let probability = service.predict_one(&vector).unwrap();
    assert_eq!(probability, 0.75);
    assert_eq!(Band::from_probability(probability), Band::Medium);

    let rendered = report::format_single(&vector, probability);
    assert!(rendered.contains("75.00%"));
    assert!(rendered.contains(Band::Medium.label()));
}

#[test]
fn batch_flow_writes_augmented_table_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("applicants.csv");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "GRE Score,TOEFL Score,University Rating,SOP,LOR,CGPA,Research").unwrap();
    writeln!(file, "312,109,3,3,3,8.69,0").unwrap();
    drop(file);

    let service = PredictionService::new(Arc::new(ThresholdModel));
    let report = BatchRunner::new(&service).run(&input).unwrap();

    assert_eq!(report.rows, 1);
    assert_eq!(report.summary.mean, 0.75);
    assert_eq!(report.summary.max, 0.75);
    assert_eq!(report.summary.min, 0.75);
    assert_eq!(
        report.output_path,
        dir.path().join("applicants_resultados.csv")
    );

    let written = std::fs::read_to_string(&report.output_path).unwrap();
    let data_row = written.lines().nth(1).unwrap();
    assert!(data_row.ends_with("0.75,75.00%"));
}

#[test]
fn batch_matches_per_row_prediction_order() {
    let service = PredictionService::new(Arc::new(ThresholdModel));
    let vectors = vec![
        FeatureVector::defaults(),
        FeatureVector::new([300.0, 100.0, 2.0, 2.0, 2.0, 7.0, 0.0]),
        FeatureVector::defaults(),
    ];
    let batch = service.predict_batch(&vectors).unwrap();
    let singles: Vec<f64> = vectors
        .iter()
        .map(|v| service.predict_one(v).unwrap())
        .collect();
    assert_eq!(batch, singles);
    assert_eq!(batch, vec![0.75, 0.30, 0.75]);
}

#[test]
fn missing_required_column_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("no_cgpa.csv");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "GRE Score,TOEFL Score,University Rating,SOP,LOR,Research").unwrap();
    writeln!(file, "312,109,3,3,3,0").unwrap();
    drop(file);

    let service = PredictionService::new(Arc::new(ThresholdModel));
    let err = BatchRunner::new(&service).run(&input).unwrap_err();
    assert!(err.to_string().contains("CGPA"));
    assert!(!Path::new(&dir.path().join("no_cgpa_resultados.csv")).exists());
}
