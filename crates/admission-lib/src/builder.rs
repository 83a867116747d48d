//! Interactive feature vector assembly

use crate::schema::{FeatureVector, FieldSpec, NUM_FEATURES, SCHEMA};
use crate::validator::{self, ValidationError};
use tracing::debug;

/// Reply from an input source for one field prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// Raw text entered by the user (may be blank)
    Entered(String),
    /// The user cancelled the whole operation
    Cancelled,
}

/// Source of raw field values plus the channel for validation feedback.
///
/// The interactive CLI backs this with stdin; tests script it.
pub trait InputSource {
    /// Ask for the next value of `field`
    fn prompt(&mut self, field: &FieldSpec) -> PromptReply;

    /// Called when an entered value was rejected; the same field will be
    /// prompted again
    fn report_invalid(&mut self, field: &FieldSpec, error: &ValidationError);

    /// Called when a blank entry was substituted with the schema default
    fn report_default(&mut self, field: &FieldSpec, value: f64);
}

/// Assembles a validated feature vector by walking the schema in order.
pub struct FeatureVectorBuilder;

impl FeatureVectorBuilder {
    /// Collect all seven features from `source`.
    ///
    /// Blank entries fall back to the field default without validation
    /// (defaults are pre-validated constants). Invalid entries are reported
    /// and the same field is asked again. Returns `None` only on
    /// cancellation; a partial vector is never produced.
    pub fn build(source: &mut dyn InputSource) -> Option<FeatureVector> {
        let mut values = [0.0; NUM_FEATURES];
        for (slot, field) in values.iter_mut().zip(SCHEMA.iter()) {
            *slot = Self::collect_field(source, field)?;
        }
        Some(FeatureVector::new(values))
    }

    fn collect_field(source: &mut dyn InputSource, field: &FieldSpec) -> Option<f64> {
        loop {
            match source.prompt(field) {
                PromptReply::Cancelled => return None,
                PromptReply::Entered(raw) => {
                    if raw.trim().is_empty() {
                        debug!(field = field.name, default = field.default, "blank entry, using default");
                        source.report_default(field, field.default);
                        return Some(field.default);
                    }
                    match validator::validate(&raw, field.kind, field.min, field.max) {
                        Ok(value) => return Some(value),
                        Err(error) => source.report_invalid(field, &error),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted input source replaying a fixed sequence of replies
    struct ScriptedSource {
        replies: VecDeque<PromptReply>,
        prompts: Vec<&'static str>,
        invalid_reports: Vec<(&'static str, ValidationError)>,
        default_reports: Vec<(&'static str, f64)>,
    }

    impl ScriptedSource {
        fn new(replies: Vec<PromptReply>) -> Self {
            Self {
                replies: replies.into(),
                prompts: Vec::new(),
                invalid_reports: Vec::new(),
                default_reports: Vec::new(),
            }
        }

        fn entered(values: &[&str]) -> Self {
            Self::new(values.iter().map(|v| PromptReply::Entered(v.to_string())).collect())
        }
    }

    impl InputSource for ScriptedSource {
        fn prompt(&mut self, field: &FieldSpec) -> PromptReply {
            self.prompts.push(field.name);
            self.replies.pop_front().unwrap_or(PromptReply::Cancelled)
        }

        fn report_invalid(&mut self, field: &FieldSpec, error: &ValidationError) {
            self.invalid_reports.push((field.name, error.clone()));
        }

        fn report_default(&mut self, field: &FieldSpec, value: f64) {
            self.default_reports.push((field.name, value));
        }
    }

    #[test]
    fn test_all_blank_yields_default_vector() {
        let mut source = ScriptedSource::entered(&["", "", "", "", "", "", ""]);
        let vector = FeatureVectorBuilder::build(&mut source).unwrap();
        assert_eq!(vector, FeatureVector::defaults());
        assert_eq!(vector.values(), &[312.0, 109.0, 3.0, 3.0, 3.0, 8.69, 0.0]);
        assert_eq!(source.default_reports.len(), NUM_FEATURES);
    }

    #[test]
    fn test_valid_entries_pass_through() {
        let mut source = ScriptedSource::entered(&["320", "110", "4", "4", "5", "9.1", "1"]);
        let vector = FeatureVectorBuilder::build(&mut source).unwrap();
        assert_eq!(vector.values(), &[320.0, 110.0, 4.0, 4.0, 5.0, 9.1, 1.0]);
        assert!(source.invalid_reports.is_empty());
    }

    #[test]
    fn test_invalid_entry_reprompts_same_field() {
        let mut source = ScriptedSource::entered(&[
            "abc", "999", "320", // GRE: not a number, out of range, then valid
            "110", "4", "4", "5", "9.1", "1",
        ]);
        let vector = FeatureVectorBuilder::build(&mut source).unwrap();
        assert_eq!(vector.values()[0], 320.0);
        assert_eq!(source.prompts[..3], ["GRE Score", "GRE Score", "GRE Score"]);
        assert_eq!(
            source.invalid_reports,
            vec![
                ("GRE Score", ValidationError::NotANumber),
                ("GRE Score", ValidationError::OutOfRange { min: 260.0, max: 340.0 }),
            ]
        );
    }

    #[test]
    fn test_cancellation_aborts_build() {
        let mut source = ScriptedSource::new(vec![
            PromptReply::Entered("320".to_string()),
            PromptReply::Entered("110".to_string()),
            PromptReply::Cancelled,
        ]);
        assert!(FeatureVectorBuilder::build(&mut source).is_none());
        assert_eq!(source.prompts.len(), 3);
    }
}
