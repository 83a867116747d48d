//! The fixed admission feature schema
//!
//! The model consumes exactly seven features in a fixed positional order.
//! This module is the single source of truth for field names, kinds, valid
//! ranges, defaults, and display rules.

use serde::{Deserialize, Serialize};

/// Number of input features expected by the model
pub const NUM_FEATURES: usize = 7;

/// Kind of a scalar input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Integer,
    Real,
}

/// How a field value is rendered in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRule {
    /// Plain integer, no fractional part
    PlainInteger,
    /// Two fixed decimal places
    Fixed2,
    /// Boolean-like field rendered as yes/no
    YesNo,
}

/// Descriptor of one input field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub display: DisplayRule,
}

/// The ordered feature schema.
///
/// Order is significant: it is the exact column order the model expects.
/// The schema is never reordered, extended, or shrunk at runtime.
pub const SCHEMA: [FieldSpec; NUM_FEATURES] = [
    FieldSpec {
        name: "GRE Score",
        kind: FieldKind::Integer,
        min: 260.0,
        max: 340.0,
        default: 312.0,
        display: DisplayRule::PlainInteger,
    },
    FieldSpec {
        name: "TOEFL Score",
        kind: FieldKind::Integer,
        min: 0.0,
        max: 120.0,
        default: 109.0,
        display: DisplayRule::PlainInteger,
    },
    FieldSpec {
        name: "University Rating",
        kind: FieldKind::Integer,
        min: 1.0,
        max: 5.0,
        default: 3.0,
        display: DisplayRule::PlainInteger,
    },
    FieldSpec {
        name: "SOP",
        kind: FieldKind::Integer,
        min: 1.0,
        max: 5.0,
        default: 3.0,
        display: DisplayRule::PlainInteger,
    },
    FieldSpec {
        name: "LOR",
        kind: FieldKind::Integer,
        min: 1.0,
        max: 5.0,
        default: 3.0,
        display: DisplayRule::PlainInteger,
    },
    FieldSpec {
        name: "CGPA",
        kind: FieldKind::Real,
        min: 0.0,
        max: 10.0,
        default: 8.69,
        display: DisplayRule::Fixed2,
    },
    FieldSpec {
        name: "Research",
        kind: FieldKind::Integer,
        min: 0.0,
        max: 1.0,
        default: 0.0,
        display: DisplayRule::YesNo,
    },
];

/// A complete, validated feature vector in schema order.
///
/// Built once, never mutated afterwards, never partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; NUM_FEATURES]);

impl FeatureVector {
    /// Wrap values already known to satisfy the schema (batch input is
    /// trusted as-is; interactive input goes through the builder).
    pub fn new(values: [f64; NUM_FEATURES]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; NUM_FEATURES] {
        &self.0
    }

    /// The schema defaults as a ready-made vector
    pub fn defaults() -> Self {
        let mut values = [0.0; NUM_FEATURES];
        for (slot, field) in values.iter_mut().zip(SCHEMA.iter()) {
            *slot = field.default;
        }
        Self(values)
    }
}
