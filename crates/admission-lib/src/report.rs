//! Probability banding and report formatting

use crate::schema::{DisplayRule, FeatureVector, NUM_FEATURES, SCHEMA};
use serde::{Deserialize, Serialize};

/// Qualitative admission band derived from the raw probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    High,
    Medium,
    Low,
    VeryLow,
}

impl Band {
    /// Classify a probability. Lower bounds are inclusive: 0.80 is High,
    /// 0.60 is Medium, 0.40 is Low.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.80 {
            Band::High
        } else if probability >= 0.60 {
            Band::Medium
        } else if probability >= 0.40 {
            Band::Low
        } else {
            Band::VeryLow
        }
    }

    /// Status line shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Band::High => "🟢 HIGH - Admission very likely",
            Band::Medium => "🟡 MEDIUM - Good chance of admission",
            Band::Low => "🟠 LOW - Moderate chance of admission",
            Band::VeryLow => "🔴 VERY LOW - Little chance of admission",
        }
    }
}

/// Format a probability as a percentage string: `0.75` -> `"75.00%"`
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Render one field value according to its schema display rule
pub fn format_field_value(rule: DisplayRule, value: f64) -> String {
    match rule {
        DisplayRule::YesNo => {
            if value == 1.0 { "yes" } else { "no" }.to_string()
        }
        DisplayRule::Fixed2 => format!("{value:.2}"),
        DisplayRule::PlainInteger => format!("{}", value as i64),
    }
}

/// Render a complete single-record report: every field with its display
/// value, then the probability as a percentage and its band.
pub fn format_single(vector: &FeatureVector, probability: f64) -> String {
    let mut lines = Vec::with_capacity(NUM_FEATURES + 3);
    lines.push("📋 Provided features:".to_string());
    for (field, &value) in SCHEMA.iter().zip(vector.values().iter()) {
        lines.push(format!(
            "   • {}: {}",
            field.name,
            format_field_value(field.display, value)
        ));
    }
    lines.push(format!(
        "\n🎯 Predicted chance of admission: {}",
        format_percent(probability)
    ));
    lines.push(format!("📈 Status: {}", Band::from_probability(probability).label()));
    lines.join("\n")
}

/// Aggregate statistics over a batch of probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Mean, maximum, and minimum over `probabilities`.
///
/// `None` for an empty batch: the statistics are undefined there and must be
/// reported as such, never zeroed.
pub fn summarize(probabilities: &[f64]) -> Option<BatchSummary> {
    let first = *probabilities.first()?;
    let mut max = first;
    let mut min = first;
    for &p in &probabilities[1..] {
        max = max.max(p);
        min = min.min(p);
    }
    let mean = probabilities.iter().sum::<f64>() / probabilities.len() as f64;
    Some(BatchSummary { mean, max, min })
}
