use serde::Serialize;

use crate::domain::model::{ChurnLabel, FeatureVector, PredictionResult};
use crate::utils::error::Result;

pub const CHURN_VERDICT: &str = "Customer is likely to churn.";
pub const RETAIN_VERDICT: &str = "Customer is not likely to churn.";
pub const NO_SUGGESTIONS_NOTE: &str = "No suggestions for this customer.";

pub fn verdict(label: ChurnLabel) -> &'static str {
    match label {
        ChurnLabel::Churn => CHURN_VERDICT,
        ChurnLabel::NoChurn => RETAIN_VERDICT,
    }
}

/// Verdict line followed by the suggestions, numbered from 1.
pub fn render_text(result: &PredictionResult) -> String {
    let mut out = String::new();
    out.push_str("Predicted results\n");
    out.push_str(verdict(result.label));
    out.push('\n');
    out.push_str("\nSuggestions:\n");

    if result.suggestions.is_empty() {
        out.push_str(NO_SUGGESTIONS_NOTE);
        out.push('\n');
    }
    for (i, suggestion) in result.suggestions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, suggestion));
    }
    out
}

#[derive(Serialize)]
struct JsonView<'a> {
    label: ChurnLabel,
    churn: bool,
    verdict: &'static str,
    suggestions: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<serde_json::Map<String, serde_json::Value>>,
}

pub fn render_json(result: &PredictionResult, features: Option<&FeatureVector>) -> Result<String> {
    let features = features.map(|vector| {
        vector
            .named()
            .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
            .collect()
    });
    let view = JsonView {
        label: result.label,
        churn: result.label.is_churn(),
        verdict: verdict(result.label),
        suggestions: &result.suggestions,
        features,
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

pub fn render_features(features: &FeatureVector) -> String {
    let mut out = String::from("Feature vector:\n");
    for (name, value) in features.named() {
        out.push_str(&format!("  {:<26} {}\n", name, value));
    }
    out
}
