use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{ChurnError, Result};

/// Yes/No answer for the two plan questions on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanChoice {
    Yes,
    No,
}

impl PlanChoice {
    /// Fixed categorical index fed to the model: `No` is 0, `Yes` is 1.
    pub fn index(self) -> f64 {
        match self {
            PlanChoice::No => 0.0,
            PlanChoice::Yes => 1.0,
        }
    }
}

/// Returned when a plan answer is neither yes nor no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPlanChoice;

impl fmt::Display for InvalidPlanChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected one of: Yes, No")
    }
}

impl FromStr for PlanChoice {
    type Err = InvalidPlanChoice;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(PlanChoice::Yes),
            "no" => Ok(PlanChoice::No),
            _ => Err(InvalidPlanChoice),
        }
    }
}

impl fmt::Display for PlanChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanChoice::Yes => write!(f, "Yes"),
            PlanChoice::No => write!(f, "No"),
        }
    }
}

/// Raw values as submitted on the form. Plans are free text until parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerForm {
    pub account_length: u32,
    pub international_plan: String,
    pub voice_mail_plan: String,
    pub number_vmail_messages: u32,
    pub total_day_minutes: f64,
    pub total_day_calls: u32,
    pub total_eve_minutes: f64,
    pub total_eve_calls: u32,
    pub total_night_minutes: f64,
    pub total_night_calls: u32,
    pub total_intl_minutes: f64,
    pub total_intl_calls: u32,
    pub customer_service_calls: u32,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            account_length: 100,
            international_plan: "Yes".to_string(),
            voice_mail_plan: "Yes".to_string(),
            number_vmail_messages: 0,
            total_day_minutes: 150.0,
            total_day_calls: 50,
            total_eve_minutes: 120.0,
            total_eve_calls: 40,
            total_night_minutes: 100.0,
            total_night_calls: 30,
            total_intl_minutes: 10.0,
            total_intl_calls: 3,
            customer_service_calls: 1,
        }
    }
}

impl CustomerForm {
    /// Parses a submitted form from JSON. Missing fields take the form
    /// defaults; malformed or out-of-range values are input errors.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ChurnError::validation("input", "<json>", e.to_string()))
    }
}

/// One customer's account attributes, typed and parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub account_length: u32,
    pub international_plan: PlanChoice,
    pub voice_mail_plan: PlanChoice,
    pub number_vmail_messages: u32,
    pub total_day_minutes: f64,
    pub total_day_calls: u32,
    pub total_eve_minutes: f64,
    pub total_eve_calls: u32,
    pub total_night_minutes: f64,
    pub total_night_calls: u32,
    pub total_intl_minutes: f64,
    pub total_intl_calls: u32,
    pub customer_service_calls: u32,
}

pub const FEATURE_COUNT: usize = 13;

/// Column names of the feature vector, in model input order.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "account_length",
    "international_plan_index",
    "voice_mail_plan_index",
    "number_vmail_messages",
    "total_day_minutes",
    "total_day_calls",
    "total_eve_minutes",
    "total_eve_calls",
    "total_night_minutes",
    "total_night_calls",
    "total_intl_minutes",
    "total_intl_calls",
    "customer_service_calls",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Pairs each value with its column name.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.0.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChurnLabel {
    NoChurn,
    Churn,
}

impl ChurnLabel {
    /// Maps a raw model prediction (0.0 or 1.0) to a label.
    pub fn from_prediction(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(ChurnLabel::NoChurn)
        } else if value == 1.0 {
            Some(ChurnLabel::Churn)
        } else {
            None
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            ChurnLabel::NoChurn => 0,
            ChurnLabel::Churn => 1,
        }
    }

    pub fn is_churn(self) -> bool {
        self == ChurnLabel::Churn
    }
}

impl Serialize for ChurnLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: ChurnLabel,
    pub suggestions: Vec<String>,
}
