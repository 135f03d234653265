pub mod advisor;
pub mod encoder;
pub mod intake;
pub mod presenter;
pub mod suggestions;

pub use crate::domain::model::{
    ChurnLabel, CustomerForm, CustomerRecord, FeatureVector, PlanChoice, PredictionResult,
};
pub use crate::domain::ports::{ChurnScorer, ConfigProvider, Storage};
pub use crate::utils::error::Result;
