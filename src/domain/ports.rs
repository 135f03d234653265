use crate::domain::model::{ChurnLabel, FeatureVector};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn model_path(&self) -> &str;
    fn show_features(&self) -> bool;
}

/// Pre-fitted classifier. Scoring is deterministic for a given vector.
pub trait ChurnScorer: Send + Sync {
    fn score(&self, features: &FeatureVector) -> Result<ChurnLabel>;
}
