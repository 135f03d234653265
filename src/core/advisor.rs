use crate::adapters::TreeModel;
use crate::core::encoder::encode;
use crate::core::intake;
use crate::core::suggestions::suggest;
use crate::domain::model::{CustomerForm, CustomerRecord, FeatureVector, PredictionResult};
use crate::domain::ports::{ChurnScorer, ConfigProvider, Storage};
use crate::utils::error::Result;

/// Everything produced for one form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub record: CustomerRecord,
    pub features: FeatureVector,
    pub result: PredictionResult,
}

/// Request path for a single submission. Holds the long-lived scorer,
/// which is built once at startup and reused for every call.
pub struct ChurnAdvisor<S: ChurnScorer> {
    scorer: S,
}

impl<S: ChurnScorer> ChurnAdvisor<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Parse, validate, encode, score, suggest. The first failure aborts.
    pub fn assess(&self, form: &CustomerForm) -> Result<Assessment> {
        let record = intake::collect(form)?;
        intake::validate(&record)?;

        let features = encode(&record);
        tracing::debug!("Encoded features: {:?}", features.values());

        let result = self.predict(&record, &features)?;
        Ok(Assessment {
            record,
            features,
            result,
        })
    }

    fn predict(&self, record: &CustomerRecord, features: &FeatureVector) -> Result<PredictionResult> {
        let label = self.scorer.score(features)?;
        let suggestions = suggest(record, label);
        tracing::info!(
            "Prediction: label={} ({} suggestions)",
            label.as_u8(),
            suggestions.len()
        );
        Ok(PredictionResult { label, suggestions })
    }
}

impl ChurnAdvisor<TreeModel> {
    /// Loads the configured model artifact and wraps it.
    pub async fn from_config<St: Storage, C: ConfigProvider>(storage: &St, config: &C) -> Result<Self> {
        let model = TreeModel::load(storage, config.model_path()).await?;
        Ok(Self::new(model))
    }
}
