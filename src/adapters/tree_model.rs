//! Pre-fitted binary decision tree exported as JSON.
//!
//! Continuous splits send a sample left when `value <= threshold`;
//! categorical splits send it left when the value is one of
//! `left_categories`. Leaves hold the predicted class, 0.0 or 1.0.

use serde::Deserialize;

use crate::domain::model::{ChurnLabel, FeatureVector, FEATURE_COUNT};
use crate::domain::ports::{ChurnScorer, Storage};
use crate::utils::error::{ChurnError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    Leaf {
        prediction: f64,
    },
    Continuous {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Categorical {
        feature: usize,
        left_categories: Vec<f64>,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    fn check(&self) -> std::result::Result<(), String> {
        match self {
            TreeNode::Leaf { prediction } => {
                if ChurnLabel::from_prediction(*prediction).is_none() {
                    return Err(format!("leaf prediction {} is not 0 or 1", prediction));
                }
                Ok(())
            }
            TreeNode::Continuous {
                feature,
                threshold,
                left,
                right,
            } => {
                check_feature(*feature)?;
                if !threshold.is_finite() {
                    return Err(format!("split on feature {} has a non-finite threshold", feature));
                }
                left.check()?;
                right.check()
            }
            TreeNode::Categorical {
                feature,
                left,
                right,
                ..
            } => {
                check_feature(*feature)?;
                left.check()?;
                right.check()
            }
        }
    }

    fn n_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Continuous { left, right, .. } | TreeNode::Categorical { left, right, .. } => {
                1 + left.n_nodes() + right.n_nodes()
            }
        }
    }

    fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Continuous { left, right, .. } | TreeNode::Categorical { left, right, .. } => {
                left.n_leaves() + right.n_leaves()
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Continuous { left, right, .. } | TreeNode::Categorical { left, right, .. } => {
                1 + left.depth().max(right.depth())
            }
        }
    }
}

fn check_feature(feature: usize) -> std::result::Result<(), String> {
    if feature >= FEATURE_COUNT {
        return Err(format!(
            "split references feature {} but only {} exist",
            feature, FEATURE_COUNT
        ));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct TreeArtifact {
    num_features: usize,
    root: TreeNode,
}

#[derive(Debug, Clone)]
pub struct TreeModel {
    root: TreeNode,
    source: String,
}

impl TreeModel {
    /// Reads and checks the artifact. Any failure is reported as `ModelUnavailable`.
    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let bytes = storage
            .read_file(path)
            .await
            .map_err(|e| ChurnError::model_unavailable(path, e.to_string()))?;
        let model = Self::from_slice(&bytes, path)?;
        tracing::info!(
            "Loaded decision tree from {} ({} nodes, depth {})",
            path,
            model.n_nodes(),
            model.depth()
        );
        Ok(model)
    }

    pub fn from_slice(bytes: &[u8], source: &str) -> Result<Self> {
        let artifact: TreeArtifact = serde_json::from_slice(bytes)
            .map_err(|e| ChurnError::model_unavailable(source, format!("unreadable artifact: {}", e)))?;

        if artifact.num_features != FEATURE_COUNT {
            return Err(ChurnError::model_unavailable(
                source,
                format!(
                    "model expects {} features, encoder produces {}",
                    artifact.num_features, FEATURE_COUNT
                ),
            ));
        }
        artifact
            .root
            .check()
            .map_err(|reason| ChurnError::model_unavailable(source, reason))?;

        Ok(Self {
            root: artifact.root,
            source: source.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }

    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    fn predict(&self, features: &FeatureVector) -> f64 {
        let mut node = &self.root;
        let values = features.values();
        loop {
            match node {
                TreeNode::Leaf { prediction } => return *prediction,
                TreeNode::Continuous {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if values[*feature] <= *threshold { &**left } else { &**right };
                }
                TreeNode::Categorical {
                    feature,
                    left_categories,
                    left,
                    right,
                } => {
                    node = if left_categories.contains(&values[*feature]) {
                        &**left
                    } else {
                        &**right
                    };
                }
            }
        }
    }
}

impl ChurnScorer for TreeModel {
    fn score(&self, features: &FeatureVector) -> Result<ChurnLabel> {
        let prediction = self.predict(features);
        ChurnLabel::from_prediction(prediction).ok_or_else(|| {
            ChurnError::model_unavailable(
                &self.source,
                format!("model produced non-binary prediction {}", prediction),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Day minutes > 250 churns; otherwise churn only without an international plan.
    const SMALL_TREE: &str = r#"{
        "num_features": 13,
        "root": {
            "type": "continuous", "feature": 4, "threshold": 250.0,
            "left": {
                "type": "categorical", "feature": 1, "left_categories": [1.0],
                "left": { "type": "leaf", "prediction": 0.0 },
                "right": { "type": "leaf", "prediction": 1.0 }
            },
            "right": { "type": "leaf", "prediction": 1.0 }
        }
    }"#;

    fn vector(day_minutes: f64, intl_plan: f64) -> FeatureVector {
        let mut v = [0.0; FEATURE_COUNT];
        v[1] = intl_plan;
        v[4] = day_minutes;
        FeatureVector(v)
    }

    #[test]
    fn test_structure() {
        let model = TreeModel::from_slice(SMALL_TREE.as_bytes(), "inline").unwrap();
        assert_eq!(model.n_nodes(), 5);
        assert_eq!(model.n_leaves(), 3);
        assert_eq!(model.depth(), 2);
    }

    #[test]
    fn test_scoring_paths() {
        let model = TreeModel::from_slice(SMALL_TREE.as_bytes(), "inline").unwrap();
        assert_eq!(model.score(&vector(300.0, 1.0)).unwrap(), ChurnLabel::Churn);
        assert_eq!(model.score(&vector(100.0, 1.0)).unwrap(), ChurnLabel::NoChurn);
        assert_eq!(model.score(&vector(100.0, 0.0)).unwrap(), ChurnLabel::Churn);
    }

    #[test]
    fn test_threshold_goes_left() {
        let model = TreeModel::from_slice(SMALL_TREE.as_bytes(), "inline").unwrap();
        assert_eq!(model.score(&vector(250.0, 1.0)).unwrap(), ChurnLabel::NoChurn);
    }

    #[test]
    fn test_rejects_wrong_feature_count() {
        let json = r#"{"num_features": 7, "root": {"type": "leaf", "prediction": 0.0}}"#;
        assert!(matches!(
            TreeModel::from_slice(json.as_bytes(), "bad"),
            Err(ChurnError::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_feature() {
        let json = r#"{"num_features": 13, "root": {
            "type": "continuous", "feature": 13, "threshold": 1.0,
            "left": {"type": "leaf", "prediction": 0.0},
            "right": {"type": "leaf", "prediction": 1.0}}}"#;
        assert!(matches!(
            TreeModel::from_slice(json.as_bytes(), "bad"),
            Err(ChurnError::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn test_rejects_non_binary_leaf() {
        let json = r#"{"num_features": 13, "root": {"type": "leaf", "prediction": 2.0}}"#;
        assert!(TreeModel::from_slice(json.as_bytes(), "bad").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            TreeModel::from_slice(b"not json", "bad"),
            Err(ChurnError::ModelUnavailable { .. })
        ));
    }
}
