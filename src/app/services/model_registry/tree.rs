//! Fitted tree-based regression models
//!
//! A decision tree is stored as a flat node array indexed by position, with
//! branch nodes splitting on `feature <= threshold`. Forests average member
//! trees; gradient boosting sums shrinkage-weighted trees over a base score.

use ndarray::ArrayView1;
use serde::Deserialize;

use super::registry::RowModel;
use crate::{Error, Result};

/// One node of a fitted decision tree
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal split: left when `features[feature] <= threshold`
    Branch {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal prediction
    Leaf { value: f64 },
}

/// CART regression tree as a flat node array rooted at index 0
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTreeRegressor {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTreeRegressor {
    /// Traverse the tree for one feature row.
    ///
    /// Malformed trees (dangling child indices, reference cycles) surface
    /// as prediction errors rather than unbounded traversal.
    fn traverse(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        if self.nodes.is_empty() {
            return Err(Error::prediction("decision tree has no nodes"));
        }

        let mut index = 0;
        // A well-formed tree never visits a node twice
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Branch {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = *features.get(*feature).ok_or_else(|| {
                        Error::prediction(format!(
                            "tree split on feature {} but row has {} features",
                            feature,
                            features.len()
                        ))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(Error::prediction(format!(
                        "tree node index {} out of bounds",
                        index
                    )));
                }
            }
        }

        Err(Error::prediction("decision tree traversal did not terminate"))
    }
}

impl RowModel for DecisionTreeRegressor {
    fn predict(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        self.traverse(features)
    }
}

/// Random forest: unweighted mean over member trees
#[derive(Debug, Clone, Deserialize)]
pub struct RandomForestRegressor {
    pub trees: Vec<DecisionTreeRegressor>,
}

impl RowModel for RandomForestRegressor {
    fn predict(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        if self.trees.is_empty() {
            return Err(Error::prediction("random forest has no trees"));
        }

        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.traverse(features)?;
        }
        Ok(sum / self.trees.len() as f64)
    }
}

/// Gradient-boosted trees: `base_score + learning_rate * sum(tree outputs)`
#[derive(Debug, Clone, Deserialize)]
pub struct GradientBoostingRegressor {
    pub base_score: f64,
    pub learning_rate: f64,
    pub trees: Vec<DecisionTreeRegressor>,
}

impl RowModel for GradientBoostingRegressor {
    fn predict(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.traverse(features)?;
        }
        Ok(self.base_score + self.learning_rate * sum)
    }
}
