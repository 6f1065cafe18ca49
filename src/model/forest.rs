use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::model::{Prediction, RiskClassifier};
use crate::scores::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, RiskClass};

pub const ARTIFACT_FORMAT: &str = "labrisk-forest";
pub const ARTIFACT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct ArtifactV1 {
    format: String,
    version: u32,
    feature_names: Vec<String>,
    classes: Vec<String>,
    trees: Vec<TreeDef>,
}

#[derive(Debug, Deserialize)]
struct TreeDef {
    nodes: Vec<NodeDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
enum NodeDef {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(Vec<f64>),
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf([f64; 3]),
}

#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn leaf(&self, x: &[f64; FEATURE_COUNT]) -> &[f64; 3] {
        // Children always point forward, so the walk terminates.
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[*feature] <= *threshold { *left } else { *right };
                }
                Node::Leaf(dist) => return dist,
            }
        }
    }
}

/// Ensemble of decision trees whose leaf distributions are averaged, as a
/// random forest's `predict_proba` does.
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    source: String,
    trees: Vec<Tree>,
}

impl ForestClassifier {
    pub fn builtin() -> Result<Self> {
        let content = include_str!("../../assets/models/risk_forest_v1.json");
        Self::from_json(content, "built-in risk_forest_v1")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read classifier artifact {}", path.display()))?;
        Self::from_json(&content, &path.display().to_string())
    }

    pub fn from_json(content: &str, source: &str) -> Result<Self> {
        let artifact: ArtifactV1 = serde_json::from_str(content)
            .with_context(|| format!("{}: malformed classifier artifact", source))?;

        if artifact.format != ARTIFACT_FORMAT {
            bail!("{}: unsupported artifact format '{}'", source, artifact.format);
        }
        if artifact.version != ARTIFACT_VERSION {
            bail!("{}: unsupported artifact version {}", source, artifact.version);
        }
        if artifact.feature_names.len() != FEATURE_COUNT {
            bail!(
                "{}: artifact expects {} features, pipeline produces {}",
                source,
                artifact.feature_names.len(),
                FEATURE_COUNT
            );
        }
        for (idx, (got, want)) in artifact.feature_names.iter().zip(FEATURE_NAMES).enumerate() {
            if got != want {
                bail!(
                    "{}: feature slot {} is '{}', expected '{}'",
                    source,
                    idx,
                    got,
                    want
                );
            }
        }
        let expected_classes: Vec<&str> = RiskClass::ALL.iter().map(|c| c.as_str()).collect();
        if artifact.classes != expected_classes {
            bail!(
                "{}: class labels must be {:?}, got {:?}",
                source,
                expected_classes,
                artifact.classes
            );
        }
        if artifact.trees.is_empty() {
            bail!("{}: artifact contains no trees", source);
        }

        let trees = artifact
            .trees
            .into_iter()
            .enumerate()
            .map(|(tree_idx, def)| build_tree(def, tree_idx, source))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source: source.to_string(),
            trees,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

fn build_tree(def: TreeDef, tree_idx: usize, source: &str) -> Result<Tree> {
    if def.nodes.is_empty() {
        bail!("{}: tree {} has no nodes", source, tree_idx);
    }
    let n = def.nodes.len();
    let mut nodes = Vec::with_capacity(n);
    for (idx, node) in def.nodes.into_iter().enumerate() {
        let built = match node {
            NodeDef::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if feature >= FEATURE_COUNT {
                    bail!(
                        "{}: tree {} node {} splits on feature {} (max {})",
                        source,
                        tree_idx,
                        idx,
                        feature,
                        FEATURE_COUNT - 1
                    );
                }
                if !threshold.is_finite() {
                    bail!("{}: tree {} node {} has non-finite threshold", source, tree_idx, idx);
                }
                for child in [left, right] {
                    if child <= idx || child >= n {
                        bail!(
                            "{}: tree {} node {} has invalid child {}",
                            source,
                            tree_idx,
                            idx,
                            child
                        );
                    }
                }
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }
            }
            NodeDef::Leaf(dist) => {
                let dist: [f64; 3] = dist.as_slice().try_into().map_err(|_| {
                    anyhow::anyhow!(
                        "{}: tree {} leaf {} has {} probabilities, expected 3",
                        source,
                        tree_idx,
                        idx,
                        dist.len()
                    )
                })?;
                if dist.iter().any(|p| !p.is_finite() || *p < 0.0) {
                    bail!("{}: tree {} leaf {} has invalid probabilities", source, tree_idx, idx);
                }
                Node::Leaf(dist)
            }
        };
        nodes.push(built);
    }
    Ok(Tree { nodes })
}

impl RiskClassifier for ForestClassifier {
    fn name(&self) -> &str {
        &self.source
    }

    fn predict(&self, features: &FeatureVector) -> Prediction {
        let x = features.values();
        let mut sum = [0.0f64; 3];
        for tree in &self.trees {
            let leaf = tree.leaf(x);
            for (acc, p) in sum.iter_mut().zip(leaf) {
                *acc += *p;
            }
        }
        let n = self.trees.len() as f64;
        let distribution = sum.map(|s| s / n);

        // First maximum wins on ties.
        let mut best = 0;
        for idx in 1..distribution.len() {
            if distribution[idx] > distribution[best] {
                best = idx;
            }
        }
        Prediction {
            class: RiskClass::ALL[best],
            distribution,
        }
    }
}
