//! CART decision tree with Gini impurity.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-tree growth limits. The forest derives these from its
/// `TrainingParams` and adds the feature-subset width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    /// Features considered per split (sqrt of the feature count).
    pub features_per_split: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        /// Class distribution at the leaf, already normalized.
        probabilities: Vec<f64>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// One fitted tree. Splits send `value <= threshold` left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
    n_classes: usize,
    /// Total impurity decrease per feature, weighted by node size.
    importances: Vec<f64>,
}

struct SplitChoice {
    feature: usize,
    threshold: f64,
    gain: f64,
}

impl DecisionTree {
    /// Fit on the rows selected by `indices` (the forest passes a bootstrap
    /// sample here).
    pub fn fit<R: Rng + ?Sized>(
        x: &[Vec<f64>],
        y: &[usize],
        indices: &[usize],
        n_classes: usize,
        params: TreeParams,
        rng: &mut R,
    ) -> Self {
        let n_features = x.first().map_or(0, Vec::len);
        let mut importances = vec![0.0; n_features];
        let root = build_node(
            x,
            y,
            indices,
            n_classes,
            params,
            0,
            indices.len(),
            &mut importances,
            rng,
        );
        Self {
            root,
            n_classes,
            importances,
        }
    }

    /// Class distribution for one standardized row.
    pub fn predict_proba(&self, row: &[f64]) -> &[f64] {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { probabilities } => return probabilities,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn importances(&self) -> &[f64] {
        &self.importances
    }
}

fn class_counts(y: &[usize], indices: &[usize], n_classes: usize) -> Vec<f64> {
    let mut counts = vec![0.0; n_classes];
    for &i in indices {
        counts[y[i]] += 1.0;
    }
    counts
}

fn gini(counts: &[f64], total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    1.0 - counts.iter().map(|c| (c / total).powi(2)).sum::<f64>()
}

fn leaf(counts: Vec<f64>) -> Node {
    let total: f64 = counts.iter().sum();
    let probabilities = if total > 0.0 {
        counts.iter().map(|c| c / total).collect()
    } else {
        counts
    };
    Node::Leaf { probabilities }
}

#[allow(clippy::too_many_arguments)]
fn build_node<R: Rng + ?Sized>(
    x: &[Vec<f64>],
    y: &[usize],
    indices: &[usize],
    n_classes: usize,
    params: TreeParams,
    depth: usize,
    n_total: usize,
    importances: &mut [f64],
    rng: &mut R,
) -> Node {
    let counts = class_counts(y, indices, n_classes);
    let n = indices.len() as f64;
    let node_gini = gini(&counts, n);

    let is_pure = counts.iter().filter(|&&c| c > 0.0).count() <= 1;
    if is_pure || depth >= params.max_depth || indices.len() < params.min_samples_split {
        return leaf(counts);
    }

    let Some(choice) = best_split(x, y, indices, n_classes, node_gini, params, rng) else {
        return leaf(counts);
    };

    let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| x[i][choice.feature] <= choice.threshold);

    importances[choice.feature] += choice.gain * n / n_total as f64;

    let left = build_node(
        x, y, &left_idx, n_classes, params, depth + 1, n_total, importances, rng,
    );
    let right = build_node(
        x, y, &right_idx, n_classes, params, depth + 1, n_total, importances, rng,
    );
    Node::Split {
        feature: choice.feature,
        threshold: choice.threshold,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn best_split<R: Rng + ?Sized>(
    x: &[Vec<f64>],
    y: &[usize],
    indices: &[usize],
    n_classes: usize,
    node_gini: f64,
    params: TreeParams,
    rng: &mut R,
) -> Option<SplitChoice> {
    let n_features = x.first().map_or(0, Vec::len);
    let m = params.features_per_split.clamp(1, n_features.max(1));
    let mut candidates = rand::seq::index::sample(rng, n_features, m).into_vec();
    candidates.sort_unstable();

    let n = indices.len() as f64;
    let mut best: Option<SplitChoice> = None;

    for feature in candidates {
        let mut column: Vec<(f64, usize)> =
            indices.iter().map(|&i| (x[i][feature], y[i])).collect();
        column.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left = vec![0.0; n_classes];
        let mut right = class_counts(y, indices, n_classes);

        for i in 0..column.len() - 1 {
            let (value, class) = column[i];
            left[class] += 1.0;
            right[class] -= 1.0;

            // No threshold fits between equal values.
            if value == column[i + 1].0 {
                continue;
            }

            let n_left = (i + 1) as f64;
            let n_right = n - n_left;
            if (n_left as usize) < params.min_samples_leaf
                || (n_right as usize) < params.min_samples_leaf
            {
                continue;
            }

            let weighted =
                (n_left * gini(&left, n_left) + n_right * gini(&right, n_right)) / n;
            let gain = node_gini - weighted;
            if gain > 1e-12 && best.as_ref().map_or(true, |b| gain > b.gain) {
                best = Some(SplitChoice {
                    feature,
                    threshold: (value + column[i + 1].0) / 2.0,
                    gain,
                });
            }
        }
    }

    best
}
