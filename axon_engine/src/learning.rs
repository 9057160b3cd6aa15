//! Weight-update rules applied after a neuron fires.

use serde::{Deserialize, Serialize};

/// How a neuron's inbound weights evolve after each activation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LearningAlgorithm {
    /// Weights never change.
    NoLearning,
    /// Classic Hebbian update: `w' = w + rate * synapse * output`.
    Hebbian {
        /// Learning rate `η`.
        rate: f64,
    },
}

impl Default for LearningAlgorithm {
    fn default() -> Self {
        Self::NoLearning
    }
}

impl LearningAlgorithm {
    /// Computes the updated weight for a single inbound connection given
    /// the synapse it carried this cycle and the neuron's output.
    pub fn update_weight(&self, weight: f64, synapse: f64, output: f64) -> f64 {
        match self {
            LearningAlgorithm::NoLearning => weight,
            LearningAlgorithm::Hebbian { rate } => weight + rate * synapse * output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_learning_leaves_weight_unchanged() {
        let algo = LearningAlgorithm::NoLearning;
        assert_eq!(algo.update_weight(1.0, 2.0, 2.0), 1.0);
    }

    #[test]
    fn hebbian_scales_by_rate_synapse_and_output() {
        let algo = LearningAlgorithm::Hebbian { rate: 0.1 };
        let updated = algo.update_weight(1.0, 2.0, 2.0);
        assert!((updated - 1.4).abs() < 1e-12);
    }
}
