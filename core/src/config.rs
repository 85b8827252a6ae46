use serde::{Deserialize, Serialize};

/// Guard added to IDF and cosine denominators.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Which documents a fuzzy `and` keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AndPolicy {
    /// `min` over documents present in both operands.
    #[default]
    Intersection,
    /// `min` over the union of keys, a missing key counting as 0.
    /// Documents present in only one operand surface with weight 0.
    ZeroDefaultUnion,
}

/// What the stack machine does when an operator finds too few operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingOperands {
    /// Abort evaluation with [`crate::QueryError::InsufficientOperands`].
    #[default]
    Reject,
    /// Use an empty operand in place of each missing one and continue.
    Substitute,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub epsilon: f64,
    pub and_policy: AndPolicy,
    pub missing_operands: MissingOperands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            and_policy: AndPolicy::default(),
            missing_operands: MissingOperands::default(),
        }
    }
}
