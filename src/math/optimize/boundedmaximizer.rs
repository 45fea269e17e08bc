use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::univariatefunction::UnivariateFunction;

pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-3;
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-3;
pub const DEFAULT_MAX_EVALUATIONS: usize = 1000;

/// Stopping rules shared by every [`BoundedMaximizer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaximizerSettings {
    pub relative_tolerance: f64,
    pub absolute_tolerance: f64,
    pub max_evaluations: usize
}

impl Default for MaximizerSettings {
    fn default() -> Self {
        MaximizerSettings {
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            absolute_tolerance: DEFAULT_ABSOLUTE_TOLERANCE,
            max_evaluations: DEFAULT_MAX_EVALUATIONS
        }
    }
}

/// Best point a maximizer found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Maximum {
    pub point: f64,
    pub value: f64,
    pub evaluations: usize,
    /// `false` when the evaluation budget ran out before the tolerance
    /// test passed. The point is still the best one seen.
    pub converged: bool
}

/// Derivative-free maximization of `g` on `[lo, hi]`.
///
/// Implementations never fail: when the budget in
/// [`MaximizerSettings::max_evaluations`] is exhausted they return the best
/// point seen so far with `converged == false`. When `g` has several equal
/// peaks any of them may be returned, but the same `g` must always give the
/// same answer.
pub trait BoundedMaximizer {
    fn name(&self) -> &'static str;

    fn maximize(&self,
                objective: &dyn UnivariateFunction,
                lo: f64,
                hi: f64,
                settings: &MaximizerSettings) -> Maximum;
}
