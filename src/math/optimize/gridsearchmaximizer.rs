use crate::math::function::univariatefunction::UnivariateFunction;
use crate::math::optimize::boundedmaximizer::{
    BoundedMaximizer,
    Maximum,
    MaximizerSettings
};

/// Samples `g` on an even grid over `[lo, hi]` (endpoints included) and
/// keeps the first strict maximum.
///
/// Spends the whole evaluation budget, so the tolerances are ignored and the
/// result is always reported as converged. The location error is at most
/// half a grid step.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridSearchMaximizer;

impl GridSearchMaximizer {
    pub fn new() -> GridSearchMaximizer {
        GridSearchMaximizer
    }
}

impl BoundedMaximizer for GridSearchMaximizer {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn maximize(&self,
                objective: &dyn UnivariateFunction,
                lo: f64,
                hi: f64,
                settings: &MaximizerSettings) -> Maximum {
        let samples = settings.max_evaluations.max(2);
        let step = (hi - lo) / (samples - 1) as f64;

        let mut best_point = lo;
        let mut best_value = objective.value(lo);
        for i in 1..samples {
            // 最後一點直接用 hi，避免 lo + (n-1)·step 的捨入誤差跑出區間
            let x = if i == samples - 1 { hi } else { lo + i as f64 * step };
            let value = objective.value(x);
            if value > best_value || best_value.is_nan() {
                best_point = x;
                best_value = value;
            }
        }

        Maximum {
            point: best_point,
            value: best_value,
            evaluations: samples,
            converged: true
        }
    }
}
