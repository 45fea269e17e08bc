use crate::math::function::univariatefunction::{
    AbsoluteValue,
    UnivariateFunction
};
use crate::math::interval::Interval;
use crate::math::optimize::boundedmaximizer::{
    BoundedMaximizer,
    MaximizerSettings
};

/// Upper bound on the number of subintervals, whatever the error bound asks
/// for.
pub const MAX_STEPS: usize = 1_000_000;

// ─────────────────────────────────────────────────────────────────────────────
// 分割數估計
// ─────────────────────────────────────────────────────────────────────────────
//
// 右端點矩形法的誤差上界：
//
//   |error| <= M·(b - a)² / (2n),   M = max_{[a,b]} |f'(x)|
//
// 令上界 <= precision 解出 n：
//
//   n = floor( M·(b - a)² / (2·precision) )
//
// 再夾到 [1, MAX_STEPS]。夾到上限時不發警告，precision 可能因此達不到；
// 呼叫端可用 PartitionEstimate::is_saturated() 自行判斷。

/// Outcome of one partition estimate, with the numbers that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionEstimate {
    partitions: usize,
    raw_partitions: f64,
    max_abs_derivative: f64,
    point_of_maximum: f64,
    evaluations: usize,
    converged: bool
}

impl PartitionEstimate {
    /// Clamped partition count, always in `[1, MAX_STEPS]`.
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// `floor(M·(b-a)²/(2·precision))` before clamping.
    pub fn raw_partitions(&self) -> f64 {
        self.raw_partitions
    }

    pub fn max_abs_derivative(&self) -> f64 {
        self.max_abs_derivative
    }

    pub fn point_of_maximum(&self) -> f64 {
        self.point_of_maximum
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// True when the ceiling was applied, i.e. the error bound asked for
    /// more than [`MAX_STEPS`] subintervals.
    pub fn is_saturated(&self) -> bool {
        self.raw_partitions > MAX_STEPS as f64
    }
}

/// `max(raw, 1)` then `min(.., MAX_STEPS)`; NaN counts as below the floor.
pub fn clamp_partitions(raw: f64) -> usize {
    if raw.is_nan() || raw < 1.0 {
        1
    } else if raw >= MAX_STEPS as f64 {
        MAX_STEPS
    } else {
        raw as usize
    }
}

pub struct PartitionEstimator<'m> {
    maximizer: &'m dyn BoundedMaximizer,
    settings: MaximizerSettings
}

impl<'m> PartitionEstimator<'m> {
    pub fn new(maximizer: &'m dyn BoundedMaximizer, settings: MaximizerSettings) -> PartitionEstimator<'m> {
        PartitionEstimator { maximizer, settings }
    }

    pub fn settings(&self) -> &MaximizerSettings {
        &self.settings
    }

    pub fn estimate(&self,
                    interval: &Interval,
                    precision: f64,
                    derivative: &dyn UnivariateFunction) -> PartitionEstimate {
        let abs_derivative = AbsoluteValue::new(derivative);
        let maximum = self.maximizer.maximize(
            &abs_derivative,
            interval.lo(),
            interval.hi(),
            &self.settings
        );

        let max_abs_derivative = abs_derivative.value(maximum.point);
        let factor = interval.width().powi(2) / (2.0 * precision);
        let raw_partitions = (factor * max_abs_derivative).floor();
        let partitions = clamp_partitions(raw_partitions);

        tracing::debug!(
            maximizer = self.maximizer.name(),
            point_of_maximum = maximum.point,
            max_abs_derivative,
            raw_partitions,
            partitions,
            "estimated partition count"
        );

        PartitionEstimate {
            partitions,
            raw_partitions,
            max_abs_derivative,
            point_of_maximum: maximum.point,
            evaluations: maximum.evaluations,
            converged: maximum.converged
        }
    }
}
