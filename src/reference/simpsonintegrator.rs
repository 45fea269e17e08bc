use thiserror::Error;

use crate::math::function::univariatefunction::UnivariateFunction;
use crate::math::interval::Interval;

// ─────────────────────────────────────────────────────────────────────────────
// SimpsonIntegrator - 對照用積分
// ─────────────────────────────────────────────────────────────────────────────
//
// 以 trapezoid 逐級加倍為基礎：
//
//   T_0 = (b - a)/2 · (f(a) + f(b))
//   T_k = T_{k-1}/2 + h_k · Σ f(新增中點),   h_k = (b - a)/2^(k-1)
//
// Richardson 外插得 Simpson：
//
//   S_k = (4·T_k - T_{k-1}) / 3
//
// 迭代數 >= min_iterations 之後，若
//   |S_k - S_{k-1}| <= relative_accuracy·(|S_k| + |S_{k-1}|)/2
// 或
//   |S_k - S_{k-1}| <= absolute_accuracy
// 即視為收斂。
//
// 只用來產生診斷用的比較值，精度保證不屬於矩形法的合約。

pub const DEFAULT_RELATIVE_ACCURACY: f64 = 1e-6;
pub const DEFAULT_ABSOLUTE_ACCURACY: f64 = 1e-15;
pub const DEFAULT_MIN_ITERATIONS: u32 = 3;
pub const DEFAULT_MAX_ITERATIONS: u32 = 32;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReferenceError {
    #[error("simpson integration did not converge after {iterations} iterations (last estimate {last_estimate})")]
    MaxIterationsExceeded { iterations: u32, last_estimate: f64 },

    #[error("invalid iteration bounds: min {min}, max {max}")]
    InvalidIterationBounds { min: u32, max: u32 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceIntegral {
    pub value: f64,
    pub iterations: u32,
    pub evaluations: usize
}

struct TrapezoidStages<'a> {
    function: &'a dyn UnivariateFunction,
    lo: f64,
    hi: f64,
    sum: f64,
    evaluations: usize
}

impl<'a> TrapezoidStages<'a> {
    fn new(function: &'a dyn UnivariateFunction, interval: &Interval) -> TrapezoidStages<'a> {
        TrapezoidStages {
            function,
            lo: interval.lo(),
            hi: interval.hi(),
            sum: 0.0,
            evaluations: 0
        }
    }

    /// 第 n 級的 trapezoid 值；必須依序由 0 開始呼叫
    fn stage(&mut self, n: u32) -> f64 {
        let width = self.hi - self.lo;
        if n == 0 {
            let f_lo = self.function.value(self.lo);
            let f_hi = self.function.value(self.hi);
            self.evaluations += 2;
            self.sum = 0.5 * width * (f_lo + f_hi);
        } else {
            let np: u64 = 1 << (n - 1);
            let spacing = width / np as f64;
            let mut x = self.lo + 0.5 * spacing;
            let mut total = 0.0;
            for _ in 0..np {
                total += self.function.value(x);
                x += spacing;
            }
            self.evaluations += np as usize;
            self.sum = 0.5 * (self.sum + total * spacing);
        }
        self.sum
    }
}

/// Iterative Simpson rule, used to produce an independent comparison value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpsonIntegrator {
    relative_accuracy: f64,
    absolute_accuracy: f64,
    min_iterations: u32,
    max_iterations: u32
}

impl Default for SimpsonIntegrator {
    fn default() -> Self {
        SimpsonIntegrator {
            relative_accuracy: DEFAULT_RELATIVE_ACCURACY,
            absolute_accuracy: DEFAULT_ABSOLUTE_ACCURACY,
            min_iterations: DEFAULT_MIN_ITERATIONS,
            max_iterations: DEFAULT_MAX_ITERATIONS
        }
    }
}

impl SimpsonIntegrator {
    pub fn new(relative_accuracy: f64,
               absolute_accuracy: f64,
               min_iterations: u32,
               max_iterations: u32) -> Result<SimpsonIntegrator, ReferenceError> {
        // stage 內部用 1 << (n - 1)，64 級以上會溢位
        if min_iterations < 1 || min_iterations > max_iterations || max_iterations > 63 {
            return Err(ReferenceError::InvalidIterationBounds {
                min: min_iterations,
                max: max_iterations
            });
        }
        Ok(SimpsonIntegrator { relative_accuracy, absolute_accuracy, min_iterations, max_iterations })
    }

    pub fn integrate(&self,
                     function: &dyn UnivariateFunction,
                     interval: &Interval) -> Result<ReferenceIntegral, ReferenceError> {
        let mut stages = TrapezoidStages::new(function, interval);

        if self.min_iterations == 1 {
            let t0 = stages.stage(0);
            let t1 = stages.stage(1);
            return Ok(ReferenceIntegral {
                value: (4.0 * t1 - t0) / 3.0,
                iterations: 1,
                evaluations: stages.evaluations
            });
        }

        let mut old_s = 0.0;
        let mut old_t = stages.stage(0);
        let mut iterations = 0;
        while iterations < self.max_iterations {
            iterations += 1;
            let t = stages.stage(iterations);
            let s = (4.0 * t - old_t) / 3.0;
            if iterations >= self.min_iterations {
                let delta = (s - old_s).abs();
                let r_limit = self.relative_accuracy * (old_s.abs() + s.abs()) * 0.5;
                if delta <= r_limit || delta <= self.absolute_accuracy {
                    return Ok(ReferenceIntegral {
                        value: s,
                        iterations,
                        evaluations: stages.evaluations
                    });
                }
            }
            old_s = s;
            old_t = t;
        }

        Err(ReferenceError::MaxIterationsExceeded {
            iterations: self.max_iterations,
            last_estimate: old_s
        })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_exact_for_cubic() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let result = SimpsonIntegrator::default()
            .integrate(&|x: f64| x * x * x, &interval)
            .unwrap();
        assert!((result.value - 0.25).abs() < 1e-14);
        assert_eq!(result.iterations, DEFAULT_MIN_ITERATIONS);
    }

    #[test]
    fn test_sine_over_half_period() {
        let interval = Interval::new(0.0, PI).unwrap();
        let result = SimpsonIntegrator::default()
            .integrate(&|x: f64| x.sin(), &interval)
            .unwrap();
        assert!((result.value - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_evaluation_count() {
        // stage 0: 2 點，stage k: 2^(k-1) 點
        let interval = Interval::new(0.0, 1.0).unwrap();
        let result = SimpsonIntegrator::default()
            .integrate(&|x: f64| x, &interval)
            .unwrap();
        assert_eq!(result.iterations, 3);
        assert_eq!(result.evaluations, 2 + 1 + 2 + 4);
    }

    #[test]
    fn test_single_iteration_shortcut() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let integrator = SimpsonIntegrator::new(1e-6, 1e-15, 1, 10).unwrap();
        let result = integrator.integrate(&|x: f64| x * x, &interval).unwrap();
        assert!((result.value - 8.0 / 3.0).abs() < 1e-14);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_reports_non_convergence() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let integrator = SimpsonIntegrator::new(1e-15, 0.0, 2, 4).unwrap();
        let result = integrator.integrate(&|x: f64| (200.0 * x).sin(), &interval);
        assert!(matches!(result, Err(ReferenceError::MaxIterationsExceeded { iterations: 4, .. })));
    }

    #[test]
    fn test_rejects_bad_iteration_bounds() {
        assert!(SimpsonIntegrator::new(1e-6, 1e-15, 0, 10).is_err());
        assert!(SimpsonIntegrator::new(1e-6, 1e-15, 5, 4).is_err());
        assert!(SimpsonIntegrator::new(1e-6, 1e-15, 3, 64).is_err());
    }
}
