use std::cell::Cell;

use argmin::core::{
    CostFunction,
    Error,
    Executor,
    State,
    TerminationReason
};
use argmin::solver::brent::BrentOpt;

use crate::math::function::univariatefunction::UnivariateFunction;
use crate::math::optimize::boundedmaximizer::{
    BoundedMaximizer,
    Maximum,
    MaximizerSettings
};
use crate::math::optimize::gridsearchmaximizer::GridSearchMaximizer;

// ─────────────────────────────────────────────────────────────────────────────
// BrentMaximizer
// ─────────────────────────────────────────────────────────────────────────────
//
// argmin 的 BrentOpt 只做最小化，所以對 -g 求最小：
//
//   argmax g(x) = argmin -g(x),  x ∈ [lo, hi]
//
// 停止條件（Brent 1973）：
//   tol = eps·|x| + t
//   |x - m| <= 2·tol - (b - a)/2
// eps 對應 relative_tolerance，t 對應 absolute_tolerance。
//
// 評估次數：init 一次 + 每個 iteration 一次，所以
//   max_iters = max_evaluations - 1

struct NegatedObjective<'a> {
    objective: &'a dyn UnivariateFunction,
    evaluations: &'a Cell<usize>
}

impl CostFunction for NegatedObjective<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        self.evaluations.set(self.evaluations.get() + 1);
        Ok(-self.objective.value(*x))
    }
}

/// Brent's parabolic-interpolation / golden-section search, driven by
/// argmin.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrentMaximizer;

impl BrentMaximizer {
    pub fn new() -> BrentMaximizer {
        BrentMaximizer
    }

    fn run(&self,
           objective: &dyn UnivariateFunction,
           lo: f64,
           hi: f64,
           settings: &MaximizerSettings) -> Result<Maximum, Error> {
        let evaluations = Cell::new(0usize);
        let problem = NegatedObjective { objective, evaluations: &evaluations };
        let solver = BrentOpt::new(lo, hi)
            .set_tolerance(settings.relative_tolerance, settings.absolute_tolerance);
        let max_iters = settings.max_evaluations.saturating_sub(1).max(1) as u64;

        let result = Executor::new(problem, solver)
            .configure(|state| state.max_iters(max_iters))
            .run()?;

        let state = result.state();
        let converged = matches!(
            state.get_termination_reason(),
            Some(TerminationReason::SolverConverged)
        );
        let (point, value) = match state.get_best_param() {
            Some(&x) => (x, -state.get_best_cost()),
            // g 全是 NaN 時 argmin 不會記錄 best，退回區間中點
            None => {
                let mid = 0.5 * (lo + hi);
                (mid, objective.value(mid))
            }
        };

        Ok(Maximum {
            point,
            value,
            evaluations: evaluations.get(),
            converged
        })
    }
}

impl BoundedMaximizer for BrentMaximizer {
    fn name(&self) -> &'static str {
        "brent"
    }

    fn maximize(&self,
                objective: &dyn UnivariateFunction,
                lo: f64,
                hi: f64,
                settings: &MaximizerSettings) -> Maximum {
        match self.run(objective, lo, hi, settings) {
            Ok(maximum) => {
                if !maximum.converged {
                    tracing::debug!(
                        "brent search stopped after {} evaluations without converging, best x = {}",
                        maximum.evaluations,
                        maximum.point
                    );
                }
                maximum
            },
            Err(error) => {
                tracing::debug!("brent search failed ({}), falling back to grid search", error);
                GridSearchMaximizer::new().maximize(objective, lo, hi, settings)
            }
        }
    }
}
