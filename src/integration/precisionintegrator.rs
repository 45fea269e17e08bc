use crate::integration::integrationerror::IntegrationError;
use crate::integration::integrationinput::IntegrationInput;
use crate::integration::partitionestimator::{
    PartitionEstimate,
    PartitionEstimator,
    MAX_STEPS
};
use crate::integration::rightrectangle;
use crate::math::optimize::boundedmaximizer::{
    BoundedMaximizer,
    MaximizerSettings
};
use crate::math::optimize::brentmaximizer::BrentMaximizer;

/// Estimate plus the partition count it was computed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralResult {
    pub estimate: f64,
    pub partitions: usize,
    pub partition_estimate: PartitionEstimate
}

/// Picks the partition count from the precision target, then integrates
/// with the right-endpoint rectangle rule.
///
/// Holds no state between runs; one integrator can be reused for any
/// number of inputs.
pub struct PrecisionIntegrator {
    maximizer: Box<dyn BoundedMaximizer>,
    settings: MaximizerSettings
}

impl PrecisionIntegrator {
    pub fn new(maximizer: Box<dyn BoundedMaximizer>) -> PrecisionIntegrator {
        PrecisionIntegrator { maximizer, settings: MaximizerSettings::default() }
    }

    pub fn with_settings(maximizer: Box<dyn BoundedMaximizer>, settings: MaximizerSettings) -> PrecisionIntegrator {
        PrecisionIntegrator { maximizer, settings }
    }

    pub fn maximizer(&self) -> &dyn BoundedMaximizer {
        self.maximizer.as_ref()
    }

    pub fn settings(&self) -> &MaximizerSettings {
        &self.settings
    }

    pub fn compute(&self, input: &IntegrationInput) -> Result<IntegralResult, IntegrationError> {
        let estimator = PartitionEstimator::new(self.maximizer.as_ref(), self.settings);
        let partition_estimate = estimator.estimate(
            input.interval(),
            input.precision(),
            input.derivative()
        );
        let partitions = partition_estimate.partitions();
        if partitions < 1 || partitions > MAX_STEPS {
            return Err(IntegrationError::InvalidArgument(
                format!("partition count {} escaped the clamp [1, {}]", partitions, MAX_STEPS)
            ));
        }

        let estimate = rightrectangle::evaluate(input.function(), input.interval(), partitions)?;
        tracing::debug!(partitions, estimate, "integral computed");

        Ok(IntegralResult { estimate, partitions, partition_estimate })
    }
}

impl Default for PrecisionIntegrator {
    fn default() -> Self {
        PrecisionIntegrator::new(Box::new(BrentMaximizer::new()))
    }
}

/// Integrates `input` with the default Brent maximizer and settings.
pub fn compute_integral(input: &IntegrationInput) -> Result<IntegralResult, IntegrationError> {
    PrecisionIntegrator::default().compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interval::Interval;
    use crate::math::optimize::gridsearchmaximizer::GridSearchMaximizer;

    #[test]
    fn test_identity_on_unit_interval() {
        let input = IntegrationInput::builder()
            .interval(Interval::new(0.0, 1.0).unwrap())
            .precision(0.5)
            .function(|x: f64| x)
            .derivative(|_: f64| 1.0)
            .build()
            .unwrap();
        let result = compute_integral(&input).unwrap();
        assert_eq!(result.partitions, 1);
        assert_eq!(result.estimate, 1.0);
    }

    #[test]
    fn test_grid_and_brent_agree_on_linear_derivative() {
        // f = x², f' = 2x：|f'| 最大值在右端點
        let input = IntegrationInput::builder()
            .interval(Interval::new(0.0, 1.0).unwrap())
            .precision(1e-2)
            .function(|x: f64| x * x)
            .derivative(|x: f64| 2.0 * x)
            .build()
            .unwrap();
        let grid = PrecisionIntegrator::new(Box::new(GridSearchMaximizer::new()))
            .compute(&input)
            .unwrap();
        let brent = compute_integral(&input).unwrap();
        assert_eq!(grid.partitions, 100);
        assert!(brent.partitions <= grid.partitions);
        assert!(brent.partitions >= 97);
        assert!((brent.estimate - 1.0 / 3.0).abs() <= 1e-2);
    }
}
