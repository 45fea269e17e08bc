use crate::integration::integrationerror::IntegrationError;
use crate::integration::partitionestimator::MAX_STEPS;
use crate::math::function::univariatefunction::UnivariateFunction;
use crate::math::interval::Interval;

/// Right-endpoint rectangle rule with `partitions` equal subintervals.
///
///   dx = (b - a)/n
///   I ≈ dx · Σ_{i=1..n} f(a + i·dx)
///
/// `f(a)` is never evaluated. The sum runs left to right so the rounding is
/// reproducible.
pub fn evaluate(function: &dyn UnivariateFunction,
                interval: &Interval,
                partitions: usize) -> Result<f64, IntegrationError> {
    if partitions < 1 || partitions > MAX_STEPS {
        return Err(IntegrationError::InvalidArgument(
            format!("partitions must be in [1, {}], got {}", MAX_STEPS, partitions)
        ));
    }

    let lo = interval.lo();
    let dx = interval.width() / partitions as f64;
    let mut result = 0.0;
    for i in 1..=partitions {
        result += function.value(lo + i as f64 * dx);
    }
    Ok(result * dx)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_single_rectangle_uses_right_endpoint() {
        // dx = 2：右端點給 dx·f(2) = 4，midpoint 與 trapezoid 都給 2
        let interval = Interval::new(0.0, 2.0).unwrap();
        let estimate = evaluate(&|x: f64| x, &interval, 1).unwrap();
        assert_eq!(estimate, 4.0);
    }

    #[test]
    fn test_constant_function_is_exact() {
        let interval = Interval::new(-1.0, 4.0).unwrap();
        let estimate = evaluate(&|_: f64| 2.5, &interval, 7).unwrap();
        assert!((estimate - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_zero_and_oversized_partitions() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        assert!(matches!(
            evaluate(&|x: f64| x, &interval, 0),
            Err(IntegrationError::InvalidArgument(_))
        ));
        assert!(matches!(
            evaluate(&|x: f64| x, &interval, MAX_STEPS + 1),
            Err(IntegrationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_evaluation_order_is_left_to_right() {
        let seen = RefCell::new(Vec::new());
        let interval = Interval::new(0.0, 1.0).unwrap();
        let _ = evaluate(&|x: f64| {
            seen.borrow_mut().push(x);
            x
        }, &interval, 4).unwrap();
        assert_eq!(*seen.borrow(), vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_first_order_error() {
        // ∫_0^1 x dx = 0.5，右端點法高估 1/(2n)
        let interval = Interval::new(0.0, 1.0).unwrap();
        let estimate = evaluate(&|x: f64| x, &interval, 100).unwrap();
        assert!((estimate - 0.505).abs() < 1e-12);
    }
}
