use crate::integration::integrationerror::{
    InputKind,
    IntegrationError
};
use crate::math::function::univariatefunction::{
    DerivativeOf,
    DifferentiableFunction,
    UnivariateFunction,
    ValueOf
};
use crate::math::interval::Interval;

/// Everything one integration run needs, checked and typed.
///
/// Only [`IntegrationInputBuilder::build`] creates one, so holding an
/// `IntegrationInput` means all four inputs are present and the precision
/// is a usable tolerance.
pub struct IntegrationInput<'a> {
    interval: Interval,
    precision: f64,
    function: Box<dyn UnivariateFunction + 'a>,
    derivative: Box<dyn UnivariateFunction + 'a>
}

impl<'a> IntegrationInput<'a> {
    pub fn builder() -> IntegrationInputBuilder<'a> {
        IntegrationInputBuilder::new()
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    pub fn function(&self) -> &dyn UnivariateFunction {
        self.function.as_ref()
    }

    pub fn derivative(&self) -> &dyn UnivariateFunction {
        self.derivative.as_ref()
    }
}

/// Collects the inputs one at a time; any slot may be left empty.
#[derive(Default)]
pub struct IntegrationInputBuilder<'a> {
    interval: Option<Interval>,
    precision: Option<f64>,
    function: Option<Box<dyn UnivariateFunction + 'a>>,
    derivative: Option<Box<dyn UnivariateFunction + 'a>>
}

impl<'a> IntegrationInputBuilder<'a> {
    pub fn new() -> IntegrationInputBuilder<'a> {
        IntegrationInputBuilder {
            interval: None,
            precision: None,
            function: None,
            derivative: None
        }
    }

    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn interval_opt(mut self, interval: Option<Interval>) -> Self {
        self.interval = interval;
        self
    }

    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn precision_opt(mut self, precision: Option<f64>) -> Self {
        self.precision = precision;
        self
    }

    pub fn function<F>(mut self, function: F) -> Self where
        F: UnivariateFunction + 'a {
        self.function = Some(Box::new(function));
        self
    }

    pub fn derivative<F>(mut self, derivative: F) -> Self where
        F: UnivariateFunction + 'a {
        self.derivative = Some(Box::new(derivative));
        self
    }

    /// Fills both the function and derivative slots from one curve.
    pub fn differentiable<D>(self, curve: &'a D) -> Self where
        D: DifferentiableFunction + ?Sized {
        self.function(ValueOf::new(curve))
            .derivative(DerivativeOf::new(curve))
    }

    /// Checks that every slot is filled, in the order interval, precision,
    /// function, derivative, and reports the first one that is empty.
    /// Nothing is evaluated here.
    pub fn build(self) -> Result<IntegrationInput<'a>, IntegrationError> {
        let interval = self.interval
            .ok_or(IntegrationError::MissingInput(InputKind::Interval))?;
        let precision = self.precision
            .ok_or(IntegrationError::MissingInput(InputKind::Precision))?;
        let function = self.function
            .ok_or(IntegrationError::MissingInput(InputKind::Function))?;
        let derivative = self.derivative
            .ok_or(IntegrationError::MissingInput(InputKind::Derivative))?;

        if !precision.is_finite() || precision <= 0.0 {
            return Err(IntegrationError::InvalidPrecision(precision));
        }

        Ok(IntegrationInput { interval, precision, function, derivative })
    }
}
