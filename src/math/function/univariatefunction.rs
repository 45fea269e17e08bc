/// A real-valued function of one real variable.
///
/// Implementations are expected to be pure: the integrator may call
/// `value` any number of times, in any order, and relies on getting the
/// same answer for the same `x`.
pub trait UnivariateFunction {
    fn value(&self, x: f64) -> f64;
}

impl<F> UnivariateFunction for F where
    F: Fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A function that also knows its first derivative in closed form.
pub trait DifferentiableFunction {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapters
// ─────────────────────────────────────────────────────────────────────────────

/// `g(x) = |f(x)|`
pub struct AbsoluteValue<'a> {
    inner: &'a dyn UnivariateFunction
}

impl<'a> AbsoluteValue<'a> {
    pub fn new(inner: &'a dyn UnivariateFunction) -> AbsoluteValue<'a> {
        AbsoluteValue { inner }
    }
}

impl UnivariateFunction for AbsoluteValue<'_> {
    fn value(&self, x: f64) -> f64 {
        self.inner.value(x).abs()
    }
}

/// The value side of a [`DifferentiableFunction`].
pub struct ValueOf<'a, D: ?Sized> {
    curve: &'a D
}

impl<'a, D: DifferentiableFunction + ?Sized> ValueOf<'a, D> {
    pub fn new(curve: &'a D) -> ValueOf<'a, D> {
        ValueOf { curve }
    }
}

impl<D: DifferentiableFunction + ?Sized> UnivariateFunction for ValueOf<'_, D> {
    fn value(&self, x: f64) -> f64 {
        self.curve.value(x)
    }
}

/// The derivative side of a [`DifferentiableFunction`].
pub struct DerivativeOf<'a, D: ?Sized> {
    curve: &'a D
}

impl<'a, D: DifferentiableFunction + ?Sized> DerivativeOf<'a, D> {
    pub fn new(curve: &'a D) -> DerivativeOf<'a, D> {
        DerivativeOf { curve }
    }
}

impl<D: DifferentiableFunction + ?Sized> UnivariateFunction for DerivativeOf<'_, D> {
    fn value(&self, x: f64) -> f64 {
        self.curve.derivative(x)
    }
}
