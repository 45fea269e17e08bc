use crate::math::function::elementary::{
    Exponential,
    Sine
};
use crate::math::function::polynomial::Polynomial;
use crate::math::function::univariatefunction::DifferentiableFunction;

/// Integrands that can be described in a configuration file.
///
/// Each variant carries a closed-form derivative, so the pair
/// (function, derivative) handed to the integrator is always consistent.
#[derive(Debug, Clone, PartialEq)]
pub enum Integrand {
    Polynomial(Polynomial),
    Sine(Sine),
    Exponential(Exponential)
}

impl Integrand {
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        match self {
            Integrand::Polynomial(p) => p.integral(a, b),
            Integrand::Sine(s) => s.integral(a, b),
            Integrand::Exponential(e) => e.integral(a, b)
        }
    }
}

impl DifferentiableFunction for Integrand {
    fn value(&self, x: f64) -> f64 {
        match self {
            Integrand::Polynomial(p) => p.value(x),
            Integrand::Sine(s) => s.value(x),
            Integrand::Exponential(e) => e.value(x)
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        match self {
            Integrand::Polynomial(p) => p.derivative(x),
            Integrand::Sine(s) => s.derivative(x),
            Integrand::Exponential(e) => e.derivative(x)
        }
    }
}

impl From<Polynomial> for Integrand {
    fn from(p: Polynomial) -> Self {
        Integrand::Polynomial(p)
    }
}

impl From<Sine> for Integrand {
    fn from(s: Sine) -> Self {
        Integrand::Sine(s)
    }
}

impl From<Exponential> for Integrand {
    fn from(e: Exponential) -> Self {
        Integrand::Exponential(e)
    }
}
