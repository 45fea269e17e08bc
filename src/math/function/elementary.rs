use crate::math::function::univariatefunction::DifferentiableFunction;

/// `a·sin(ωx)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sine {
    amplitude: f64,
    frequency: f64
}

impl Sine {
    pub fn new(amplitude: f64, frequency: f64) -> Sine {
        Sine { amplitude, frequency }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn integral(&self, a: f64, b: f64) -> f64 {
        if self.frequency == 0.0 {
            return 0.0;
        }
        let w = self.frequency;
        self.amplitude * ((w * a).cos() - (w * b).cos()) / w
    }
}

impl DifferentiableFunction for Sine {
    fn value(&self, x: f64) -> f64 {
        self.amplitude * (self.frequency * x).sin()
    }

    fn derivative(&self, x: f64) -> f64 {
        self.amplitude * self.frequency * (self.frequency * x).cos()
    }
}

/// `a·e^(rx)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    amplitude: f64,
    rate: f64
}

impl Exponential {
    pub fn new(amplitude: f64, rate: f64) -> Exponential {
        Exponential { amplitude, rate }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn integral(&self, a: f64, b: f64) -> f64 {
        if self.rate == 0.0 {
            return self.amplitude * (b - a);
        }
        self.amplitude * ((self.rate * b).exp() - (self.rate * a).exp()) / self.rate
    }
}

impl DifferentiableFunction for Exponential {
    fn value(&self, x: f64) -> f64 {
        self.amplitude * (self.rate * x).exp()
    }

    fn derivative(&self, x: f64) -> f64 {
        self.amplitude * self.rate * (self.rate * x).exp()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_sine() {
        let s = Sine::new(2.0, 1.0);
        assert!((s.value(PI / 2.0) - 2.0).abs() < 1e-15);
        assert!((s.derivative(0.0) - 2.0).abs() < 1e-15);
        assert!((s.integral(0.0, PI) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_exponential() {
        let e = Exponential::new(1.0, 1.0);
        assert_eq!(e.value(0.0), 1.0);
        assert!((e.derivative(1.0) - std::f64::consts::E).abs() < 1e-15);
        assert!((e.integral(0.0, 1.0) - (std::f64::consts::E - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_parameters() {
        assert_eq!(Sine::new(3.0, 0.0).integral(0.0, 5.0), 0.0);
        assert_eq!(Exponential::new(3.0, 0.0).integral(1.0, 2.0), 3.0);
    }
}
