use crate::math::function::univariatefunction::DifferentiableFunction;

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial - Monomial Form
// ─────────────────────────────────────────────────────────────────────────────
//
// 係數以升冪存放 [a_0, a_1, ..., a_n]，代表：
//
//   p(x) = Σ a_k·x^k
//
// 導數與反導數都是封閉形式，預先在建構時算好：
//   p'(x)  = Σ k·a_k·x^(k-1)
//   ∫p(x)  = Σ a_k·x^(k+1)/(k+1)
//
// 求值一律用 Horner（由高次往低次 mul_add）。

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefs: Vec<f64>,
    deriv_coefs: Vec<f64>
}

impl Polynomial {
    /// 空係數視為零多項式
    pub fn new(coefs: Vec<f64>) -> Polynomial {
        let coefs = if coefs.is_empty() { vec![0.0] } else { coefs };
        let deriv_coefs = Self::compute_deriv_coefs(&coefs);
        Polynomial { coefs, deriv_coefs }
    }

    pub fn constant(c: f64) -> Polynomial {
        Polynomial::new(vec![c])
    }

    fn compute_deriv_coefs(coefs: &[f64]) -> Vec<f64> {
        if coefs.len() == 1 {
            vec![0.0]
        } else {
            coefs[1..]
                .iter()
                .enumerate()
                .map(|(i, &a)| (i + 1) as f64 * a)
                .collect()
        }
    }

    fn evaluate(coefs: &[f64], x: f64) -> f64 {
        let mut iter = coefs.iter().rev();
        let mut result = *iter.next().unwrap_or(&0.0);
        for &a in iter {
            result = f64::mul_add(result, x, a);
        }
        result
    }

    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    pub fn derivative_polynomial(&self) -> Polynomial {
        Polynomial::new(self.deriv_coefs.clone())
    }

    /// ∫_a^b p(x) dx，用反導數在兩端點的差
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        let mut anti = Vec::with_capacity(self.coefs.len() + 1);
        anti.push(0.0);
        anti.extend(
            self.coefs
                .iter()
                .enumerate()
                .map(|(k, &a_k)| a_k / (k + 1) as f64)
        );
        Self::evaluate(&anti, b) - Self::evaluate(&anti, a)
    }
}

impl DifferentiableFunction for Polynomial {
    fn value(&self, x: f64) -> f64 {
        Self::evaluate(&self.coefs, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        Self::evaluate(&self.deriv_coefs, x)
    }
}
