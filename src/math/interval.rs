use serde::{
    Deserialize,
    Serialize
};

use crate::integration::integrationerror::IntegrationError;

/// Closed integration domain `[lo, hi]` with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    lo: f64,
    hi: f64
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Result<Interval, IntegrationError> {
        // NaN 會讓兩個比較都失敗，所以要先檢查 finite
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(IntegrationError::InvalidInterval { lo, hi });
        }
        Ok(Interval { lo, hi })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntegrationError;

    fn try_from(bounds: [f64; 2]) -> Result<Self, Self::Error> {
        Interval::new(bounds[0], bounds[1])
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.lo, interval.hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_reversed() {
        assert!(Interval::new(1.0, 1.0).is_err());
        assert!(Interval::new(2.0, 1.0).is_err());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
        assert!(Interval::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_width_and_contains() {
        let interval = Interval::new(-1.0, 3.0).unwrap();
        assert_eq!(interval.width(), 4.0);
        assert!(interval.contains(-1.0));
        assert!(interval.contains(3.0));
        assert!(!interval.contains(3.5));
    }

    #[test]
    fn test_deserialize_from_pair() {
        let interval: Interval = serde_json::from_str("[0.0, 2.5]").unwrap();
        assert_eq!(interval.lo(), 0.0);
        assert_eq!(interval.hi(), 2.5);

        let reversed: Result<Interval, _> = serde_json::from_str("[3.0, 1.0]");
        assert!(reversed.is_err());
    }
}
