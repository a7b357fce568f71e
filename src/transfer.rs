//! Transfer functions - membrane potential to firing rate

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Elementwise mapping from potential `u` to activation `f(u)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransferFunction {
    /// `0.5 * (sign(x) + 1)`: 0 below zero, 0.5 at zero, 1 above.
    #[default]
    Heaviside,
    /// `a / (1 + exp(b * (x - x0)))`.
    Sigmoid { a: f64, b: f64, x0: f64 },
    /// `max(0, x)`.
    Rectified,
}

impl TransferFunction {
    /// Standard logistic sigmoid (a = 1, b = -1, x0 = 0).
    pub fn sigmoid() -> Self {
        Self::Sigmoid {
            a: 1.0,
            b: -1.0,
            x0: 0.0,
        }
    }

    /// Apply to a single value.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            Self::Heaviside => {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    0.0
                } else if x == 0.0 {
                    0.5
                } else {
                    // NaN propagates
                    x
                }
            }
            Self::Sigmoid { a, b, x0 } => a / (1.0 + (b * (x - x0)).exp()),
            Self::Rectified => {
                if x < 0.0 {
                    0.0
                } else {
                    x
                }
            }
        }
    }

    /// Apply to every value of a slice.
    pub fn apply_slice(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&x| self.apply(x)).collect()
    }

    /// Write `f(src[i])` into `dst[i]`.
    pub fn apply_into(&self, src: &[f64], dst: &mut [f64]) {
        debug_assert_eq!(src.len(), dst.len());
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.apply(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heaviside() {
        let tf = TransferFunction::Heaviside;
        assert_eq!(tf.apply(-2.0), 0.0);
        assert_eq!(tf.apply(0.0), 0.5);
        assert_eq!(tf.apply(1e-12), 1.0);
        assert!(tf.apply(f64::NAN).is_nan());
    }

    #[test]
    fn test_sigmoid() {
        let tf = TransferFunction::sigmoid();
        assert!((tf.apply(0.0) - 0.5).abs() < 1e-12);
        assert!(tf.apply(20.0) > 0.999);
        assert!(tf.apply(-20.0) < 0.001);

        let shifted = TransferFunction::Sigmoid {
            a: 2.0,
            b: -1.0,
            x0: 3.0,
        };
        assert!((shifted.apply(3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rectified() {
        let tf = TransferFunction::Rectified;
        assert_eq!(
            tf.apply_slice(&[-1.0, 0.0, 0.25, 3.0]),
            vec![0.0, 0.0, 0.25, 3.0]
        );
    }

    #[test]
    fn test_apply_into() {
        let tf = TransferFunction::Heaviside;
        let mut out = vec![9.0; 3];
        tf.apply_into(&[-1.0, 0.0, 1.0], &mut out);
        assert_eq!(out, vec![0.0, 0.5, 1.0]);
    }
}
