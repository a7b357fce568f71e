//! Circular convolution
//!
//! `c[i] = Σ_j a[j] · b[(i - j) mod N]`, computed through a length-N FFT
//! in O(N log N). [`cconv_direct`] is the O(N²) definition, kept as a
//! reference.

use crate::error::{FieldError, Result};
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

/// FFT-backed circular convolution for a fixed length.
///
/// Plans are computed once, so repeated convolutions of the same length
/// (one per field step) do not re-plan.
#[derive(Clone)]
pub struct CircularConvolver {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl CircularConvolver {
    /// Plan forward and inverse transforms of length `len`.
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        // Empty input never reaches the transforms
        let planned = len.max(1);
        Self {
            len,
            forward: planner.plan_fft_forward(planned),
            inverse: planner.plan_fft_inverse(planned),
        }
    }

    /// Transform length.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Circular convolution of `a` and `b`, both of length `len()`.
    pub fn convolve(&self, a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
        self.check_len(a.len())?;
        self.check_len(b.len())?;
        if self.len == 0 {
            return Ok(Vec::new());
        }

        let mut fa = to_complex(a);
        let mut fb = to_complex(b);
        self.forward.process(&mut fa);
        self.forward.process(&mut fb);

        for (x, y) in fa.iter_mut().zip(&fb) {
            *x *= *y;
        }
        self.inverse.process(&mut fa);

        // rustfft leaves the inverse unnormalized
        let scale = 1.0 / self.len as f64;
        Ok(fa.iter().map(|c| c.re * scale).collect())
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if actual != self.len {
            return Err(FieldError::InputSizeMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for CircularConvolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularConvolver")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

fn to_complex(values: &[f64]) -> Vec<Complex<f64>> {
    values.iter().map(|&x| Complex::new(x, 0.0)).collect()
}

/// One-shot FFT circular convolution. Plans a fresh convolver each call.
pub fn cconv(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    CircularConvolver::new(a.len()).convolve(a, b)
}

/// Circular convolution by direct summation, O(N²).
pub fn cconv_direct(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    let n = a.len();
    if b.len() != n {
        return Err(FieldError::InputSizeMismatch {
            expected: n,
            actual: b.len(),
        });
    }

    Ok((0..n)
        .map(|i| {
            a.iter()
                .enumerate()
                .map(|(j, &aj)| aj * b[(i + n - j) % n])
                .sum()
        })
        .collect())
}
