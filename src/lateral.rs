//! Lateral interaction - the `[w ⊛ f(u)]` term of the field equation
//!
//! Two computations of the same quantity:
//!
//! - **Convolution**: materialize the weight vector once per parameter
//!   change, then convolve it with the activation every step (FFT,
//!   O(N log N)). Works for every kernel family.
//! - **Sliding window**: for the step kernel only. Each of the two terms
//!   is an amplitude times the activation summed over a window of
//!   half-width `r` around the unit. Sliding the window by one unit
//!   removes exactly one value and adds exactly one, so after an O(N)
//!   initial sum each position costs O(1).
//!
//! ```text
//!          -------
//!          |     |
//! ---------=     =---------
//! ```
//!
//! The `=` are the corner points where window membership changes. On the
//! ring, the left corner of unit 0 sits at the far end of the buffer.

use crate::convolution::CircularConvolver;
use crate::error::Result;
use crate::kernel::{weight_vector, KernelFamily, KernelParams};

/// How much of the ring a window of a given radius covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Coverage {
    /// Negative (or NaN) radius: no unit is within reach.
    Empty,
    /// Window strictly smaller than the ring.
    Partial,
    /// Every unit is within reach, at every position.
    WholeRing,
}

impl Coverage {
    fn of(radius: f64, size: usize) -> Self {
        if radius.is_nan() || radius < 0.0 {
            Coverage::Empty
        } else if radius >= (size - 1) as f64 || radius >= (size / 2) as f64 {
            // floor(r) >= N/2 means 2 floor(r) + 1 >= N: the two halves of
            // the window meet on the far side of the ring
            Coverage::WholeRing
        } else {
            Coverage::Partial
        }
    }
}

/// Running windowed sum for one term of the step kernel.
///
/// `left` is the oldest index inside the window, `right` the newest.
/// Both advance modulo N.
#[derive(Clone, Debug)]
struct SlidingWindow {
    amplitude: f64,
    coverage: Coverage,
    sum: f64,
    left: usize,
    right: usize,
}

impl SlidingWindow {
    /// Window of half-width `radius` centered on unit 0.
    fn new(activation: &[f64], radius: f64, amplitude: f64) -> Self {
        let n = activation.len();
        let coverage = Coverage::of(radius, n);

        let (sum, left, right) = match coverage {
            Coverage::Empty => (0.0, 0, 0),
            Coverage::WholeRing => (activation.iter().sum::<f64>(), 0, 0),
            Coverage::Partial => {
                // ceil(N - r) == N - floor(r), kept in integers so rounding
                // in N - r cannot make the window lopsided
                let right = radius.floor() as usize;
                let left = n - right;
                // [0, right] plus the wrap-around tail [left, N)
                let sum = activation[..=right].iter().sum::<f64>()
                    + activation[left..].iter().sum::<f64>();
                (sum, left % n, right)
            }
        };

        Self {
            amplitude,
            coverage,
            sum,
            left,
            right,
        }
    }

    /// Shift the window one unit to the right.
    #[inline]
    fn advance(&mut self, activation: &[f64]) {
        if self.coverage != Coverage::Partial {
            return;
        }
        let n = activation.len();
        self.sum -= activation[self.left];
        self.left = (self.left + 1) % n;
        self.right = (self.right + 1) % n;
        self.sum += activation[self.right];
    }

    #[inline]
    fn value(&self) -> f64 {
        match self.coverage {
            Coverage::Empty => 0.0,
            _ => self.amplitude * self.sum,
        }
    }
}

/// Step-kernel lateral interaction in O(N), without a weight vector.
///
/// Agrees with convolving the step weight vector up to floating-point
/// rounding. The recurrence is sequential: position `i` depends on the
/// running sums left by position `i - 1`.
pub fn sliding_step(activation: &[f64], params: &KernelParams) -> Vec<f64> {
    let n = activation.len();
    let mut lateral = Vec::with_capacity(n);
    if n == 0 {
        return lateral;
    }

    let mut excitatory =
        SlidingWindow::new(activation, params.excitatory_radius(), params.amplitude);
    let mut inhibitory = SlidingWindow::new(
        activation,
        params.inhibitory_radius(),
        params.inhibitory_amplitude(),
    );

    lateral.push(excitatory.value() - inhibitory.value());
    for _ in 1..n {
        excitatory.advance(activation);
        inhibitory.advance(activation);
        lateral.push(excitatory.value() - inhibitory.value());
    }

    lateral
}

/// Lateral interaction strategy owned by a field.
///
/// Picked once from the kernel family when the field is built.
#[derive(Clone, Debug)]
pub enum LateralInteraction {
    /// Circular convolution with a materialized weight vector.
    Convolution {
        family: KernelFamily,
        convolver: CircularConvolver,
        weights: Vec<f64>,
    },
    /// Linear-time step kernel; keeps no weight vector.
    SlidingStep,
}

impl LateralInteraction {
    /// Strategy for a ring of `size` units. Weights start at zero.
    pub fn new(family: KernelFamily, size: usize) -> Self {
        if family.is_sliding_window() {
            LateralInteraction::SlidingStep
        } else {
            LateralInteraction::Convolution {
                family,
                convolver: CircularConvolver::new(size),
                weights: vec![0.0; size],
            }
        }
    }

    /// Rebuild the weight vector after a parameter change. No-op for the
    /// sliding window.
    pub fn rebuild(&mut self, params: &KernelParams) {
        if let LateralInteraction::Convolution {
            family,
            convolver,
            weights,
        } = self
        {
            *weights = weight_vector(*family, convolver.len(), params);
        }
    }

    /// Current weight vector, if this strategy keeps one.
    pub fn weights(&self) -> Option<&[f64]> {
        match self {
            LateralInteraction::Convolution { weights, .. } => Some(weights.as_slice()),
            LateralInteraction::SlidingStep => None,
        }
    }

    /// Lateral contribution at every unit for the given activation.
    pub fn compute(&self, activation: &[f64], params: &KernelParams) -> Result<Vec<f64>> {
        match self {
            LateralInteraction::Convolution {
                convolver, weights, ..
            } => convolver.convolve(activation, weights),
            LateralInteraction::SlidingStep => Ok(sliding_step(activation, params)),
        }
    }
}
