//! Lateral weight kernels on a toric domain
//!
//! Every kernel is a difference of an excitatory term of width `ke * si`
//! and an inhibitory term of width `si`, both scaled by `Ae` (the
//! inhibitory one additionally by `ki`):
//!
//! ```text
//! DOG:  Ae exp(-d²/(2 (ke si)²)) - ki Ae exp(-d²/(2 si²))
//! DOE:  Ae exp(-4|d|/(ke si)²)   - ki Ae exp(-4|d|/si²)
//! DOL:  Ae [1 - |d|/(2 ke si)]⁺  - ki Ae [1 - |d|/(2 si)]⁺
//! STEP: Ae 1(|d| <= ke si)       - ki Ae 1(|d| <= si)
//! ```
//!
//! Parameters are not validated. Out-of-range values (negative `Ae`,
//! `ke`/`ki` outside [0, 1], `si <= 0`) produce degenerate weights
//! rather than errors.

use crate::error::FieldError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape parameters `(Ae, ke, ki, si)` shared by all kernel families.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KernelParams {
    /// Excitatory amplitude `Ae` (>= 0).
    pub amplitude: f64,

    /// Excitatory radius as a fraction of `si` (`ke`, in [0, 1]).
    pub excitatory_ratio: f64,

    /// Inhibitory amplitude as a fraction of `Ae` (`ki`, in [0, 1]).
    pub inhibitory_ratio: f64,

    /// Base spatial scale `si` (> 0), the inhibitory radius.
    pub sigma: f64,
}

impl KernelParams {
    pub fn new(amplitude: f64, excitatory_ratio: f64, inhibitory_ratio: f64, sigma: f64) -> Self {
        Self {
            amplitude,
            excitatory_ratio,
            inhibitory_ratio,
            sigma,
        }
    }

    /// Excitatory width `se = ke * si`.
    #[inline]
    pub fn excitatory_radius(&self) -> f64 {
        self.excitatory_ratio * self.sigma
    }

    /// Inhibitory width `si`.
    #[inline]
    pub fn inhibitory_radius(&self) -> f64 {
        self.sigma
    }

    /// Inhibitory amplitude `Ai = ki * Ae`.
    #[inline]
    pub fn inhibitory_amplitude(&self) -> f64 {
        self.inhibitory_ratio * self.amplitude
    }
}

/// Kernel family, chosen once when a field is built.
///
/// `Step` and `OptimStep` share the same weight shape. They differ only in
/// how the lateral interaction is computed: `Step` convolves a
/// materialized weight vector, `OptimStep` slides a window in linear time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KernelFamily {
    /// Difference of gaussians.
    Dog,
    /// Difference of exponentials.
    Doe,
    /// Difference of linear ramps.
    Dol,
    /// Difference of steps, generic convolution path.
    Step,
    /// Difference of steps, linear-time sliding window path.
    OptimStep,
}

impl KernelFamily {
    pub const ALL: [KernelFamily; 5] = [
        KernelFamily::Dog,
        KernelFamily::Doe,
        KernelFamily::Dol,
        KernelFamily::Step,
        KernelFamily::OptimStep,
    ];

    /// Name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Doe => "doe",
            Self::Dol => "dol",
            Self::Step => "step",
            Self::OptimStep => "optim_step",
        }
    }

    /// Whether lateral interaction goes through the sliding window instead
    /// of a convolution with a weight vector.
    #[inline]
    pub fn is_sliding_window(&self) -> bool {
        matches!(self, Self::OptimStep)
    }

    /// Weight at toric distance `d`.
    #[inline]
    pub fn evaluate(&self, d: f64, params: &KernelParams) -> f64 {
        let ae = params.amplitude;
        let ai = params.inhibitory_amplitude();
        let se = params.excitatory_radius();
        let si = params.sigma;

        match self {
            Self::Dog => {
                let d2 = d * d;
                ae * (-d2 / (2.0 * se * se)).exp() - ai * (-d2 / (2.0 * si * si)).exp()
            }
            Self::Doe => {
                let ad = d.abs();
                ae * (-4.0 * ad / (se * se)).exp() - ai * (-4.0 * ad / (si * si)).exp()
            }
            Self::Dol => {
                let ad = d.abs();
                ae * (1.0 - ad / (2.0 * se)).max(0.0) - ai * (1.0 - ad / (2.0 * si)).max(0.0)
            }
            Self::Step | Self::OptimStep => {
                let ad = d.abs();
                ae * indicator(ad <= se) - ai * indicator(ad <= si)
            }
        }
    }

    /// Evaluate over a slice of distances.
    pub fn evaluate_slice(&self, distances: &[f64], params: &KernelParams) -> Vec<f64> {
        distances.iter().map(|&d| self.evaluate(d, params)).collect()
    }
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelFamily {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| FieldError::Configuration { name: s.to_string() })
    }
}

#[inline]
fn indicator(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Toric distance from unit `i` to unit 0 on a ring of `size` units.
#[inline]
pub fn toric_distance(i: usize, size: usize) -> usize {
    i.min(size - i)
}

/// Toric distances `min(i, N - i)` for every unit of the ring.
pub fn toric_distances(size: usize) -> Vec<f64> {
    (0..size).map(|i| toric_distance(i, size) as f64).collect()
}

/// Build the length-`size` weight vector, `w[0]` being the self weight.
///
/// This is the convolution kernel of the generic lateral path.
pub fn weight_vector(family: KernelFamily, size: usize, params: &KernelParams) -> Vec<f64> {
    family.evaluate_slice(&toric_distances(size), params)
}
