//! Field configuration and runtime parameters

use crate::error::{FieldError, Result};
use crate::kernel::{KernelFamily, KernelParams};
use crate::transfer::TransferFunction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction-time configuration of a neural field.
///
/// Fixed for the lifetime of the field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Number of units on the ring.
    pub size: usize,

    /// Kernel family, which also selects the lateral interaction path.
    pub kernel: KernelFamily,

    /// Potential to activation mapping.
    pub transfer: TransferFunction,
}

impl FieldConfig {
    pub fn new(size: usize, kernel: KernelFamily, transfer: TransferFunction) -> Self {
        Self {
            size,
            kernel,
            transfer,
        }
    }

    /// Build from a kernel family name (`dog`, `doe`, `dol`, `step`,
    /// `optim_step`).
    pub fn with_kernel_name(size: usize, kernel: &str, transfer: TransferFunction) -> Result<Self> {
        Ok(Self::new(size, kernel.parse()?, transfer))
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(FieldError::InvalidSize);
        }
        Ok(())
    }
}

/// Parameters of the field equation, changeable between steps.
///
/// ```text
/// u(t+1) = u(t) + dt_tau * (-u(t) + [w ⊛ f(u)](t) + I(t) + h)
/// ```
///
/// All zero until set. With `dt_tau = 0` a step leaves the potential
/// unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldParams {
    /// Euler gain `dt / tau`.
    pub dt_tau: f64,

    /// Constant bias `h`.
    pub h: f64,

    /// Weight kernel shape.
    pub kernel: KernelParams,
}

impl FieldParams {
    /// Number of values in the flat form `[dt_tau, h, Ae, ke, ki, si]`.
    pub const LEN: usize = 6;

    pub fn new(dt_tau: f64, h: f64, kernel: KernelParams) -> Self {
        Self { dt_tau, h, kernel }
    }

    /// Parse the flat form `[dt_tau, h, Ae, ke, ki, si]`.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [dt_tau, h, ae, ke, ki, si] => {
                Ok(Self::new(dt_tau, h, KernelParams::new(ae, ke, ki, si)))
            }
            _ => Err(FieldError::InvalidParameterCount {
                expected: Self::LEN,
                actual: values.len(),
            }),
        }
    }

    /// Flat form `[dt_tau, h, Ae, ke, ki, si]`.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.dt_tau,
            self.h,
            self.kernel.amplitude,
            self.kernel.excitatory_ratio,
            self.kernel.inhibitory_ratio,
            self.kernel.sigma,
        ]
    }
}
