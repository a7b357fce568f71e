//! Neural Field - potential and activation on a ring, Euler-stepped

use crate::config::{FieldConfig, FieldParams};
use crate::error::{FieldError, Result};
use crate::kernel::KernelFamily;
use crate::lateral::LateralInteraction;
use crate::transfer::TransferFunction;
use tracing::{debug, trace};

/// A one-dimensional dynamic neural field with toric topology.
///
/// Each call to [`step`](Self::step) applies one synchronous Euler update:
///
/// ```text
/// u ← u + dt_tau * (-u + [w ⊛ f(u)] + I + h)
/// f(u) ← transfer(u)
/// ```
///
/// Every unit reads the same pre-update snapshot. The field exclusively
/// owns its buffers; [`get_output`](Self::get_output) hands out copies.
#[derive(Clone, Debug)]
pub struct NeuralField {
    /// Configuration.
    config: FieldConfig,

    /// Current parameters, `None` until set.
    params: Option<FieldParams>,

    /// Membrane potential `u`.
    potential: Vec<f64>,

    /// Activation `f(u)`, always `transfer(potential)`.
    activation: Vec<f64>,

    /// Convolution or sliding window, chosen from the kernel family.
    lateral: LateralInteraction,

    /// Steps since construction or last reset.
    step_count: u64,
}

impl NeuralField {
    /// Create a field of `size` units at rest.
    pub fn new(size: usize, kernel: KernelFamily, transfer: TransferFunction) -> Result<Self> {
        Self::from_config(FieldConfig::new(size, kernel, transfer))
    }

    /// Create a field from a kernel family name.
    ///
    /// Fails with [`FieldError::Configuration`] for names other than `dog`,
    /// `doe`, `dol`, `step` and `optim_step`.
    pub fn with_kernel_name(size: usize, kernel: &str, transfer: TransferFunction) -> Result<Self> {
        Self::from_config(FieldConfig::with_kernel_name(size, kernel, transfer)?)
    }

    /// Create a field from a configuration.
    pub fn from_config(config: FieldConfig) -> Result<Self> {
        config.validate()?;

        let potential = vec![0.0; config.size];
        let activation = config.transfer.apply_slice(&potential);
        let lateral = LateralInteraction::new(config.kernel, config.size);

        debug!(
            size = config.size,
            kernel = %config.kernel,
            transfer = ?config.transfer,
            "neural field created"
        );

        Ok(Self {
            config,
            params: None,
            potential,
            activation,
            lateral,
            step_count: 0,
        })
    }

    // =========================================================================
    // PARAMETERS
    // =========================================================================

    /// Set parameters from `[dt_tau, h, Ae, ke, ki, si]`.
    ///
    /// Rebuilds the weight vector for convolution families. On error the
    /// previous parameters stay in place.
    pub fn set_params(&mut self, values: &[f64]) -> Result<()> {
        let params = FieldParams::from_slice(values)?;
        self.set_field_params(params);
        Ok(())
    }

    /// Set parameters from their typed form.
    pub fn set_field_params(&mut self, params: FieldParams) {
        self.lateral.rebuild(&params.kernel);
        self.params = Some(params);

        debug!(
            kernel = %self.config.kernel,
            dt_tau = params.dt_tau,
            h = params.h,
            amplitude = params.kernel.amplitude,
            excitatory_ratio = params.kernel.excitatory_ratio,
            inhibitory_ratio = params.kernel.inhibitory_ratio,
            sigma = params.kernel.sigma,
            weights_rebuilt = self.lateral.weights().is_some(),
            "field parameters updated"
        );
    }

    /// Current parameters, if set.
    pub fn params(&self) -> Option<FieldParams> {
        self.params
    }

    // =========================================================================
    // TIME ADVANCEMENT
    // =========================================================================

    /// Advance one Euler step with external input `input`.
    ///
    /// Fails with [`FieldError::InputSizeMismatch`] if `input` does not
    /// have one value per unit; the field is left untouched.
    pub fn step(&mut self, input: &[f64]) -> Result<()> {
        if input.len() != self.config.size {
            return Err(FieldError::InputSizeMismatch {
                expected: self.config.size,
                actual: input.len(),
            });
        }

        let params = self.params.unwrap_or_default();
        let lateral = self.lateral.compute(&self.activation, &params.kernel)?;

        for ((u, &lat), &i) in self.potential.iter_mut().zip(&lateral).zip(input) {
            *u += params.dt_tau * (-*u + lat + i + params.h);
        }
        self.config
            .transfer
            .apply_into(&self.potential, &mut self.activation);

        self.step_count += 1;
        trace!(step = self.step_count, "neural field stepped");
        Ok(())
    }

    /// Advance `n` steps with the same input.
    pub fn step_n(&mut self, input: &[f64], n: usize) -> Result<()> {
        for _ in 0..n {
            self.step(input)?;
        }
        Ok(())
    }

    /// Return to rest: zero potential, activation recomputed from it.
    /// Parameters are kept.
    pub fn reset(&mut self) {
        self.potential.fill(0.0);
        self.config
            .transfer
            .apply_into(&self.potential, &mut self.activation);
        self.step_count = 0;
    }

    // =========================================================================
    // READING
    // =========================================================================

    /// Copy of the current activation.
    pub fn get_output(&self) -> Vec<f64> {
        self.activation.clone()
    }

    /// Current activation `f(u)`.
    pub fn activation(&self) -> &[f64] {
        &self.activation
    }

    /// Current membrane potential `u`.
    pub fn potential(&self) -> &[f64] {
        &self.potential
    }

    /// Lateral contribution the next step would use.
    pub fn lateral_contributions(&self) -> Result<Vec<f64>> {
        let params = self.params.unwrap_or_default();
        self.lateral.compute(&self.activation, &params.kernel)
    }

    /// Materialized weight vector, `None` for `optim_step`.
    pub fn weights(&self) -> Option<&[f64]> {
        self.lateral.weights()
    }

    /// Get configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn kernel_family(&self) -> KernelFamily {
        self.config.kernel
    }

    pub fn transfer(&self) -> TransferFunction {
        self.config.transfer
    }

    /// Steps since construction or last reset.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}
