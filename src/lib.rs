//! Neural Field - one-dimensional dynamic neural field on a ring
//!
//! A continuous-time activity field sampled at N units with toric
//! topology, integrated with synchronous forward Euler steps:
//!
//! ```text
//! u(x, t+1) = u(x, t) + dt_tau * (-u(x, t) + [w ⊛ f(u)](x, t) + I(x, t) + h)
//! ```
//!
//! where `⊛` is circular convolution and `f` a transfer function.
//!
//! # Core Types
//!
//! - **NeuralField**: Owns potential and activation, applies one Euler step per call
//! - **KernelFamily**: DOG, DOE, DOL, STEP and OPTIM_STEP lateral weight shapes
//! - **TransferFunction**: Heaviside, sigmoid or rectified activation
//! - **LateralInteraction**: Convolution path or linear-time sliding window
//!
//! # Two Lateral Paths
//!
//! Every family can be computed by convolving the activation with a
//! materialized weight vector (FFT, O(N log N)). The step kernel has a
//! second path: its windows change by exactly one unit per shift, so a
//! running sum slid around the ring gives the same result in O(N).
//! `step` uses the first path, `optim_step` the second.
//!
//! # Example
//!
//! ```rust
//! use neural_field::{KernelFamily, NeuralField, TransferFunction};
//!
//! let n = 100;
//! let mut field = NeuralField::new(n, KernelFamily::OptimStep, TransferFunction::Heaviside)?;
//!
//! // [dt_tau, h, Ae, ke, ki, si]
//! field.set_params(&[0.25, -0.5, 0.15, 0.08, 0.75, 100.0])?;
//!
//! let input: Vec<f64> = (0..n)
//!     .map(|i| (-((i as f64 - 50.0).powi(2)) / 50.0).exp())
//!     .collect();
//! field.step_n(&input, 100)?;
//!
//! let output = field.get_output();
//! assert_eq!(output.len(), n);
//! # Ok::<(), neural_field::FieldError>(())
//! ```
//!
//! # Parameters Are Not Validated
//!
//! Kernel parameters outside their nominal ranges (`Ae >= 0`, `ke` and
//! `ki` in [0, 1], `si > 0`) are accepted as-is and produce numerically
//! degenerate fields, never panics. Only structural mistakes are errors:
//! unknown kernel names, wrong parameter counts and mismatched input
//! lengths.

mod config;
mod convolution;
mod error;
mod field;
mod kernel;
mod lateral;
mod transfer;

pub use config::{FieldConfig, FieldParams};
pub use convolution::{cconv, cconv_direct, CircularConvolver};
pub use error::{FieldError, Result};
pub use field::NeuralField;
pub use kernel::{toric_distance, toric_distances, weight_vector, KernelFamily, KernelParams};
pub use lateral::{sliding_step, LateralInteraction};
pub use transfer::TransferFunction;
