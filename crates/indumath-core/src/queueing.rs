//! # M/M/1 Queue
//!
//! Steady-state measures for a single-server queue with Poisson arrivals and
//! exponential service.
//!
//! ## Formulas
//! ```text
//! ρ = λ / μ              server utilization
//! L = ρ / (1 − ρ)        expected number of customers
//! W = 1 / (μ − λ)        expected time a customer spends waiting
//!
//! Stable only when 0 < λ < μ. Little's law holds: L = λ·W.
//! ```
//!
//! ## Example
//! ```rust
//! use indumath_core::queueing::{compute, QueueInputs};
//!
//! let q = compute(&QueueInputs::new(2.0, 4.0)).unwrap();
//! assert_eq!((q.utilization, q.expected_queue_length, q.expected_wait_time), (0.5, 1.0, 0.5));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{ModelError, ModelResult};
use crate::types::Model;
use crate::validation::{ensure_finite, validate_positive, ValidationResult};

/// Arrival and service rates, in the same time unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QueueInputs {
    /// λ, customers arriving per unit time.
    pub arrival_rate: f64,
    /// μ, customers served per unit time.
    pub service_rate: f64,
}

impl QueueInputs {
    pub const fn new(arrival_rate: f64, service_rate: f64) -> Self {
        QueueInputs {
            arrival_rate,
            service_rate,
        }
    }

    /// Checks each rate on its own. Stability is checked by [`compute`].
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive("arrival_rate", self.arrival_rate)?;
        validate_positive("service_rate", self.service_rate)?;
        Ok(())
    }

    /// True when λ < μ.
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.arrival_rate < self.service_rate
    }
}

/// Steady-state queue characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QueueResult {
    /// ρ = λ / μ, in (0, 1).
    pub utilization: f64,
    /// L = ρ / (1 − ρ).
    pub expected_queue_length: f64,
    /// W = 1 / (μ − λ).
    pub expected_wait_time: f64,
    /// 1 − ρ, the long-run fraction of time the server is idle.
    pub idle_probability: f64,
}

/// Computes the M/M/1 measures.
///
/// ## Errors
/// - [`ModelError::InvalidInput`] when a rate is not positive
/// - [`ModelError::UnstableQueue`] when λ ≥ μ
pub fn compute(inputs: &QueueInputs) -> ModelResult<QueueResult> {
    debug!(?inputs, "analyzing M/M/1 queue");

    if let Err(e) = inputs.validate() {
        warn!(error = %e, "rejected queue inputs");
        return Err(e.into());
    }

    if !inputs.is_stable() {
        warn!(
            arrival_rate = inputs.arrival_rate,
            service_rate = inputs.service_rate,
            "queue is unstable"
        );
        return Err(ModelError::UnstableQueue {
            arrival_rate: inputs.arrival_rate,
            service_rate: inputs.service_rate,
        });
    }

    let lambda = inputs.arrival_rate;
    let mu = inputs.service_rate;

    let utilization = lambda / mu;
    let expected_wait_time = ensure_finite("expected wait time", 1.0 / (mu - lambda))?;
    // ρ/(1−ρ) rewritten as λ/(μ−λ); 1−ρ rounds to zero when λ is within an ulp of μ
    let expected_queue_length = ensure_finite("expected queue length", lambda / (mu - lambda))?;

    Ok(QueueResult {
        utilization,
        expected_queue_length,
        expected_wait_time,
        idle_probability: 1.0 - utilization,
    })
}

impl Model for QueueInputs {
    type Output = QueueResult;
    const NAME: &'static str = "mm1_queue";

    fn evaluate(&self) -> ModelResult<QueueResult> {
        compute(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
