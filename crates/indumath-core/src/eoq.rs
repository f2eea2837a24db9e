//! # Economic Order Quantity
//!
//! Order size minimizing annual ordering plus holding cost.
//!
//! ## Formulas
//! ```text
//! Q*    = sqrt(2·D·S / H)
//! TC(q) = (D / q)·S + (q / 2)·H
//!
//!   D = annual demand, S = cost per order, H = holding cost per unit-year
//! ```
//!
//! The cost curve is sampled over `[max(1, Q*/2), 2·Q*]`. The floor of one
//! unit keeps `D / q` away from zero division for tiny optima.
//!
//! ## Example
//! ```rust
//! use indumath_core::eoq::{compute, EoqInputs};
//!
//! let result = compute(&EoqInputs::new(1000.0, 50.0, 2.0)).unwrap();
//! assert!((result.optimal_quantity - 223.606_797_749_979).abs() < 1e-9);
//! assert_eq!(result.cost_curve.len(), 100);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{ModelResult, ValidationError};
use crate::sampling::sample_curve;
use crate::types::{default_sample_count, CurvePoint, Model};
use crate::validation::{ensure_finite, validate_positive, validate_sample_count, ValidationResult};
use crate::DEFAULT_SAMPLE_COUNT;

// =============================================================================
// Inputs
// =============================================================================

/// Demand and cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EoqInputs {
    /// Units demanded per year (D).
    pub annual_demand: f64,
    /// Fixed cost of placing one order (S).
    pub order_cost: f64,
    /// Cost of holding one unit for one year (H).
    pub holding_cost: f64,
    /// Points on the total-cost curve.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

impl EoqInputs {
    /// Creates inputs with the default 100-point curve.
    pub const fn new(annual_demand: f64, order_cost: f64, holding_cost: f64) -> Self {
        EoqInputs {
            annual_demand,
            order_cost,
            holding_cost,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    /// Overrides the curve resolution.
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Checks the preconditions.
    ///
    /// ## Rules
    /// - D, S, H all > 0
    /// - sample_count >= 2
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive("annual_demand", self.annual_demand)?;
        validate_positive("order_cost", self.order_cost)?;
        validate_positive("holding_cost", self.holding_cost)?;
        validate_sample_count(self.sample_count)?;
        Ok(())
    }

    /// Annual ordering plus holding cost when ordering `quantity` at a time.
    #[inline]
    pub fn total_cost(&self, quantity: f64) -> f64 {
        (self.annual_demand / quantity) * self.order_cost + (quantity / 2.0) * self.holding_cost
    }
}

// =============================================================================
// Result
// =============================================================================

/// Optimal order size and the cost curve around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EoqResult {
    /// Q* = sqrt(2·D·S / H).
    pub optimal_quantity: f64,
    /// TC(Q*) = H·Q* (equal to sqrt(2·D·S·H)).
    pub optimal_total_cost: f64,
    /// D / Q*.
    pub orders_per_year: f64,
    /// (q, TC(q)) over `[max(1, Q*/2), 2·Q*]`.
    pub cost_curve: Vec<CurvePoint>,
}

// =============================================================================
// Compute
// =============================================================================

/// Computes the EOQ and samples the total-cost curve.
///
/// ## Errors
/// [`ModelError::InvalidInput`](crate::ModelError::InvalidInput) when a
/// parameter is not positive or a result overflows.
pub fn compute(inputs: &EoqInputs) -> ModelResult<EoqResult> {
    debug!(?inputs, "computing EOQ");

    if let Err(e) = inputs.validate() {
        warn!(error = %e, "rejected EOQ inputs");
        return Err(e.into());
    }

    let d = inputs.annual_demand;
    let s = inputs.order_cost;
    let h = inputs.holding_cost;

    let optimal_quantity = ensure_finite("optimal order quantity", ((2.0 * d * s) / h).sqrt())?;
    // H·Q* rather than sqrt(2·D·S·H): the product overflows long before Q* does
    let optimal_total_cost = ensure_finite("optimal total cost", h * optimal_quantity)?;
    let orders_per_year = ensure_finite("orders per year", d / optimal_quantity)?;

    let lower = (optimal_quantity * 0.5).max(1.0);
    let upper = optimal_quantity * 2.0;
    let cost_curve = sample_curve(lower, upper, inputs.sample_count, |q| inputs.total_cost(q));

    if cost_curve.iter().any(|p| !p.value.is_finite() || !p.quantity.is_finite()) {
        return Err(ValidationError::NonFiniteResult {
            quantity: "total cost curve".to_string(),
        }
        .into());
    }

    debug!(optimal_quantity, optimal_total_cost, "EOQ computed");

    Ok(EoqResult {
        optimal_quantity,
        optimal_total_cost,
        orders_per_year,
        cost_curve,
    })
}

impl Model for EoqInputs {
    type Output = EoqResult;
    const NAME: &'static str = "eoq";

    fn evaluate(&self) -> ModelResult<EoqResult> {
        compute(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ModelError};

    #[test]
    fn test_textbook_scenario() {
        let result = compute(&EoqInputs::new(1000.0, 50.0, 2.0)).unwrap();
        assert!((result.optimal_quantity - 50_000.0_f64.sqrt()).abs() < 1e-9);
        assert!((result.optimal_quantity - 223.61).abs() < 0.01);
        assert!((result.optimal_total_cost - 447.213_595_499_958).abs() < 1e-9);
        assert!((result.orders_per_year - 4.472_135_954_999_58).abs() < 1e-9);
    }

    #[test]
    fn test_curve_range() {
        let result = compute(&EoqInputs::new(1000.0, 50.0, 2.0)).unwrap();
        let first = result.cost_curve.first().unwrap();
        let last = result.cost_curve.last().unwrap();
        assert!((first.quantity - result.optimal_quantity * 0.5).abs() < 1e-9);
        assert!((last.quantity - result.optimal_quantity * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_curve_minimum_near_optimum() {
        let inputs = EoqInputs::new(1000.0, 50.0, 2.0);
        let result = compute(&inputs).unwrap();

        let min = result
            .cost_curve
            .iter()
            .min_by(|a, b| a.value.total_cmp(&b.value))
            .unwrap();
        let spacing = result.cost_curve[1].quantity - result.cost_curve[0].quantity;
        assert!((min.quantity - result.optimal_quantity).abs() <= spacing);
        assert!(min.value >= result.optimal_total_cost - 1e-9);
    }

    #[test]
    fn test_small_optimum_uses_floor_of_one() {
        // Q* = sqrt(2·1·1/32) = 0.25, so the curve runs from 1 down to 0.5
        let result = compute(&EoqInputs::new(1.0, 1.0, 32.0).with_sample_count(5)).unwrap();
        assert_eq!(result.cost_curve.len(), 5);
        assert_eq!(result.cost_curve[0].quantity, 1.0);
        assert_eq!(result.cost_curve[4].quantity, 0.5);
        assert!(result.cost_curve.iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn test_custom_sample_count() {
        let result = compute(&EoqInputs::new(1000.0, 50.0, 2.0).with_sample_count(7)).unwrap();
        assert_eq!(result.cost_curve.len(), 7);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        for inputs in [
            EoqInputs::new(0.0, 50.0, 2.0),
            EoqInputs::new(1000.0, -5.0, 2.0),
            EoqInputs::new(1000.0, 50.0, 0.0),
            EoqInputs::new(f64::INFINITY, 50.0, 2.0),
        ] {
            let err = compute(&inputs).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_rejects_single_sample() {
        let err = compute(&EoqInputs::new(1000.0, 50.0, 2.0).with_sample_count(1)).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidInput(ValidationError::TooFewSamples {
                min: 2,
                requested: 1,
            })
        );
    }

    #[test]
    fn test_overflow_is_reported_not_returned() {
        let err = compute(&EoqInputs::new(1e300, 1e300, 1e-300)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidInput(ValidationError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_large_inputs_with_finite_optimum() {
        // 2·D·S·H overflows here while Q* ≈ 1.414e145 does not
        let result = compute(&EoqInputs::new(1e150, 1e150, 1e10)).unwrap();
        let expected_q = 2.0_f64.sqrt() * 1e145;
        assert!((result.optimal_quantity - expected_q).abs() <= expected_q * 1e-12);
        assert!((result.optimal_total_cost - 1e10 * expected_q).abs() <= 1e10 * expected_q * 1e-12);
        assert!(result.orders_per_year.is_finite());
        assert!(result.cost_curve.iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn test_sample_count_defaults_when_omitted() {
        let inputs: EoqInputs = serde_json::from_str(
            r#"{"annual_demand":1000.0,"order_cost":50.0,"holding_cost":2.0}"#,
        )
        .unwrap();
        assert_eq!(inputs.sample_count, 100);
    }
}
