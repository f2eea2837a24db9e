//! # Break-even Analysis
//!
//! Volume at which revenue covers fixed plus variable cost.
//!
//! ## Formulas
//! ```text
//! BEQ   = FC / (P − VC)
//! TC(q) = FC + VC·q
//! R(q)  = P·q
//! ```
//!
//! Curves are sampled over `[0, max(1, 2·BEQ)]` so a zero fixed cost still
//! yields a chart of non-zero width.
//!
//! ## User Workflow
//! ```text
//! FC = 10000, VC = 20, P = 50
//!      │
//!      ▼
//! P > VC ? ── no ──► InvalidInput (PriceNotAboveCost)
//!      │ yes
//!      ▼
//! FC >= 0, VC >= 0 ? ── no ──► InvalidInput
//!      │ yes
//!      ▼
//! BEQ = 10000 / 30 = 333.33
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{ModelResult, ValidationError};
use crate::sampling::sample_curve;
use crate::types::{default_sample_count, CurvePoint, Model};
use crate::validation::{
    ensure_finite, validate_finite, validate_non_negative, validate_sample_count,
    ValidationResult,
};
use crate::DEFAULT_SAMPLE_COUNT;

// =============================================================================
// Inputs
// =============================================================================

/// Cost structure and selling price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreakEvenInputs {
    /// Costs incurred regardless of volume (FC).
    pub fixed_cost: f64,
    /// Cost per unit produced (VC).
    pub variable_cost_per_unit: f64,
    /// Selling price per unit (P).
    pub price_per_unit: f64,
    /// Points on each curve.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

impl BreakEvenInputs {
    /// Creates inputs with the default 100-point curves.
    pub const fn new(fixed_cost: f64, variable_cost_per_unit: f64, price_per_unit: f64) -> Self {
        BreakEvenInputs {
            fixed_cost,
            variable_cost_per_unit,
            price_per_unit,
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
    /// - All values finite
    /// - P > VC, reported ahead of the sign checks below
    /// - FC >= 0, VC >= 0
    /// - sample_count >= 2
    pub fn validate(&self) -> ValidationResult<()> {
        validate_finite("fixed_cost", self.fixed_cost)?;
        validate_finite("variable_cost_per_unit", self.variable_cost_per_unit)?;
        validate_finite("price_per_unit", self.price_per_unit)?;

        if self.price_per_unit <= self.variable_cost_per_unit {
            return Err(ValidationError::PriceNotAboveCost {
                price: self.price_per_unit,
                variable_cost: self.variable_cost_per_unit,
            });
        }

        validate_non_negative("fixed_cost", self.fixed_cost)?;
        validate_non_negative("variable_cost_per_unit", self.variable_cost_per_unit)?;
        validate_sample_count(self.sample_count)?;
        Ok(())
    }

    /// FC + VC·q.
    #[inline]
    pub fn total_cost(&self, quantity: f64) -> f64 {
        self.fixed_cost + self.variable_cost_per_unit * quantity
    }

    /// P·q.
    #[inline]
    pub fn revenue(&self, quantity: f64) -> f64 {
        self.price_per_unit * quantity
    }
}

// =============================================================================
// Result
// =============================================================================

/// Break-even point with cost and revenue curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreakEvenResult {
    /// FC / (P − VC).
    pub break_even_quantity: f64,
    /// P · BEQ.
    pub break_even_revenue: f64,
    /// P − VC, what each unit contributes toward fixed cost.
    pub contribution_margin: f64,
    /// (q, FC + VC·q).
    pub cost_curve: Vec<CurvePoint>,
    /// (q, P·q), sampled at the same quantities as `cost_curve`.
    pub revenue_curve: Vec<CurvePoint>,
}

// =============================================================================
// Compute
// =============================================================================

/// Computes the break-even quantity and samples both curves.
///
/// ## Example
/// ```rust
/// use indumath_core::breakeven::{compute, BreakEvenInputs};
///
/// let result = compute(&BreakEvenInputs::new(10_000.0, 20.0, 50.0)).unwrap();
/// assert!((result.break_even_quantity - 333.333).abs() < 1e-3);
/// ```
///
/// ## Errors
/// [`ModelError::InvalidInput`](crate::ModelError::InvalidInput) when a
/// precondition fails or a result overflows.
pub fn compute(inputs: &BreakEvenInputs) -> ModelResult<BreakEvenResult> {
    debug!(?inputs, "computing break-even point");

    if let Err(e) = inputs.validate() {
        warn!(error = %e, "rejected break-even inputs");
        return Err(e.into());
    }

    let contribution_margin = inputs.price_per_unit - inputs.variable_cost_per_unit;
    let break_even_quantity =
        ensure_finite("break-even quantity", inputs.fixed_cost / contribution_margin)?;
    let break_even_revenue = ensure_finite("break-even revenue", inputs.revenue(break_even_quantity))?;

    let upper = ensure_finite("curve range", (2.0 * break_even_quantity).max(1.0))?;
    let cost_curve = sample_curve(0.0, upper, inputs.sample_count, |q| inputs.total_cost(q));
    let revenue_curve = sample_curve(0.0, upper, inputs.sample_count, |q| inputs.revenue(q));

    if cost_curve
        .iter()
        .chain(&revenue_curve)
        .any(|p| !p.value.is_finite())
    {
        return Err(ValidationError::NonFiniteResult {
            quantity: "cost and revenue curves".to_string(),
        }
        .into());
    }

    debug!(break_even_quantity, contribution_margin, "break-even computed");

    Ok(BreakEvenResult {
        break_even_quantity,
        break_even_revenue,
        contribution_margin,
        cost_curve,
        revenue_curve,
    })
}

impl Model for BreakEvenInputs {
    type Output = BreakEvenResult;
    const NAME: &'static str = "break_even";

    fn evaluate(&self) -> ModelResult<BreakEvenResult> {
        compute(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
