//! # Production Optimizer
//!
//! Two-product profit maximization under two machine-time limits.
//!
//! ## Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  maximize    profit_a·x + profit_b·y                                    │
//! │  subject to  1·x + 1·y <= machine_limit_1     (machine 1 hours)         │
//! │              2·x + 1·y <= machine_limit_2     (machine 2 hours)         │
//! │              x, y >= 0                                                  │
//! │                                                                         │
//! │  Solved as: minimize -(profit_a·x + profit_b·y) with the LP solver     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The constraint coefficients are fixed; only profits and limits vary.
//!
//! Profits are divided by the largest profit and limits by the largest limit
//! before solving, and the plan is scaled back afterwards. The solver's
//! zero tests are absolute, so profits like 1e-10 would otherwise read as
//! zero and leave the plan at the origin.
//!
//! ## Example
//! ```rust
//! use indumath_core::production::{solve, ProductionInputs};
//!
//! let plan = solve(&ProductionInputs::new(40.0, 30.0, 40.0, 60.0)).unwrap();
//! assert!((plan.units_a - 20.0).abs() < 1e-9);
//! assert!((plan.units_b - 20.0).abs() < 1e-9);
//! assert!((plan.total_profit - 1400.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{ModelError, ModelResult};
use crate::lp::LinearProgram;
use crate::types::Model;
use crate::validation::{ensure_finite, validate_non_negative, validate_positive, ValidationResult};

/// Machine 1 hours per unit of (A, B).
pub const MACHINE_1_HOURS: [f64; 2] = [1.0, 1.0];

/// Machine 2 hours per unit of (A, B).
pub const MACHINE_2_HOURS: [f64; 2] = [2.0, 1.0];

// =============================================================================
// Inputs
// =============================================================================

/// Profits per unit and machine-time limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductionInputs {
    /// Profit per unit of product A.
    pub profit_a: f64,
    /// Profit per unit of product B.
    pub profit_b: f64,
    /// Available hours on machine 1.
    pub machine_limit_1: f64,
    /// Available hours on machine 2.
    pub machine_limit_2: f64,
}

impl ProductionInputs {
    pub const fn new(profit_a: f64, profit_b: f64, machine_limit_1: f64, machine_limit_2: f64) -> Self {
        ProductionInputs {
            profit_a,
            profit_b,
            machine_limit_1,
            machine_limit_2,
        }
    }

    /// Checks the preconditions.
    ///
    /// ## Rules
    /// - Both machine limits > 0
    /// - Both profits >= 0
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive("machine_limit_1", self.machine_limit_1)?;
        validate_positive("machine_limit_2", self.machine_limit_2)?;
        validate_non_negative("profit_a", self.profit_a)?;
        validate_non_negative("profit_b", self.profit_b)?;
        Ok(())
    }

    /// Builds the LP with the profit objective negated for minimization.
    pub fn linear_program(&self) -> LinearProgram {
        LinearProgram::minimize(vec![-self.profit_a, -self.profit_b])
            .subject_to(MACHINE_1_HOURS.to_vec(), self.machine_limit_1)
            .subject_to(MACHINE_2_HOURS.to_vec(), self.machine_limit_2)
    }

    /// The same problem with profits and limits each scaled to a maximum of 1.
    ///
    /// Returns the LP and the factor that maps its solution back to units.
    fn normalized(&self) -> (ProductionInputs, f64) {
        let profit_scale = self.profit_a.max(self.profit_b);
        let profit_scale = if profit_scale > 0.0 { profit_scale } else { 1.0 };
        let limit_scale = self.machine_limit_1.max(self.machine_limit_2);

        let scaled = ProductionInputs::new(
            self.profit_a / profit_scale,
            self.profit_b / profit_scale,
            self.machine_limit_1 / limit_scale,
            self.machine_limit_2 / limit_scale,
        );
        (scaled, limit_scale)
    }
}

// =============================================================================
// Result
// =============================================================================

/// Optimal production plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductionResult {
    /// Units of product A to produce.
    pub units_a: f64,
    /// Units of product B to produce.
    pub units_b: f64,
    /// `profit_a·units_a + profit_b·units_b`.
    pub total_profit: f64,
    /// Machine 1 hours the plan consumes.
    pub machine_1_used: f64,
    /// Machine 2 hours the plan consumes.
    pub machine_2_used: f64,
}

// =============================================================================
// Solve
// =============================================================================

/// Solves the production plan.
///
/// ## Errors
/// - [`ModelError::InvalidInput`] when a precondition fails
/// - [`ModelError::OptimizationFailed`] when the solver finds no optimum
pub fn solve(inputs: &ProductionInputs) -> ModelResult<ProductionResult> {
    debug!(?inputs, "solving production plan");

    if let Err(e) = inputs.validate() {
        warn!(error = %e, "rejected production inputs");
        return Err(e.into());
    }

    let (scaled, unit_scale) = inputs.normalized();
    let solution = scaled.linear_program().solve().map_err(|e| {
        warn!(error = %e, "production LP failed");
        ModelError::OptimizationFailed(e)
    })?;

    let units_a = solution.values[0] * unit_scale;
    let units_b = solution.values[1] * unit_scale;
    let total_profit = ensure_finite(
        "total profit",
        inputs.profit_a * units_a + inputs.profit_b * units_b,
    )?;

    debug!(units_a, units_b, total_profit, "production plan solved");

    Ok(ProductionResult {
        units_a,
        units_b,
        total_profit,
        machine_1_used: MACHINE_1_HOURS[0] * units_a + MACHINE_1_HOURS[1] * units_b,
        machine_2_used: MACHINE_2_HOURS[0] * units_a + MACHINE_2_HOURS[1] * units_b,
    })
}

impl Model for ProductionInputs {
    type Output = ProductionResult;
    const NAME: &'static str = "production";

    fn evaluate(&self) -> ModelResult<ProductionResult> {
        solve(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
