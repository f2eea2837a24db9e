//! # Linear Programming
//!
//! Problem definition for linear programs of the form
//!
//! ```text
//! minimize    c · x
//! subject to  a_i · x <= b_i     for every constraint i
//!             x >= 0
//! ```
//!
//! Solving is delegated to `good_lp` with its pure-Rust `minilp` backend.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      LinearProgram::solve                               │
//! │                                                                         │
//! │  Check shape and finiteness ── bad row → DimensionMismatch             │
//! │           │                    NaN/∞   → NonFiniteCoefficient          │
//! │           ▼                                                             │
//! │  Build good_lp model (one variable per column, min 0)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  default_solver ── Infeasible / Unbounded / Solver(message)            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  LpSolution { values, objective }                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use indumath_core::lp::LinearProgram;
//!
//! // maximize 3x + 2y  ⇔  minimize -3x - 2y
//! let lp = LinearProgram::minimize(vec![-3.0, -2.0])
//!     .subject_to(vec![1.0, 1.0], 4.0)
//!     .subject_to(vec![1.0, 3.0], 6.0);
//!
//! let solution = lp.solve().unwrap();
//! assert!((solution.values[0] - 4.0).abs() < 1e-9);
//! assert!((solution.objective + 12.0).abs() < 1e-9);
//! ```

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use thiserror::Error;
use tracing::trace;

// =============================================================================
// Errors
// =============================================================================

/// Reasons no optimum is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LpError {
    /// No point satisfies every constraint.
    #[error("problem is infeasible")]
    Infeasible,

    /// The objective decreases without bound over the feasible region.
    #[error("objective is unbounded")]
    Unbounded,

    /// Any other failure reported by the solver backend.
    #[error("solver failed: {message}")]
    Solver { message: String },

    /// A constraint row has the wrong number of coefficients.
    #[error("constraint {row} has {found} coefficients, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// NaN or infinity in the objective, a coefficient or a bound.
    #[error("non-finite value in {location}")]
    NonFiniteCoefficient { location: String },
}

impl From<ResolutionError> for LpError {
    fn from(err: ResolutionError) -> Self {
        match err {
            ResolutionError::Infeasible => LpError::Infeasible,
            ResolutionError::Unbounded => LpError::Unbounded,
            other => LpError::Solver {
                message: other.to_string(),
            },
        }
    }
}

// =============================================================================
// Problem Definition
// =============================================================================

/// A single `coefficients · x <= bound` row.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub bound: f64,
}

/// A minimization problem over non-negative variables.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    /// Cost per unit of each variable.
    pub objective: Vec<f64>,
    /// Upper-bound constraints.
    pub constraints: Vec<Constraint>,
}

/// An optimal vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    /// Optimal value of each variable, in objective order.
    pub values: Vec<f64>,
    /// `objective · values` at the optimum.
    pub objective: f64,
}

impl LinearProgram {
    /// Starts a problem minimizing `objective · x` with no constraints yet.
    pub fn minimize(objective: Vec<f64>) -> Self {
        LinearProgram {
            objective,
            constraints: Vec::new(),
        }
    }

    /// Adds the constraint `coefficients · x <= bound`.
    pub fn subject_to(mut self, coefficients: Vec<f64>, bound: f64) -> Self {
        self.constraints.push(Constraint {
            coefficients,
            bound,
        });
        self
    }

    /// Number of decision variables.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    /// Solves the problem.
    ///
    /// ## Errors
    /// - [`LpError::DimensionMismatch`] / [`LpError::NonFiniteCoefficient`]
    ///   for malformed problems (checked before the backend runs)
    /// - [`LpError::Infeasible`] / [`LpError::Unbounded`] from the backend
    pub fn solve(&self) -> Result<LpSolution, LpError> {
        self.check()?;

        let mut vars = ProblemVariables::new();
        let columns: Vec<Variable> = self
            .objective
            .iter()
            .map(|_| vars.add(variable().min(0.0)))
            .collect();

        let mut model = vars
            .minimise(weighted_sum(&self.objective, &columns))
            .using(default_solver);
        for row in &self.constraints {
            let lhs = weighted_sum(&row.coefficients, &columns);
            model = model.with(constraint!(lhs <= row.bound));
        }

        let solution = model.solve()?;

        // The backend may report -0.0 or -1e-16 at a bound of zero
        let values: Vec<f64> = columns.iter().map(|&v| solution.value(v).max(0.0)).collect();
        let objective = dot(&self.objective, &values);

        trace!(?values, objective, "linear program solved");

        Ok(LpSolution { values, objective })
    }

    fn check(&self) -> Result<(), LpError> {
        let n = self.num_variables();

        if self.objective.iter().any(|c| !c.is_finite()) {
            return Err(LpError::NonFiniteCoefficient {
                location: "objective".to_string(),
            });
        }

        for (row, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() != n {
                return Err(LpError::DimensionMismatch {
                    row,
                    expected: n,
                    found: constraint.coefficients.len(),
                });
            }
            if !constraint.bound.is_finite()
                || constraint.coefficients.iter().any(|a| !a.is_finite())
            {
                return Err(LpError::NonFiniteCoefficient {
                    location: format!("constraint {}", row),
                });
            }
        }

        Ok(())
    }
}

fn weighted_sum(weights: &[f64], columns: &[Variable]) -> Expression {
    weights.iter().zip(columns).map(|(&w, &v)| w * v).sum()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
