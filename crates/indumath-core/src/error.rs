//! # Error Types
//!
//! Domain-specific error types for indumath-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  indumath-core errors (this file)                                      │
//! │  ├── ModelError       - What a model evaluation returns                │
//! │  │   ├── InvalidInput        (wraps ValidationError)                   │
//! │  │   ├── OptimizationFailed  (wraps LpError)                           │
//! │  │   └── UnstableQueue       (λ ≥ μ)                                   │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  indumath-api errors (separate crate)                                  │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → ModelError → ApiError → Frontend              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field and value in error messages
//! 3. Errors are enum variants, never String
//! 4. Each [`ErrorKind`] maps to a distinct user-facing message

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lp::LpError;

// =============================================================================
// Error Kind
// =============================================================================

/// The three error categories the presentation layer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A parameter violates a precondition.
    InvalidInput,
    /// The linear-program solver found no optimal solution.
    OptimizationFailed,
    /// Arrival rate is not below service rate.
    UnstableQueue,
}

// =============================================================================
// Model Error
// =============================================================================

/// Errors returned by model evaluations.
///
/// Every model is total over its input domain: any tuple of reals yields
/// either a result record or exactly one of these variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// One or more inputs violate a precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The solver reported infeasibility, unboundedness or a backend failure.
    ///
    /// ## When This Occurs
    /// Never for validated production inputs in practice (the origin is
    /// always feasible and the feasible region is bounded), but the solver
    /// contract allows it and the presentation layer words it differently
    /// from bad input.
    #[error("Optimization failed: {0}")]
    OptimizationFailed(#[from] LpError),

    /// The queue has no steady state.
    ///
    /// ## User Workflow
    /// ```text
    /// λ = 5, μ = 4
    ///      │
    ///      ▼
    /// Both positive ✓   λ < μ ✗
    ///      │
    ///      ▼
    /// UnstableQueue { arrival_rate: 5.0, service_rate: 4.0 }
    ///      │
    ///      ▼
    /// UI shows: "λ must be less than μ"
    /// ```
    #[error("Unstable queue: arrival rate {arrival_rate} must be below service rate {service_rate}")]
    UnstableQueue { arrival_rate: f64, service_rate: f64 },
}

impl ModelError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::InvalidInput(_) => ErrorKind::InvalidInput,
            ModelError::OptimizationFailed(_) => ErrorKind::OptimizationFailed,
            ModelError::UnstableQueue { .. } => ErrorKind::UnstableQueue,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a scalar parameter doesn't meet its precondition.
/// Raised before any formula runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: f64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative, got {value}")]
    MustBeNonNegative { field: String, value: f64 },

    /// Selling price does not cover the variable cost per unit.
    #[error("price per unit ({price}) must exceed variable cost per unit ({variable_cost})")]
    PriceNotAboveCost { price: f64, variable_cost: f64 },

    /// Curve sample count is too small to describe a range.
    #[error("sample count must be at least {min}, got {requested}")]
    TooFewSamples { min: usize, requested: usize },

    /// A derived quantity overflowed floating-point range.
    #[error("{quantity} is not representable for these inputs")]
    NonFiniteResult { quantity: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ModelError.
pub type ModelResult<T> = Result<T, ModelError>;

// =============================================================================
// Unit Tests
// =============================================================================
