//! # Validation Module
//!
//! Precondition checks shared by every model.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation layer                                           │
//! │  ├── Number widgets, default values                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: indumath-api (Rust)                                          │
//! │  └── Type validation (deserialization)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Finite values only                                                │
//! │  ├── Positive / non-negative preconditions                             │
//! │  └── Derived quantities stay finite                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use indumath_core::validation::{validate_positive, validate_non_negative};
//!
//! assert!(validate_positive("holding_cost", 2.0).is_ok());
//! assert!(validate_positive("holding_cost", 0.0).is_err());
//! assert!(validate_non_negative("fixed_cost", 0.0).is_ok());
//! ```

use crate::error::ValidationError;
use crate::MIN_SAMPLE_COUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Scalar Validators
// =============================================================================

/// Rejects NaN and infinities.
pub fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a value that must be strictly positive.
///
/// ## Rules
/// - Must be finite
/// - Must be > 0
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

/// Validates a value that may be zero but not negative.
///
/// ## Rules
/// - Must be finite
/// - Must be >= 0 (zero profit, zero fixed cost are allowed)
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

// =============================================================================
// Curve Validators
// =============================================================================

/// Validates the number of points requested for a sampled curve.
///
/// ## Rules
/// - Must be at least MIN_SAMPLE_COUNT (2): a curve needs both endpoints
pub fn validate_sample_count(requested: usize) -> ValidationResult<()> {
    if requested < MIN_SAMPLE_COUNT {
        return Err(ValidationError::TooFewSamples {
            min: MIN_SAMPLE_COUNT,
            requested,
        });
    }

    Ok(())
}

// =============================================================================
// Output Guards
// =============================================================================

/// Ensures a derived quantity did not overflow.
///
/// Finite inputs can still produce an infinite result (e.g. `2·D·S` beyond
/// `f64::MAX`). Returns the value unchanged when it is finite.
pub fn ensure_finite(quantity: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteResult {
            quantity: quantity.to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
