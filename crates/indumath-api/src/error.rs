//! # API Error Type
//!
//! Unified error type for calculator commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Indumath                               │
//! │                                                                         │
//! │  Presentation layer          Rust backend                               │
//! │  ──────────────────          ────────────                               │
//! │                                                                         │
//! │  analyze_queue(λ=5, μ=4)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  ValidationError? ── ModelError::InvalidInput ──────┐           │  │
//! │  │  Solver failed?   ── ModelError::OptimizationFailed ─┤           │  │
//! │  │  λ >= μ?          ── ModelError::UnstableQueue ──────┴─ ApiError►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "UNSTABLE_QUEUE",                                            │
//! │    "message": "Arrival rate (λ) must be less than service rate (μ)" }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! We implement `Serialize` and include both a machine-readable `code` and
//! a human-readable `message`, so the UI can pick a warning or error banner
//! by code and show the message as-is.

use serde::Serialize;
use tracing::error;

use indumath_core::{ModelError, ValidationError};

use crate::config::ConfigError;

/// API error returned from calculator commands.
///
/// ```json
/// {
///   "code": "INVALID_INPUT",
///   "message": "holdingCost must be positive, got 0",
///   "field": "holdingCost"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Input field to highlight, when one is to blame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A parameter violates a precondition (shown as a warning)
    InvalidInput,

    /// The LP solver found no optimal plan
    OptimizationFailed,

    /// λ >= μ, the queue grows without bound
    UnstableQueue,

    /// Configuration could not be loaded
    ConfigError,
}

/// Convenience alias for command results.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Attaches the offending input field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::PriceNotAboveCost { .. } => ApiError::invalid_input(
                "Selling price must be greater than the variable cost per unit",
            )
            .with_field("pricePerUnit"),
            // Messages name the field the way the request DTOs spell it
            ValidationError::NotFinite { field } => {
                let field = camel_case(&field);
                ApiError::invalid_input(format!("{} must be a finite number", field))
                    .with_field(field)
            }
            ValidationError::MustBePositive { field, value } => {
                let field = camel_case(&field);
                ApiError::invalid_input(format!("{} must be positive, got {}", field, value))
                    .with_field(field)
            }
            ValidationError::MustBeNonNegative { field, value } => {
                let field = camel_case(&field);
                ApiError::invalid_input(format!("{} must not be negative, got {}", field, value))
                    .with_field(field)
            }
            ValidationError::TooFewSamples { .. } => {
                ApiError::invalid_input(err.to_string()).with_field("sampleCount")
            }
            ValidationError::NonFiniteResult { .. } => ApiError::invalid_input(format!(
                "Inputs are too extreme to evaluate: {}",
                err
            )),
        }
    }
}

/// Converts model errors to API errors.
impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidInput(e) => ApiError::from(e),
            ModelError::OptimizationFailed(e) => {
                // Log the solver detail but return a generic message
                error!("Production optimization failed: {}", e);
                ApiError::new(
                    ErrorCode::OptimizationFailed,
                    "Could not solve the optimization. Check your inputs.",
                )
            }
            ModelError::UnstableQueue { .. } => ApiError::new(
                ErrorCode::UnstableQueue,
                "Arrival rate (λ) must be less than service rate (μ)",
            ),
        }
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// `machine_limit_1` → `machineLimit1`, matching request DTO field names.
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
