//! # indumath-core: Pure Model Evaluation for Indumath
//!
//! This crate is the numeric **heart** of the Indumath calculator. It turns
//! raw user-supplied scalars into derived quantities for four textbook
//! operations-research models, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Indumath Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (out of scope)               │   │
//! │  │      Forms ──► Buttons ──► Charts ──► Warning banners           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ request DTOs                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    indumath-api                                 │   │
//! │  │    optimize_production, compute_eoq, analyze_queue, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ indumath-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌──────────┐ ┌───────────┐ ┌─────────────┐    │   │
//! │  │   │ production │ │   eoq    │ │ queueing  │ │  breakeven  │    │   │
//! │  │   │  (→ lp)    │ │          │ │  M/M/1    │ │             │    │   │
//! │  │   └────────────┘ └──────────┘ └───────────┘ └─────────────┘    │   │
//! │  │          validation • sampling • error • settings               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`production`] - Two-product LP with fixed machine-hour coefficients
//! - [`eoq`] - Economic Order Quantity and total-cost curve
//! - [`queueing`] - M/M/1 steady-state measures
//! - [`breakeven`] - Break-even quantity with cost/revenue curves
//! - [`lp`] - Linear-program definition, solved through `good_lp`
//! - [`validation`] - Precondition checks
//! - [`sampling`] - Evenly spaced curve sampling
//! - [`settings`] - Curve sample counts
//! - [`error`] - Error taxonomy
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same inputs, same outputs; nothing is cached
//! 2. **No I/O**: config files and environment belong to indumath-api
//! 3. **Total**: every input tuple yields a result or one typed error,
//!    never NaN or infinity
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use indumath_core::{ErrorKind, Model, QueueInputs};
//!
//! let result = QueueInputs::new(2.0, 4.0).evaluate().unwrap();
//! assert_eq!(result.utilization, 0.5);
//!
//! let err = QueueInputs::new(5.0, 4.0).evaluate().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnstableQueue);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakeven;
pub mod eoq;
pub mod error;
pub mod lp;
pub mod production;
pub mod queueing;
pub mod sampling;
pub mod settings;
pub mod types;
pub mod validation;

#[cfg(test)]
mod proptests;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use breakeven::{BreakEvenInputs, BreakEvenResult};
pub use eoq::{EoqInputs, EoqResult};
pub use error::{ErrorKind, ModelError, ModelResult, ValidationError};
pub use lp::{LinearProgram, LpError, LpSolution};
pub use production::{ProductionInputs, ProductionResult};
pub use queueing::{QueueInputs, QueueResult};
pub use settings::ModelSettings;
pub use types::{CurvePoint, Model};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Points per sampled curve when the caller doesn't choose.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Fewest points a curve may have: both endpoints of its range.
pub const MIN_SAMPLE_COUNT: usize = 2;
