//! # Shared Types
//!
//! Types used by more than one model.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shared Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐    │
//! │  │   CurvePoint    │   │  Model (trait)                           │    │
//! │  │  ─────────────  │   │  ──────────────────────────────────────  │    │
//! │  │  quantity (x)   │   │  ProductionInputs → ProductionResult     │    │
//! │  │  value    (y)   │   │  EoqInputs        → EoqResult            │    │
//! │  └─────────────────┘   │  QueueInputs      → QueueResult          │    │
//! │                        │  BreakEvenInputs  → BreakEvenResult      │    │
//! │                        └──────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Semantics
//! Inputs and results are immutable records created fresh per evaluation.
//! Nothing is cached between calls.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ModelResult;
use crate::DEFAULT_SAMPLE_COUNT;

// =============================================================================
// Model Trait
// =============================================================================

/// Common calling convention for the four models.
///
/// Each input record evaluates to its result record or a
/// [`ModelError`](crate::ModelError). Implementations are pure: calling
/// `evaluate` twice on the same record yields identical output.
pub trait Model {
    /// The result record produced on success.
    type Output;

    /// Short model name used in logs.
    const NAME: &'static str;

    /// Validates the inputs and computes the result.
    fn evaluate(&self) -> ModelResult<Self::Output>;
}

// =============================================================================
// Curve Point
// =============================================================================

/// One sample of a chart curve: a quantity and the curve's value there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurvePoint {
    /// Order or production quantity (x axis).
    pub quantity: f64,
    /// Cost or revenue at that quantity (y axis).
    pub value: f64,
}

impl CurvePoint {
    #[inline]
    pub const fn new(quantity: f64, value: f64) -> Self {
        CurvePoint { quantity, value }
    }
}

/// Serde default for `sample_count` fields.
pub(crate) fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

// =============================================================================
// Unit Tests
// =============================================================================
