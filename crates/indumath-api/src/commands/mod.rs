//! # Calculator Commands
//!
//! Every operation the presentation layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (shared dispatch + chart types)
//! ├── production.rs  ◄─── optimize_production
//! ├── inventory.rs   ◄─── compute_eoq
//! ├── queue.rs       ◄─── analyze_queue
//! ├── breakeven.rs   ◄─── analyze_break_even
//! └── config.rs      ◄─── get_form_defaults
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI form state (owned by the presentation layer)                        │
//! │    { arrivalRate: 2, serviceRate: 4 }                                   │
//! │         │                                                               │
//! │         │ (JSON → QueueRequest)                                         │
//! │         ▼                                                               │
//! │  analyze_queue(&config, request)                                        │
//! │    → indumath_core::QueueInputs::evaluate()                             │
//! │         │                                                               │
//! │         │ (QueueResponse | ApiError → JSON)                             │
//! │         ▼                                                               │
//! │  UI renders summary text + bars, or a warning banner                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands hold no state: the config is read-only and every request carries
//! the full set of inputs.

pub mod breakeven;
pub mod config;
pub mod inventory;
pub mod production;
pub mod queue;

use serde::{Deserialize, Serialize};
use tracing::debug;

use indumath_core::Model;

use crate::error::ApiResult;

/// A labelled bar for bar-chart results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

impl ChartBar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        ChartBar {
            label: label.into(),
            value,
        }
    }
}

/// Evaluates a model, logging the outcome and lifting errors to `ApiError`.
pub(crate) fn run_model<M: Model>(inputs: &M) -> ApiResult<M::Output> {
    let result = inputs.evaluate();
    debug!(model = M::NAME, ok = result.is_ok(), "model evaluated");
    Ok(result?)
}

/// Formats a value the way result summaries show it.
pub(crate) fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}
