//! # Production Commands
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Production Optimization tab                                            │
//! │                                                                         │
//! │  Profit A [40]  Profit B [30]  Machine 1 [40]  Machine 2 [60]           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  optimize_production ← THIS MODULE                                     │
//! │       │                                                                 │
//! │       ├── INVALID_INPUT       → "machineLimit1 must be positive..."    │
//! │       ├── OPTIMIZATION_FAILED → "Could not solve the optimization..."  │
//! │       └── OK → summary text + bars [Product A, Product B]              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use indumath_core::production::{self, ProductionInputs};

use crate::commands::{two_decimals, ChartBar};
use crate::config::CalculatorConfig;
use crate::error::ApiResult;

/// Production form values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRequest {
    pub profit_a: f64,
    pub profit_b: f64,
    pub machine_limit_1: f64,
    pub machine_limit_2: f64,
}

impl From<ProductionRequest> for ProductionInputs {
    fn from(req: ProductionRequest) -> Self {
        ProductionInputs::new(req.profit_a, req.profit_b, req.machine_limit_1, req.machine_limit_2)
    }
}

/// Optimal plan ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionResponse {
    pub units_a: f64,
    pub units_b: f64,
    pub total_profit: f64,
    pub machine_1_used: f64,
    pub machine_2_used: f64,
    /// Units per product, for the bar chart.
    pub bars: Vec<ChartBar>,
    pub summary: String,
}

/// Solves the two-product production plan.
///
/// The LP takes no tunables, so `config` only keeps the command signatures
/// uniform.
pub fn optimize_production(
    _config: &CalculatorConfig,
    request: ProductionRequest,
) -> ApiResult<ProductionResponse> {
    debug!(?request, "optimize_production command");

    let plan = production::solve(&request.into())?;

    let summary = format!(
        "Optimal production:\n- Product A = {}\n- Product B = {}\n- Total profit = {}",
        two_decimals(plan.units_a),
        two_decimals(plan.units_b),
        two_decimals(plan.total_profit),
    );

    Ok(ProductionResponse {
        units_a: plan.units_a,
        units_b: plan.units_b,
        total_profit: plan.total_profit,
        machine_1_used: plan.machine_1_used,
        machine_2_used: plan.machine_2_used,
        bars: vec![
            ChartBar::new("Product A", plan.units_a),
            ChartBar::new("Product B", plan.units_b),
        ],
        summary,
    })
}
