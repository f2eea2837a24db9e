//! # Break-Even Commands
//!
//! Break-even analysis for the Break-Even tab. The response carries both the
//! total-cost and revenue lines so the UI can draw their crossing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use indumath_core::{BreakEvenInputs, CurvePoint};

use crate::commands::{run_model, two_decimals};
use crate::config::CalculatorConfig;
use crate::error::ApiResult;

/// Break-even form values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenRequest {
    pub fixed_cost: f64,
    pub variable_cost_per_unit: f64,
    pub price_per_unit: f64,
    #[serde(default)]
    pub sample_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenResponse {
    pub break_even_quantity: f64,
    pub break_even_revenue: f64,
    pub contribution_margin: f64,
    pub cost_curve: Vec<CurvePoint>,
    pub revenue_curve: Vec<CurvePoint>,
    pub summary: String,
}

/// Finds the quantity where revenue covers total cost.
pub fn analyze_break_even(
    config: &CalculatorConfig,
    request: BreakEvenRequest,
) -> ApiResult<BreakEvenResponse> {
    debug!(?request, "analyze_break_even command");

    let inputs = BreakEvenInputs::new(
        request.fixed_cost,
        request.variable_cost_per_unit,
        request.price_per_unit,
    )
    .with_sample_count(request.sample_count.unwrap_or(config.models.sample_count));
    let result = run_model(&inputs)?;

    Ok(BreakEvenResponse {
        summary: format!(
            "Break-even quantity: {} units",
            two_decimals(result.break_even_quantity)
        ),
        break_even_quantity: result.break_even_quantity,
        break_even_revenue: result.break_even_revenue,
        contribution_margin: result.contribution_margin,
        cost_curve: result.cost_curve,
        revenue_curve: result.revenue_curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn request(fc: f64, vc: f64, p: f64) -> BreakEvenRequest {
        BreakEvenRequest {
            fixed_cost: fc,
            variable_cost_per_unit: vc,
            price_per_unit: p,
            sample_count: None,
        }
    }

    #[test]
    fn test_default_scenario() {
        let response =
            analyze_break_even(&CalculatorConfig::default(), request(10_000.0, 20.0, 50.0)).unwrap();
        assert_eq!(response.summary, "Break-even quantity: 333.33 units");
        assert_eq!(response.contribution_margin, 30.0);
        assert_eq!(response.cost_curve.len(), 100);
        assert_eq!(response.revenue_curve.len(), 100);
    }

    #[test]
    fn test_price_not_above_cost() {
        let err =
            analyze_break_even(&CalculatorConfig::default(), request(10_000.0, 50.0, 50.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(
            err.message,
            "Selling price must be greater than the variable cost per unit"
        );
    }

    #[test]
    fn test_explicit_sample_count() {
        let req = BreakEvenRequest {
            sample_count: Some(3),
            ..request(0.0, 20.0, 50.0)
        };
        let response = analyze_break_even(&CalculatorConfig::default(), req).unwrap();
        assert_eq!(response.break_even_quantity, 0.0);
        assert_eq!(response.cost_curve.len(), 3);
    }
}
