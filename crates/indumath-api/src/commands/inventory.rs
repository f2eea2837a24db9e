//! # Inventory Commands
//!
//! EOQ sizing for the Inventory (EOQ) tab. The response carries the total-cost
//! curve so the UI can draw it with the optimum marked.

use serde::{Deserialize, Serialize};
use tracing::debug;

use indumath_core::{CurvePoint, EoqInputs};

use crate::commands::{run_model, two_decimals};
use crate::config::CalculatorConfig;
use crate::error::ApiResult;

/// EOQ form values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoqRequest {
    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost: f64,
    /// Curve resolution; the configured default when omitted.
    #[serde(default)]
    pub sample_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoqResponse {
    pub optimal_quantity: f64,
    pub optimal_total_cost: f64,
    pub orders_per_year: f64,
    pub cost_curve: Vec<CurvePoint>,
    pub summary: String,
}

/// Computes the economic order quantity and its cost curve.
pub fn compute_eoq(config: &CalculatorConfig, request: EoqRequest) -> ApiResult<EoqResponse> {
    debug!(?request, "compute_eoq command");

    let inputs = EoqInputs::new(request.annual_demand, request.order_cost, request.holding_cost)
        .with_sample_count(request.sample_count.unwrap_or(config.models.sample_count));
    let result = run_model(&inputs)?;

    Ok(EoqResponse {
        summary: format!("EOQ: {} units", two_decimals(result.optimal_quantity)),
        optimal_quantity: result.optimal_quantity,
        optimal_total_cost: result.optimal_total_cost,
        orders_per_year: result.orders_per_year,
        cost_curve: result.cost_curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn request(d: f64, s: f64, h: f64) -> EoqRequest {
        EoqRequest {
            annual_demand: d,
            order_cost: s,
            holding_cost: h,
            sample_count: None,
        }
    }

    #[test]
    fn test_default_scenario() {
        let response = compute_eoq(&CalculatorConfig::default(), request(1000.0, 50.0, 2.0)).unwrap();
        assert_eq!(response.summary, "EOQ: 223.61 units");
        assert_eq!(response.cost_curve.len(), 100);
    }

    #[test]
    fn test_sample_count_falls_back_to_config() {
        let mut config = CalculatorConfig::default();
        config.models.sample_count = 12;

        let response = compute_eoq(&config, request(1000.0, 50.0, 2.0)).unwrap();
        assert_eq!(response.cost_curve.len(), 12);

        let explicit = EoqRequest {
            sample_count: Some(5),
            ..request(1000.0, 50.0, 2.0)
        };
        let response = compute_eoq(&config, explicit).unwrap();
        assert_eq!(response.cost_curve.len(), 5);
    }

    #[test]
    fn test_zero_holding_cost_is_rejected() {
        let err = compute_eoq(&CalculatorConfig::default(), request(1000.0, 50.0, 0.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.field.as_deref(), Some("holdingCost"));
    }

    #[test]
    fn test_request_without_sample_count() {
        let req: EoqRequest =
            serde_json::from_str(r#"{"annualDemand":1000,"orderCost":50,"holdingCost":2}"#).unwrap();
        assert_eq!(req.sample_count, None);
    }
}
