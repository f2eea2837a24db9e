//! # Queue Commands
//!
//! M/M/1 analysis for the Queueing tab.
//!
//! ```text
//! λ=2, μ=4 ──► analyze_queue ──► "ρ = 0.50, L = 1.00, W = 0.50"
//!                                bars [ρ, L, W]
//! λ=5, μ=4 ──► analyze_queue ──► UNSTABLE_QUEUE (warning banner)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use indumath_core::QueueInputs;

use crate::commands::{run_model, two_decimals, ChartBar};
use crate::config::CalculatorConfig;
use crate::error::ApiResult;

/// Queueing form values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRequest {
    /// λ, customers per unit time
    pub arrival_rate: f64,
    /// μ, customers per unit time
    pub service_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueResponse {
    pub utilization: f64,
    pub expected_queue_length: f64,
    pub expected_wait_time: f64,
    pub idle_probability: f64,
    pub bars: Vec<ChartBar>,
    pub summary: String,
}

/// Computes steady-state metrics for a single-server queue.
///
/// The queue model has no tunables, so `config` is unused beyond keeping the
/// command signatures uniform.
pub fn analyze_queue(_config: &CalculatorConfig, request: QueueRequest) -> ApiResult<QueueResponse> {
    debug!(?request, "analyze_queue command");

    let result = run_model(&QueueInputs::new(request.arrival_rate, request.service_rate))?;

    let summary = format!(
        "ρ = {}, L = {}, W = {}",
        two_decimals(result.utilization),
        two_decimals(result.expected_queue_length),
        two_decimals(result.expected_wait_time),
    );

    Ok(QueueResponse {
        utilization: result.utilization,
        expected_queue_length: result.expected_queue_length,
        expected_wait_time: result.expected_wait_time,
        idle_probability: result.idle_probability,
        bars: vec![
            ChartBar::new("Utilization (ρ)", result.utilization),
            ChartBar::new("Avg Queue Length (L)", result.expected_queue_length),
            ChartBar::new("Avg Waiting Time (W)", result.expected_wait_time),
        ],
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn analyze(lambda: f64, mu: f64) -> ApiResult<QueueResponse> {
        analyze_queue(
            &CalculatorConfig::default(),
            QueueRequest {
                arrival_rate: lambda,
                service_rate: mu,
            },
        )
    }

    #[test]
    fn test_default_scenario() {
        let response = analyze(2.0, 4.0).unwrap();
        assert_eq!(response.summary, "ρ = 0.50, L = 1.00, W = 0.50");
        assert_eq!(response.bars.len(), 3);
        assert_eq!(response.idle_probability, 0.5);
    }

    #[test]
    fn test_unstable_queue() {
        let err = analyze(5.0, 4.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnstableQueue);
        assert_eq!(err.message, "Arrival rate (λ) must be less than service rate (μ)");

        assert_eq!(analyze(4.0, 4.0).unwrap_err().code, ErrorCode::UnstableQueue);
    }

    #[test]
    fn test_non_positive_rate_is_invalid_input() {
        let err = analyze(0.0, 4.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.field.as_deref(), Some("arrivalRate"));
    }

    #[test]
    fn test_response_serialization() {
        let json = serde_json::to_value(analyze(2.0, 4.0).unwrap()).unwrap();
        assert_eq!(json["expectedQueueLength"], 1.0);
        assert_eq!(json["bars"][0]["label"], "Utilization (ρ)");
    }
}
