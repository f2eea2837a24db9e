//! Property tests for model invariants.

use proptest::prelude::*;

use crate::error::{ErrorKind, ModelError, ValidationError};
use crate::{BreakEvenInputs, EoqInputs, Model, ProductionInputs, QueueInputs};

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    /// EOQ equals the closed form.
    #[test]
    fn prop_eoq_matches_formula(
        d in 1e-3f64..1e7, s in 1e-3f64..1e5, h in 1e-3f64..1e3,
    ) {
        let result = EoqInputs::new(d, s, h).evaluate().unwrap();
        let expected = (2.0 * d * s / h).sqrt();
        prop_assert!(close(result.optimal_quantity, expected, 1e-12));
    }

    /// The sampled minimum of the convex cost curve sits next to Q*.
    ///
    /// Ranges keep Q* >= 2 so the curve spans [Q*/2, 2Q*].
    #[test]
    fn prop_eoq_curve_minimum_near_optimum(
        d in 100f64..1e6, s in 1f64..1e3, h in 0.1f64..50.0,
    ) {
        let result = EoqInputs::new(d, s, h).evaluate().unwrap();
        let spacing = result.cost_curve[1].quantity - result.cost_curve[0].quantity;
        let min = result
            .cost_curve
            .iter()
            .min_by(|a, b| a.value.total_cmp(&b.value))
            .unwrap();

        prop_assert!((min.quantity - result.optimal_quantity).abs() <= spacing * (1.0 + 1e-9));
        prop_assert!(min.value >= result.optimal_total_cost * (1.0 - 1e-12));
    }

    /// Stable queues: ρ ∈ (0, 1), L >= 0, W > 0 and L = ρ·W·μ = λ·W.
    #[test]
    fn prop_queue_identities(mu in 1e-3f64..1e4, frac in 0.001f64..0.999) {
        let lambda = mu * frac;
        let q = QueueInputs::new(lambda, mu).evaluate().unwrap();

        prop_assert!(q.utilization > 0.0 && q.utilization < 1.0);
        prop_assert!(q.expected_queue_length >= 0.0);
        prop_assert!(q.expected_wait_time > 0.0);
        prop_assert!(close(q.expected_queue_length, q.utilization * q.expected_wait_time * mu, 1e-9));
        prop_assert!(close(q.expected_queue_length, lambda * q.expected_wait_time, 1e-12));
    }

    /// λ >= μ is always UnstableQueue.
    #[test]
    fn prop_queue_unstable(mu in 1e-3f64..1e4, factor in 1.0f64..100.0) {
        let err = QueueInputs::new(mu * factor, mu).evaluate().unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::UnstableQueue);
    }

    /// Cost equals revenue at the break-even quantity.
    #[test]
    fn prop_break_even_crossing(
        fc in 0f64..1e7, vc in 0f64..1e4, margin in 1e-2f64..1e4,
    ) {
        let inputs = BreakEvenInputs::new(fc, vc, vc + margin);
        let result = inputs.evaluate().unwrap();
        let q = result.break_even_quantity;

        prop_assert!(close(inputs.total_cost(q), inputs.revenue(q), 1e-9));
    }

    /// P <= VC is always InvalidInput with the price message.
    #[test]
    fn prop_break_even_price_not_above_cost(
        fc in -1e6f64..1e6, vc in 0f64..1e4, below in 0f64..1e4,
    ) {
        let err = BreakEvenInputs::new(fc, vc, vc - below).evaluate().unwrap_err();
        let is_price_error = matches!(
            err,
            ModelError::InvalidInput(ValidationError::PriceNotAboveCost { .. })
        );
        prop_assert!(is_price_error);
    }

    /// Plans are feasible, the reported profit matches the plan, and no
    /// vertex of the feasible region beats it. Profits span from 1e-12 up
    /// to 1e3 and limits from 1e-6 to 1e7.
    #[test]
    fn prop_production_plan_optimal(
        pa in 0f64..1.0, pb in 0f64..1.0, profit_exp in -12i32..4,
        m1 in 1f64..10.0, m2 in 1f64..10.0, limit_exp in -6i32..7,
    ) {
        let profit_scale = 10f64.powi(profit_exp);
        let limit_scale = 10f64.powi(limit_exp);
        let (pa, pb) = (pa * profit_scale, pb * profit_scale);
        let (m1, m2) = (m1 * limit_scale, m2 * limit_scale);

        let inputs = ProductionInputs::new(pa, pb, m1, m2);
        let plan = inputs.evaluate().unwrap();
        let slack = 1e-9 * m1.max(m2);

        prop_assert!(plan.units_a >= 0.0 && plan.units_b >= 0.0);
        prop_assert!(plan.units_a + plan.units_b <= m1 + slack);
        prop_assert!(2.0 * plan.units_a + plan.units_b <= m2 + slack);
        prop_assert!(close(plan.total_profit, pa * plan.units_a + pb * plan.units_b, 1e-12));

        let mut vertices = vec![(0.0, 0.0), (0.0, m1.min(m2)), (m1.min(m2 / 2.0), 0.0)];
        // Both machines binding
        let (xa, xb) = (m2 - m1, 2.0 * m1 - m2);
        if xa >= 0.0 && xb >= 0.0 {
            vertices.push((xa, xb));
        }
        let best = vertices
            .iter()
            .map(|&(a, b)| pa * a + pb * b)
            .fold(0.0, f64::max);

        prop_assert!(
            plan.total_profit >= best * (1.0 - 1e-6),
            "plan profit {} below best vertex {}",
            plan.total_profit,
            best
        );
    }

    /// Identical inputs give identical outputs.
    #[test]
    fn prop_idempotent(a in 0.1f64..1e3, b in 0.1f64..1e3, c in 0.1f64..1e3) {
        let eoq = EoqInputs::new(a, b, c);
        prop_assert_eq!(eoq.evaluate(), eoq.evaluate());

        let queue = QueueInputs::new(a, b);
        prop_assert_eq!(queue.evaluate(), queue.evaluate());

        let break_even = BreakEvenInputs::new(a, b, c);
        prop_assert_eq!(break_even.evaluate(), break_even.evaluate());

        let production = ProductionInputs::new(a, b, c, a + b);
        prop_assert_eq!(production.evaluate(), production.evaluate());
    }
}
