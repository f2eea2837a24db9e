//! # Curve Sampling
//!
//! Evenly spaced sample points for chart curves.
//!
//! ```rust
//! use indumath_core::sampling::linspace;
//!
//! let xs = linspace(0.0, 1.0, 5);
//! assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```

use crate::types::CurvePoint;

/// Returns `count` evenly spaced values from `start` to `end` inclusive.
///
/// The first value is exactly `start` and the last exactly `end`. A reversed
/// range (`end < start`) produces a descending sequence. `count == 1` yields
/// `[start]` and `count == 0` an empty vector.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the endpoint; accumulated rounding can miss it by an ulp.
            values[count - 1] = end;
            values
        }
    }
}

/// Samples `f` over `[start, end]` at `count` evenly spaced quantities.
pub fn sample_curve<F>(start: f64, end: f64, count: usize, f: F) -> Vec<CurvePoint>
where
    F: Fn(f64) -> f64,
{
    linspace(start, end, count)
        .into_iter()
        .map(|q| CurvePoint::new(q, f(q)))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(111.8, 447.2, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 111.8);
        assert_eq!(xs[99], 447.2);
    }

    #[test]
    fn test_linspace_even_spacing() {
        let xs = linspace(0.0, 10.0, 11);
        for (i, x) in xs.iter().enumerate() {
            assert!((x - i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_descending() {
        let xs = linspace(1.0, 0.5, 3);
        assert_eq!(xs, vec![1.0, 0.75, 0.5]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_sample_curve() {
        let curve = sample_curve(0.0, 2.0, 3, |q| q * q);
        assert_eq!(
            curve,
            vec![
                CurvePoint::new(0.0, 0.0),
                CurvePoint::new(1.0, 1.0),
                CurvePoint::new(2.0, 4.0),
            ]
        );
    }
}
