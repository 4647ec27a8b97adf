//! Unit tests for the pure drawing helpers.

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use evaluator::impact::{ImpactCategory, GAUGE_MAX};
    use evaluator::IndexCurve;

    use crate::chart::{chart_bounds, normalize};
    use crate::gauge::{band_color, value_angle};

    #[test]
    fn test_band_colors_are_distinct() {
        let colors: Vec<_> = ImpactCategory::ALL.iter().map(|&c| band_color(c)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b, "band colors must be distinguishable");
            }
        }
    }

    #[test]
    fn test_value_angle_endpoints() {
        assert!((value_angle(0.0) - PI).abs() < 1e-6);
        assert!(value_angle(GAUGE_MAX).abs() < 1e-6);
        assert!((value_angle(GAUGE_MAX / 2.0) - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_value_angle_pins_out_of_scale_values() {
        assert!((value_angle(-20.0) - value_angle(0.0)).abs() < 1e-6);
        // An index past the dial end (e.g. 194) stays at the right stop
        assert!((value_angle(194.0) - value_angle(GAUGE_MAX)).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_clamps_and_scales() {
        assert!((normalize(20.0, 20.0, 40.0)).abs() < 1e-6);
        assert!((normalize(30.0, 20.0, 40.0) - 0.5).abs() < 1e-6);
        assert!((normalize(40.0, 20.0, 40.0) - 1.0).abs() < 1e-6);
        assert!((normalize(50.0, 20.0, 40.0) - 1.0).abs() < 1e-6);
        assert!((normalize(0.0, 20.0, 40.0)).abs() < 1e-6);
    }

    #[test]
    fn test_chart_bounds_contain_curve_and_marker() {
        let curve = IndexCurve::sample(70.0); // spans 138..174
        let (lo, hi) = chart_bounds(&curve, 157.8);
        assert!(lo < 138.0);
        assert!(hi > 174.0);

        // A marker outside the curve range widens the bounds
        let (lo, hi) = chart_bounds(&curve, 194.0);
        assert!(lo < 138.0);
        assert!(hi > 194.0);
    }
}
