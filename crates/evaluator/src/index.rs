use serde::{Deserialize, Serialize};

use crate::impact::ImpactCategory;
use crate::reading::Reading;

/// Convert Celsius to Fahrenheit: `f = 1.8 * c + 32`.
pub fn fahrenheit(temperature_c: f64) -> f64 {
    1.8 * temperature_c + 32.0
}

/// The heat-stress index: Fahrenheit temperature plus relative humidity
/// percentage, added directly.
///
/// This is the defined formula of this tool (after Fadilah 2007), NOT a
/// calibrated meteorological heat index; the units are deliberately mixed.
/// Total over finite inputs; NaN propagates, non-finite inputs are
/// unspecified (callers clamp through [`Reading::new`]).
pub fn heat_stress_index(temperature_c: f64, humidity_pct: f64) -> f64 {
    fahrenheit(temperature_c) + humidity_pct
}

/// The outcome of evaluating one reading. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatStressResult {
    /// Input temperature converted to Fahrenheit.
    pub temperature_f: f64,
    /// The heat-stress index value.
    pub index: f64,
    /// The severity band the index falls in.
    pub impact: ImpactCategory,
}

/// Evaluate a reading into its index and impact band.
pub fn evaluate(reading: &Reading) -> HeatStressResult {
    let index = heat_stress_index(reading.temperature_c, reading.humidity_pct);
    HeatStressResult {
        temperature_f: fahrenheit(reading.temperature_c),
        index,
        impact: ImpactCategory::from_index(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fahrenheit_conversion() {
        assert!((fahrenheit(0.0) - 32.0).abs() < EPS);
        assert!((fahrenheit(20.0) - 68.0).abs() < EPS);
        assert!((fahrenheit(31.0) - 87.8).abs() < EPS);
        assert!((fahrenheit(40.0) - 104.0).abs() < EPS);
        assert!((fahrenheit(-10.0) - 14.0).abs() < EPS);
    }

    #[test]
    fn test_index_is_fahrenheit_plus_humidity() {
        for &(c, h) in &[(0.0, 0.0), (20.0, 50.0), (31.0, 70.0), (40.0, 90.0)] {
            let expected = fahrenheit(c) + h;
            assert!(
                (heat_stress_index(c, h) - expected).abs() < EPS,
                "index({c}, {h}) should be {expected}"
            );
        }
    }

    #[test]
    fn test_index_strictly_increases_in_each_argument() {
        let base = heat_stress_index(25.0, 60.0);
        assert!(heat_stress_index(25.1, 60.0) > base);
        assert!(heat_stress_index(25.0, 60.1) > base);
        assert!(heat_stress_index(24.9, 60.0) < base);
        assert!(heat_stress_index(25.0, 59.9) < base);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let reading = Reading::new(31.0, 70.0);
        let first = evaluate(&reading);
        let second = evaluate(&reading);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_default_reading() {
        // c=31, h=70: 87.8 F, index 157.8, intake-shift band
        let result = evaluate(&Reading::new(31.0, 70.0));
        assert!((result.temperature_f - 87.8).abs() < EPS);
        assert!((result.index - 157.8).abs() < EPS);
        assert_eq!(result.impact, ImpactCategory::IntakeShift);
    }

    #[test]
    fn test_scenario_mild_conditions() {
        // c=20, h=50: 68 F, index 118, no impact
        let result = evaluate(&Reading::new(20.0, 50.0));
        assert!((result.temperature_f - 68.0).abs() < EPS);
        assert!((result.index - 118.0).abs() < EPS);
        assert_eq!(result.impact, ImpactCategory::NoImpact);
    }

    #[test]
    fn test_scenario_extreme_conditions() {
        // c=40, h=90: 104 F, index 194, high mortality
        let result = evaluate(&Reading::new(40.0, 90.0));
        assert!((result.temperature_f - 104.0).abs() < EPS);
        assert!((result.index - 194.0).abs() < EPS);
        assert_eq!(result.impact, ImpactCategory::HighMortality);
    }

    #[test]
    fn test_scenario_freezing_dry() {
        // c=0, h=0: 32 F, index 32, no impact
        let result = evaluate(&Reading::new(0.0, 0.0));
        assert!((result.temperature_f - 32.0).abs() < EPS);
        assert!((result.index - 32.0).abs() < EPS);
        assert_eq!(result.impact, ImpactCategory::NoImpact);
    }
}
