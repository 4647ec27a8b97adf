use serde::{Deserialize, Serialize};

/// Lowest temperature the input form accepts, in Celsius.
pub const TEMP_MIN_C: f64 = 0.0;
/// Highest temperature the input form accepts, in Celsius.
pub const TEMP_MAX_C: f64 = 50.0;
/// Relative humidity bounds, in percent.
pub const HUMIDITY_MIN_PCT: f64 = 0.0;
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

/// Default values shown in the input form.
pub const DEFAULT_TEMP_C: f64 = 31.0;
pub const DEFAULT_HUMIDITY_PCT: f64 = 70.0;

/// A single ambient temperature/humidity pair to be evaluated.
///
/// Readings are plain values constructed fresh per evaluation; nothing is
/// persisted between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Ambient temperature in Celsius, clamped to [`TEMP_MIN_C`]..=[`TEMP_MAX_C`].
    pub temperature_c: f64,
    /// Relative humidity in percent, clamped to 0..=100.
    pub humidity_pct: f64,
}

impl Reading {
    /// Build a reading, clamping both fields into their sensible ranges.
    pub fn new(temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            temperature_c: temperature_c.clamp(TEMP_MIN_C, TEMP_MAX_C),
            humidity_pct: humidity_pct.clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT),
        }
    }
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            temperature_c: DEFAULT_TEMP_C,
            humidity_pct: DEFAULT_HUMIDITY_PCT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reading_matches_form_defaults() {
        let reading = Reading::default();
        assert!((reading.temperature_c - 31.0).abs() < 1e-9);
        assert!((reading.humidity_pct - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_passes_in_range_values_through() {
        let reading = Reading::new(25.5, 60.0);
        assert!((reading.temperature_c - 25.5).abs() < 1e-9);
        assert!((reading.humidity_pct - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_clamps_out_of_range_values() {
        let low = Reading::new(-10.0, -5.0);
        assert!((low.temperature_c - TEMP_MIN_C).abs() < 1e-9);
        assert!((low.humidity_pct - HUMIDITY_MIN_PCT).abs() < 1e-9);

        let high = Reading::new(80.0, 150.0);
        assert!((high.temperature_c - TEMP_MAX_C).abs() < 1e-9);
        assert!((high.humidity_pct - HUMIDITY_MAX_PCT).abs() < 1e-9);
    }

    #[test]
    fn test_range_endpoints_are_not_clamped() {
        let reading = Reading::new(50.0, 100.0);
        assert!((reading.temperature_c - 50.0).abs() < 1e-9);
        assert!((reading.humidity_pct - 100.0).abs() < 1e-9);
    }
}
