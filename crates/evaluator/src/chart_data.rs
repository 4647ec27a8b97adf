//! Sampled series for the index-vs-temperature chart.
//!
//! The chart plots the heat-stress index over a fixed temperature sweep at
//! the current humidity. Sampling lives here so the UI crate only draws.

use crate::index::heat_stress_index;

/// Temperature sweep rendered by the chart, in Celsius.
pub const CHART_TEMP_MIN_C: f64 = 20.0;
pub const CHART_TEMP_MAX_C: f64 = 40.0;
/// Number of evenly spaced samples across the sweep.
pub const CHART_SAMPLES: usize = 100;

/// Index-vs-temperature series at a fixed humidity.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexCurve {
    /// Sampled temperatures, ascending, [`CHART_TEMP_MIN_C`]..=[`CHART_TEMP_MAX_C`].
    pub temps_c: Vec<f64>,
    /// Heat-stress index at each sampled temperature.
    pub indices: Vec<f64>,
}

impl IndexCurve {
    /// Sample the curve at the given humidity.
    pub fn sample(humidity_pct: f64) -> Self {
        let step = (CHART_TEMP_MAX_C - CHART_TEMP_MIN_C) / (CHART_SAMPLES - 1) as f64;
        let temps_c: Vec<f64> = (0..CHART_SAMPLES)
            .map(|i| CHART_TEMP_MIN_C + i as f64 * step)
            .collect();
        let indices = temps_c
            .iter()
            .map(|&t| heat_stress_index(t, humidity_pct))
            .collect();
        Self { temps_c, indices }
    }

    /// Smallest and largest index in the series. Empty curves yield `None`.
    pub fn index_range(&self) -> Option<(f64, f64)> {
        let first = *self.indices.first()?;
        let mut min = first;
        let mut max = first;
        for &v in &self.indices {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}
