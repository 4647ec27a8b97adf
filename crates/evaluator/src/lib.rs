//! Heat-stress evaluation core for broiler chickens.
//!
//! Converts a temperature/humidity reading into the heat-stress index
//! `1.8 * C + 32 + H` and classifies it into one of five severity bands.
//! Everything here is a pure function over plain values: no I/O, no shared
//! state, safe to call from any thread.

pub mod chart_data;
pub mod impact;
pub mod index;
pub mod reading;

pub use chart_data::IndexCurve;
pub use impact::ImpactCategory;
pub use index::{evaluate, fahrenheit, heat_stress_index, HeatStressResult};
pub use reading::Reading;
