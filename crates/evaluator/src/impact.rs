use serde::{Deserialize, Serialize};

/// Gauge scale ceiling. The top band runs from 165 to here on the dial.
pub const GAUGE_MAX: f64 = 170.0;

/// Performance/mortality impact bands, ordered from harmless to lethal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ImpactCategory {
    #[default]
    NoImpact,
    OnsetDisturbance,
    IntakeShift,
    OnsetMortality,
    HighMortality,
}

/// Lower bound of each band, scanned in ascending order.
///
/// Single source of the boundary constants: the classifier, the gauge arcs,
/// and the chart coloring all read from this table. Each boundary value
/// belongs to the band it opens (150.0 is `OnsetDisturbance`, 165.0 is
/// `HighMortality`).
pub const BANDS: [(f64, ImpactCategory); 5] = [
    (0.0, ImpactCategory::NoImpact),
    (150.0, ImpactCategory::OnsetDisturbance),
    (155.0, ImpactCategory::IntakeShift),
    (160.0, ImpactCategory::OnsetMortality),
    (165.0, ImpactCategory::HighMortality),
];

impl ImpactCategory {
    pub const ALL: [ImpactCategory; 5] = [
        ImpactCategory::NoImpact,
        ImpactCategory::OnsetDisturbance,
        ImpactCategory::IntakeShift,
        ImpactCategory::OnsetMortality,
        ImpactCategory::HighMortality,
    ];

    /// Classify a heat-stress index value into its impact band.
    ///
    /// Strict less-than against the lower bound of each subsequent band, so
    /// an index sitting exactly on a boundary lands in the upper band.
    pub fn from_index(index: f64) -> ImpactCategory {
        let mut category = BANDS[0].1;
        for &(lower, band) in &BANDS[1..] {
            if index < lower {
                break;
            }
            category = band;
        }
        category
    }

    /// Impact description shown to the user.
    pub fn description(self) -> &'static str {
        match self {
            ImpactCategory::NoImpact => "Tidak menyebabkan permasalahan performa",
            ImpactCategory::OnsetDisturbance => "Mulai terjadi gangguan performance ayam",
            ImpactCategory::IntakeShift => {
                "Penurunan feed intake, peningkatan water intake, dan penurunan performa"
            }
            ImpactCategory::OnsetMortality => "Awal kejadian kematian",
            ImpactCategory::HighMortality => "Dapat menyebabkan tingginya kematian",
        }
    }

    /// Row label used in the reference table.
    pub fn table_label(self) -> &'static str {
        match self {
            ImpactCategory::NoImpact => "kurang dari 150",
            ImpactCategory::OnsetDisturbance => "155",
            ImpactCategory::IntakeShift => "160",
            ImpactCategory::OnsetMortality => "165",
            ImpactCategory::HighMortality => "lebih dari 170",
        }
    }

    /// Lower bound of this band on the index scale.
    pub fn lower_bound(self) -> f64 {
        BANDS
            .iter()
            .find(|(_, band)| *band == self)
            .map(|(lower, _)| *lower)
            .unwrap_or(0.0)
    }

    /// Upper bound of this band on the gauge scale (the next band's lower
    /// bound, or [`GAUGE_MAX`] for the top band).
    pub fn upper_bound(self) -> f64 {
        BANDS
            .iter()
            .find(|(lower, _)| *lower > self.lower_bound())
            .map(|(lower, _)| *lower)
            .unwrap_or(GAUGE_MAX)
    }
}
