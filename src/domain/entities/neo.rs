//! Near-earth-object records from the NeoWs feed.

use serde::Deserialize;

/// The slice of a NeoWs asteroid record the chart consumes.
///
/// The feed carries far more per asteroid (orbit data, approach velocity,
/// hazard flags); only the maximum estimated diameter matters here, and a
/// record without it counts as a malformed body.
#[derive(Debug, Clone, Deserialize)]
pub struct NearEarthObject {
    pub estimated_diameter: EstimatedDiameter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_max: f64,
}

/// Chart-ready aggregation output: index-aligned date labels and per-date
/// summed diameters in meters, rounded to two decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct NeoDailyTotals {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl NeoDailyTotals {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
