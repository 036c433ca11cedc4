//! Aggregation of NeoWs feed records into bar-chart series.

use crate::domain::entities::neo::{NearEarthObject, NeoDailyTotals};
use serde_json::{Map, Value};

/// Sums per-date maximum estimated diameters into chart series.
///
/// `objects` is the `near_earth_objects` member of a NeoWs feed: a JSON
/// object mapping `YYYY-MM-DD` keys to arrays of asteroid records. Dates are
/// emitted in the key order the upstream supplied (never re-sorted), and each
/// value is the sum of `estimated_diameter.meters.estimated_diameter_max`
/// across that date's records, rounded to two decimal places. A date with no
/// records contributes `0.00`.
///
/// # Errors
///
/// Returns a decode error when a date's entry is not an array of records
/// carrying the expected diameter structure.
pub fn aggregate_daily_diameters(
    objects: &Map<String, Value>,
) -> Result<NeoDailyTotals, serde_json::Error> {
    let mut labels = Vec::with_capacity(objects.len());
    let mut values = Vec::with_capacity(objects.len());

    for (date, entries) in objects {
        let asteroids: Vec<NearEarthObject> = serde_json::from_value(entries.clone())?;

        let total: f64 = asteroids
            .iter()
            .map(|a| a.estimated_diameter.meters.estimated_diameter_max)
            .sum();

        labels.push(date.clone());
        values.push(round2(total));
    }

    Ok(NeoDailyTotals { labels, values })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
