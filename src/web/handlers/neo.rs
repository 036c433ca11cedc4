//! NEO chart page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use chrono::{Days, Local, NaiveDate};
use serde::Deserialize;

use crate::domain::entities::{DateRange, NeoDailyTotals};
use crate::state::AppState;

/// Query parameters for the NEO page form.
#[derive(Debug, Deserialize)]
pub struct NeoPageParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One column of the bar chart: date label, formatted total, and bar height
/// as a percentage of the tallest column.
pub struct ChartBar {
    pub label: String,
    pub value: String,
    pub height: u32,
}

/// Template for the near-earth-object chart page.
#[derive(Template, WebTemplate)]
#[template(path = "neo.html")]
pub struct NeoPageTemplate {
    start: String,
    end: String,
    bars: Vec<ChartBar>,
    error: Option<String>,
}

/// Renders the NEO chart page.
///
/// # Endpoint
///
/// `GET /neo?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`
///
/// Absent or unparsable bounds fall back to the last seven days. The window
/// is validated before any upstream traffic; a violation renders the
/// range message and fetches nothing.
pub async fn neo_page_handler(
    State(state): State<AppState>,
    Query(params): Query<NeoPageParams>,
) -> NeoPageTemplate {
    let today = Local::now().date_naive();
    let week_ago = today.checked_sub_days(Days::new(7)).unwrap_or(today);

    let start = parse_date(params.start_date.as_deref()).unwrap_or(week_ago);
    let end = parse_date(params.end_date.as_deref()).unwrap_or(today);

    let start_str = start.format("%Y-%m-%d").to_string();
    let end_str = end.format("%Y-%m-%d").to_string();

    let range = match DateRange::new(start, end) {
        Ok(range) => range,
        Err(e) => {
            return NeoPageTemplate {
                start: start_str,
                end: end_str,
                bars: Vec::new(),
                error: Some(e.message().to_string()),
            };
        }
    };

    match state.neo_service.chart(&range).await {
        Ok(totals) => NeoPageTemplate {
            start: start_str,
            end: end_str,
            bars: chart_bars(&totals),
            error: None,
        },
        Err(_) => NeoPageTemplate {
            start: start_str,
            end: end_str,
            bars: Vec::new(),
            error: Some("Failed to fetch data. Please try again.".to_string()),
        },
    }
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|s| s.parse().ok())
}

/// Scales totals into percentage bar heights against the tallest column.
fn chart_bars(totals: &NeoDailyTotals) -> Vec<ChartBar> {
    let max = totals.values.iter().cloned().fold(0.0_f64, f64::max);

    totals
        .labels
        .iter()
        .zip(&totals.values)
        .map(|(label, value)| ChartBar {
            label: label.clone(),
            value: format!("{:.2}", value),
            height: if max > 0.0 {
                (value / max * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect()
}
