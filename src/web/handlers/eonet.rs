//! EONET events page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::domain::entities::{EonetEvent, EventFilter, EventStatus};
use crate::state::AppState;

/// Dropdown choices for the past-days window.
const DAY_CHOICES: &[(u32, &str)] = &[
    (1, "Last 1 day"),
    (3, "Last 3 days"),
    (7, "Last 7 days"),
    (14, "Last 14 days"),
    (30, "Last 30 days"),
];

/// Dropdown choices for the event category; an empty value means all.
const CATEGORY_CHOICES: &[(&str, &str)] = &[
    ("", "All Categories"),
    ("wildfires", "Wildfires"),
    ("severeStorms", "Severe Storms"),
    ("volcanoes", "Volcanoes"),
    ("floods", "Floods"),
    ("landslides", "Landslides"),
    ("earthquakes", "Earthquakes"),
];

/// Query parameters for the EONET page form.
#[derive(Debug, Deserialize)]
pub struct EonetPageParams {
    pub days: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

/// One `<option>` in a filter dropdown.
pub struct SelectOption {
    pub value: String,
    pub label: &'static str,
    pub selected: bool,
}

/// Template for the natural-event tracker page.
#[derive(Template, WebTemplate)]
#[template(path = "eonet.html")]
pub struct EonetPageTemplate {
    day_options: Vec<SelectOption>,
    status_options: Vec<SelectOption>,
    category_options: Vec<SelectOption>,
    events: Vec<EonetEvent>,
    error: Option<String>,
}

/// Renders the EONET page with the selected filters applied.
///
/// # Endpoint
///
/// `GET /eonet?days=&status=&category=`
pub async fn eonet_page_handler(
    State(state): State<AppState>,
    Query(params): Query<EonetPageParams>,
) -> EonetPageTemplate {
    let days_back = params
        .days
        .as_deref()
        .and_then(|d| d.parse::<u32>().ok())
        .filter(|d| *d > 0)
        .unwrap_or(7);
    let status = params
        .status
        .as_deref()
        .and_then(EventStatus::parse)
        .unwrap_or_default();
    let category = params.category.filter(|c| !c.is_empty());

    let filter = EventFilter {
        days_back,
        status,
        category,
    };

    let (events, error) = match state.eonet_service.events(&filter).await {
        Ok(events) => (events, None),
        Err(_) => (Vec::new(), Some("Failed to fetch events".to_string())),
    };

    EonetPageTemplate {
        day_options: day_options(filter.days_back),
        status_options: status_options(filter.status),
        category_options: category_options(filter.category.as_deref()),
        events,
        error,
    }
}

fn day_options(selected: u32) -> Vec<SelectOption> {
    DAY_CHOICES
        .iter()
        .map(|&(value, label)| SelectOption {
            value: value.to_string(),
            label,
            selected: value == selected,
        })
        .collect()
}

fn status_options(selected: EventStatus) -> Vec<SelectOption> {
    [EventStatus::Open, EventStatus::Closed]
        .into_iter()
        .map(|status| SelectOption {
            value: status.as_str().to_string(),
            label: match status {
                EventStatus::Open => "Open",
                EventStatus::Closed => "Closed",
            },
            selected: status == selected,
        })
        .collect()
}

fn category_options(selected: Option<&str>) -> Vec<SelectOption> {
    CATEGORY_CHOICES
        .iter()
        .map(|&(value, label)| SelectOption {
            value: value.to_string(),
            label,
            selected: value == selected.unwrap_or(""),
        })
        .collect()
}
