//! APOD page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::domain::entities::ApodRecord;
use crate::state::AppState;

/// Query parameters for the APOD page form.
#[derive(Debug, Deserialize)]
pub struct ApodPageParams {
    pub date: Option<String>,
}

/// Template for the Astronomy Picture of the Day page.
#[derive(Template, WebTemplate)]
#[template(path = "apod.html")]
pub struct ApodPageTemplate {
    /// Form value for the date picker (`YYYY-MM-DD`).
    date: String,
    /// Upper bound for the date picker; future entries don't exist.
    today: String,
    record: Option<ApodRecord>,
    note: Option<&'static str>,
    error: Option<String>,
}

/// Renders the APOD page, running the date-fallback fetch.
///
/// # Endpoint
///
/// `GET /apod?date=YYYY-MM-DD`
///
/// An absent or unparsable date means today. The failure message depends on
/// the requested date: fetching today can legitimately fail because the entry
/// isn't published yet, while a past date suggests picking another one.
pub async fn apod_page_handler(
    State(state): State<AppState>,
    Query(params): Query<ApodPageParams>,
) -> ApodPageTemplate {
    let today = Local::now().date_naive();
    let requested = params
        .date
        .as_deref()
        .and_then(|s| s.parse::<NaiveDate>().ok())
        .unwrap_or(today);

    let date = requested.format("%Y-%m-%d").to_string();
    let today_str = today.format("%Y-%m-%d").to_string();

    match state
        .apod_service
        .fetch_with_fallback(requested, today)
        .await
    {
        Ok(fetched) => ApodPageTemplate {
            date,
            today: today_str,
            record: Some(fetched.record),
            note: fetched.note,
            error: None,
        },
        Err(_) => {
            let message = if requested == today {
                "Failed to fetch APOD data"
            } else {
                "Failed to fetch APOD data. Please try another date."
            };

            ApodPageTemplate {
                date,
                today: today_str,
                record: None,
                note: None,
                error: Some(message.to_string()),
            }
        }
    }
}
