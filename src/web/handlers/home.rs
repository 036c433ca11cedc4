//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page linking to the three feature pages.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
