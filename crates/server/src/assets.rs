use axum::response::{Html, IntoResponse};

const LANDING_PAGE: &str = include_str!("../web/index.html");

pub async fn landing_page() -> impl IntoResponse {
    Html(LANDING_PAGE)
}
