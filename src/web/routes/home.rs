use axum::response::Html;

/// The sign-up page, embedded at compile time and served verbatim. Stays up
/// even when the store is unreachable.
const HOME_PAGE: &str = include_str!("../../../static/index.html");

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}
