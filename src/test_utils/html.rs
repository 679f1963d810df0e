//! Reading rendered pages and fragments back out of handler responses.

use axum::{body::Body, response::Response};
use scraper::Html;

/// The whole response body as text.
pub(crate) async fn response_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("could not read the response body");

    String::from_utf8(bytes.to_vec()).expect("response body is not UTF-8")
}

/// Parses a full page such as the dashboard.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&response_text(response).await)
}

/// Parses an htmx fragment such as a form or an alert.
pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&response_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "want well-formed HTML, got errors: {:?}",
        html.errors
    );
}
