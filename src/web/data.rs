//! Request payloads and the extractor that decodes them.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Deserialize};

// ###################################
// ->   STRUCTS
// ###################################

/// The body of a `POST /add-email` request. A missing `email` field decodes
/// to the empty string; nothing is validated.
#[derive(Debug, Deserialize)]
pub struct EmailPayload {
    #[serde(default)]
    pub email: String,
}

/// Decodes the request body as JSON when the `Content-Type` says so and as
/// urlencoded form data otherwise. Browsers submit the sign-up form
/// urlencoded; scripted clients tend to send JSON. Requests without a
/// `Content-Type` fall through to the form branch, so an empty body still
/// decodes.
pub struct FormOrJson<T>(pub T);

// ###################################
// ->   IMPLS
// ###################################
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> core::result::Result<Self, Self::Rejection> {
        let is_json = json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let value = if is_json {
            serde_json::from_slice(&bytes).map_err(|er| bad_request(er.to_string()))?
        } else {
            serde_urlencoded::from_bytes(&bytes).map_err(|er| bad_request(er.to_string()))?
        };

        Ok(Self(value))
    }
}

fn json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| {
            let essence = essence.trim();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

fn bad_request(detail: String) -> Response {
    (StatusCode::BAD_REQUEST, detail).into_response()
}
