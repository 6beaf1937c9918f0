use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    web::{
        data::{EmailPayload, FormOrJson},
        Error, WebResult,
    },
    AppState,
};

#[tracing::instrument(
    name = "Adding email to the store",
    skip(app_state, payload),
    fields(email = %payload.email)
)]
pub async fn add_email(
    State(app_state): State<AppState>,
    FormOrJson(payload): FormOrJson<EmailPayload>,
) -> WebResult<impl IntoResponse> {
    app_state
        .email_store
        .insert(&payload.email)
        .await
        .map_err(Error::EmailInsert)?;

    // Drop the client back on the sign-up page.
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}
