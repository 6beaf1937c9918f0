use axum::{extract::State, Json};

use crate::{
    model::EmailRecord,
    web::{Error, WebResult},
    AppState,
};

#[tracing::instrument(name = "Fetching all stored emails", skip_all)]
pub async fn list_emails(State(app_state): State<AppState>) -> WebResult<Json<Vec<EmailRecord>>> {
    let records = app_state
        .email_store
        .list_all()
        .await
        .map_err(Error::EmailList)?;

    Ok(Json(records))
}
