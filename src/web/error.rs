use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum_macros::AsRefStr;

use crate::model;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("failed to store a new email: {0}")]
    EmailInsert(#[source] model::Error),
    #[error("failed to fetch stored emails: {0}")]
    EmailList(#[source] model::Error),
}

impl Error {
    /// The client only ever sees a fixed status and body; the detail stays
    /// in the server logs.
    pub fn status_code_and_body(&self) -> (StatusCode, &'static str) {
        match self {
            Error::EmailInsert(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Error adding email"),
            Error::EmailList(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching emails"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:<12} - {}: {self}", "INTO_RES", self.as_ref());

        let (status_code, body) = self.status_code_and_body();
        (status_code, body).into_response()
    }
}
