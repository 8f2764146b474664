use askama::Template;
use rocket::{
    http::Status,
    response::{self, content::RawHtml, Responder},
    serde::json::{json, Json},
    Request,
};
use tracing::error;

use crate::{db, web::templates};

/// Failure of a page handler, rendered as an HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Database(#[from] db::Error),

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl PageError {
    pub fn status(&self) -> Status {
        match self {
            PageError::Database(db::Error::Connection(_)) => Status::ServiceUnavailable,
            PageError::Database(_) | PageError::Render(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for PageError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        error!(path = %request.uri(), "{self}");

        let status = self.status();
        let body = match &self {
            PageError::Database(db::Error::Connection(e)) => {
                templates::ErrorPage::new("Connection failed:", e.to_string()).render()
            }
            PageError::Database(_) => templates::ErrorPage::new(
                "Query failed:",
                "the users could not be read or written, see the server log".to_string(),
            )
            .render(),
            PageError::Render(_) => Ok("Internal Server Error".to_string()),
        };

        match body {
            Ok(body) => (status, RawHtml(body)).respond_to(request),
            Err(_) => Err(Status::InternalServerError),
        }
    }
}

/// Failure of a JSON endpoint, rendered as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub db::Error);

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        error!(path = %request.uri(), "{self}");

        let (status, message) = match &self.0 {
            db::Error::Connection(e) => (Status::ServiceUnavailable, format!("Connection failed: {e}")),
            _ => (Status::InternalServerError, "Query failed".to_string()),
        };
        (status, Json(json!({ "error": message }))).respond_to(request)
    }
}
