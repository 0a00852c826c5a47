use rocket::response::{Responder, Response};
use rocket::tokio::task::JoinError;
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize, Debug)]
pub struct ApiError {
    err: String,
}

#[derive(Debug)]
pub(crate) struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, err: String) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(ApiError { err }),
            status,
        }
    }
}

impl<'r, T: serde::Serialize> Responder<'r, 'r> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request) -> response::Result<'r> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

/// Failures of the database or the image tree.
#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("couldn't open database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("couldn't create tables: {0}")]
    Migration(String),
    #[error("database worker died: {0}")]
    Worker(#[from] JoinError),
}

impl From<StorageError> for ErrorResponse {
    fn from(err: StorageError) -> Self {
        log::error!("request failed: {}", err);
        ErrorResponse::new(Status { code: 500 }, err.to_string())
    }
}
