use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub mod api;
pub mod svc;

// any anyhow error escaping a handler becomes a 500 carrying the error message.  expected
// failures, such as a rejected contact form, are answered by the handler itself
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("internal server error: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
