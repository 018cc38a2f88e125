use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: &ServerError) -> Response {
    let status = err.status_code();
    let message = match err {
        // Storage details stay in the logs.
        ServerError::DbError(_) | ServerError::InternalError => "Error interno del servidor".to_string(),
        ServerError::NotFound => "No encontramos lo que buscabas".to_string(),
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => msg.clone(),
    };

    let html = error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
