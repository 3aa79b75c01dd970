use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use arbor_core::UserId;

use crate::app::errors;
use crate::context::OperatorContext;

pub const OPERATOR_HEADER: &str = "x-operator-id";

/// Attach an [`OperatorContext`] to the request.
pub async fn operator_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let operator = match extract_operator(req.headers()) {
        Ok(op) => op,
        Err(msg) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_operator", msg);
        }
    };

    req.extensions_mut().insert(OperatorContext::new(operator));
    next.run(req).await
}

fn extract_operator(headers: &HeaderMap) -> Result<Option<UserId>, String> {
    let Some(header) = headers.get(OPERATOR_HEADER) else {
        return Ok(None);
    };

    let value = header
        .to_str()
        .map_err(|_| format!("{OPERATOR_HEADER} is not valid ASCII"))?
        .trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse::<UserId>()
        .map(Some)
        .map_err(|e| format!("{OPERATOR_HEADER}: {e}"))
}
