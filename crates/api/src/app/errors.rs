use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use arbor_core::SaleOrderId;
use arbor_infra::ReportError;
use arbor_infra::batch::BatchError;

pub fn batch_error_to_response(err: BatchError) -> axum::response::Response {
    match err {
        BatchError::ConfigNotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("password change batch {id} not found"),
        ),
        BatchError::Repository(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
        BatchError::Password(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "password_error", e.to_string())
        }
    }
}

pub fn join_error_to_response(err: tokio::task::JoinError) -> axum::response::Response {
    tracing::error!(error = %err, "blocking task failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "task_failed", err.to_string())
}

pub fn report_error_to_response(err: ReportError) -> axum::response::Response {
    match err {
        ReportError::OrderNotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("sale order {id} not found"),
        ),
        ReportError::Repository(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_sale_order_id(s: &str) -> Result<SaleOrderId, axum::response::Response> {
    s.parse()
        .map_err(|e: arbor_core::DomainError| json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()))
}

pub fn parse_batch_config_id(s: &str) -> Result<i64, axum::response::Response> {
    match s.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            "id must be a positive integer",
        )),
    }
}
