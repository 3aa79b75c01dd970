use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use arbor_infra::batch::BatchId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::OperatorContext;
use crate::middleware::operator_middleware;

pub fn router() -> Router {
    Router::new()
        .route("/password-change-batches/:id/run", post(run_password_change_batch))
        .route("/batches/:id", get(get_batch))
        .layer(axum::middleware::from_fn(operator_middleware))
}

pub async fn run_password_change_batch(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(operator): Extension<OperatorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let config_id = match errors::parse_batch_config_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let now = Utc::now().naive_utc();
    let operator = operator.operator();
    // One bcrypt hash per user: keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        services.password_change.run(config_id, operator, now)
    })
    .await;

    match result {
        Ok(Ok(batch)) => Json(dto::RunBatchResponse::from(batch)).into_response(),
        Ok(Err(e)) => errors::batch_error_to_response(e),
        Err(e) => errors::join_error_to_response(e),
    }
}

pub async fn get_batch(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match id.parse::<BatchId>() {
        Ok(id) => id,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "id must be a UUID");
        }
    };

    match services.batches.get(id) {
        Ok(Some(batch)) => Json(batch).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "batch not found"),
        Err(e) => errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string()),
    }
}
