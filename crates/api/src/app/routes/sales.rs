use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().nest("/orders", orders_router())
}

fn orders_router() -> Router {
    Router::new()
        .route("/:id/print/order", get(print_order))
        .route("/:id/print/order.json", get(print_order_json))
        .route("/:id/print/lines", get(print_lines))
        .route("/:id/print/tax-lines", get(print_tax_lines))
}

pub async fn print_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_sale_order_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.reports.order_data(id) {
        Ok(records) => Json(records).into_response(),
        Err(e) => errors::report_error_to_response(e),
    }
}

pub async fn print_order_json(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_sale_order_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.reports.order_data_json(id) {
        Ok(Some(body)) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "serialization_error",
            "sale order data could not be serialized",
        ),
        Err(e) => errors::report_error_to_response(e),
    }
}

pub async fn print_lines(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_sale_order_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.reports.project_lines(id) {
        Ok(records) => Json(records).into_response(),
        Err(e) => errors::report_error_to_response(e),
    }
}

pub async fn print_tax_lines(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_sale_order_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.reports.project_tax_lines(id) {
        Ok(records) => Json(records).into_response(),
        Err(e) => errors::report_error_to_response(e),
    }
}
