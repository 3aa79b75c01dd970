use axum::Router;

pub mod base;
pub mod sales;
pub mod system;

/// Router for all module endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/base", base::router())
        .nest("/sales", sales::router())
}
