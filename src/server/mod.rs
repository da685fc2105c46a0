use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};

use crate::AuthPlugin;

mod authenticate;

/// HTTP surface for hosts calling the plugin remotely.
pub fn router(plugin: Arc<dyn AuthPlugin>) -> Router {
    Router::new()
        .route(
            "/authenticate",
            get(authenticate::basic_handler).post(authenticate::json_handler),
        )
        .layer(middleware::from_fn(logger))
        .layer(Extension(plugin))
}

async fn logger<B>(req: Request<B>, next: Next<B>) -> Response {
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_owned());
    log::info!("{} {} {}", remote, req.method(), req.uri().path());
    next.run(req).await
}
