//! Embed API 模块 (店面公开接口，无需认证)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/embed", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/settings", get(handler::embed_settings))
        .route("/widget", get(handler::embed_widget))
}
