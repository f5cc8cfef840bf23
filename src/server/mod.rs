//! 对外 HTTP 接口（axum）

mod handlers;
mod response;

pub use response::{Envelope, MSG_BAD_PARAM, MSG_OK};

use crate::netease::NeteaseGateway;
use axum::Router;
use axum::routing::get;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub const DEFAULT_SEARCH_LIMIT: u32 = 30;

pub fn router(gateway: Arc<NeteaseGateway>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/getKeyword", get(handlers::get_keyword))
        .route("/getLyric", get(handlers::get_lyric))
        .route("/getHotList", get(handlers::get_hot_list))
        .route("/playMusic", get(handlers::play_music))
        .layer(cors)
        .with_state(gateway)
}

/// 在 `listener` 上提供服务，直到 `shutdown` 完成
pub async fn serve<F>(
    listener: TcpListener,
    gateway: Arc<NeteaseGateway>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "HTTP 服务已启动");
    }
    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("HTTP 服务已停止");
    Ok(())
}
