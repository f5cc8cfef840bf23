#![allow(dead_code)]

use netease_proxy::netease::{GatewayConfig, NeteaseGateway};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

pub const PUBLIC_BASE: &str = "http://proxy.test:9090";

pub fn config_for(upstream: &str) -> GatewayConfig {
    GatewayConfig {
        domain: upstream.to_owned(),
        api_domain: upstream.to_owned(),
        public_base: PUBLIC_BASE.to_owned(),
        api_timeout: Duration::from_secs(2),
        media_timeout: Duration::from_secs(2),
        ..GatewayConfig::default()
    }
}

pub fn gateway_for(upstream: &str) -> NeteaseGateway {
    NeteaseGateway::new(config_for(upstream)).expect("gateway")
}

/// 5 首歌，其中 2 首 fee == 1
pub fn five_tracks_two_paid() -> serde_json::Value {
    serde_json::json!([
        { "id": 101, "name": "free-a", "artists": [{ "id": 1, "name": "A" }], "album": { "id": 11, "name": "L1" }, "duration": 1000, "fee": 0 },
        { "id": 102, "name": "paid-b", "artists": [{ "id": 2, "name": "B" }], "album": { "id": 12, "name": "L2" }, "duration": 2000, "fee": 1 },
        { "id": 103, "name": "vip-c", "artists": [{ "id": 3, "name": "C" }], "album": { "id": 13, "name": "L3" }, "duration": 3000, "fee": 8 },
        { "id": 104, "name": "paid-d", "artists": [], "album": { "id": 14, "name": "L4" }, "duration": 4000, "fee": 1 },
        { "id": 105, "name": "free-e", "artists": [{ "id": 5, "name": "E" }], "album": { "id": 15, "name": "L5" }, "duration": 5000 }
    ])
}

/// 读完请求头（不关心请求体）
pub async fn read_request_head(sock: &mut TcpStream) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = sock.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    Ok(())
}
