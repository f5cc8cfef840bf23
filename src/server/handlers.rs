use super::DEFAULT_SEARCH_LIMIT;
use super::response::{bad_request, detail, success};
use crate::netease::NeteaseGateway;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

type Gateway = State<Arc<NeteaseGateway>>;

const AUDIO_CACHE_CONTROL: &str = "public, max-age=86400";

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    name: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    id: Option<String>,
}

fn parse_positive(v: Option<&str>) -> Option<i64> {
    v?.trim().parse::<i64>().ok().filter(|&n| n > 0)
}

pub async fn get_keyword(State(gw): Gateway, Query(q): Query<KeywordQuery>) -> Response {
    let Some(name) = q.name.filter(|s| !s.is_empty()) else {
        return bad_request();
    };
    let limit = match q.limit.as_deref() {
        None => DEFAULT_SEARCH_LIMIT,
        Some(raw) => match parse_positive(Some(raw)).and_then(|n| u32::try_from(n).ok()) {
            Some(n) => n,
            None => return bad_request(),
        },
    };
    success(gw.search(&name, limit).await)
}

pub async fn get_lyric(State(gw): Gateway, Query(q): Query<IdQuery>) -> Response {
    let Some(id) = parse_positive(q.id.as_deref()) else {
        return bad_request();
    };
    let lyric = gw.lyric(id).await.filter(|v| !v.is_null());
    success(lyric.unwrap_or_else(|| json!({})))
}

pub async fn get_hot_list(State(gw): Gateway) -> Response {
    success(gw.trending_list().await)
}

pub async fn play_music(State(gw): Gateway, Query(q): Query<IdQuery>) -> Response {
    let Some(id) = parse_positive(q.id.as_deref()) else {
        return bad_request();
    };

    let audio = match gw.stream_audio(id).await {
        Ok(audio) => audio,
        Err(e) if e.is_not_found() => {
            return detail(StatusCode::NOT_FOUND, "Audio not found or unavailable");
        }
        Err(e) if e.is_unavailable() => {
            return detail(StatusCode::BAD_GATEWAY, "Upstream request failed");
        }
        Err(e) => {
            tracing::error!(track_id = id, err = %e, "playMusic 未预期的错误");
            return detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .header(header::CACHE_CONTROL, AUDIO_CACHE_CONTROL)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    if let Some(len) = audio.content_length() {
        builder = builder.header(header::CONTENT_LENGTH, len);
    }

    match builder.body(Body::from_stream(audio)) {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(track_id = id, err = %e, "构造音频响应失败");
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
