use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

pub const MSG_OK: &str = "成功";
pub const MSG_BAD_PARAM: &str = "参数错误";

/// 统一响应格式 `{code, data, msg}`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: i32,
    pub data: T,
    pub msg: &'static str,
}

pub fn success<T: Serialize>(data: T) -> Response {
    Json(Envelope {
        code: 0,
        data,
        msg: MSG_OK,
    })
    .into_response()
}

pub fn bad_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(Envelope {
            code: 1,
            data: json!({}),
            msg: MSG_BAD_PARAM,
        }),
    )
        .into_response()
}

/// 音频接口的错误体，不包含内部细节
pub fn detail(status: StatusCode, detail: &'static str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}
