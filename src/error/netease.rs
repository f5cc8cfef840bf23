//! 上游网关相关错误

use crate::netease::CryptoError;
use std::time::Duration;

/// 上游网关错误类型
#[derive(Debug, thiserror::Error)]
pub enum NeteaseError {
    /// 请求体无法序列化或加密
    #[error("请求加密失败: {0}")]
    Encoding(#[from] CryptoError),

    /// 连接失败、DNS 失败、传输中断或超时
    #[error("上游不可用: {0}")]
    UpstreamUnavailable(reqwest::Error),

    /// 在限定时间内未收到上游响应头
    #[error("上游响应超时（{0:?}）")]
    Timeout(Duration),

    /// 上游明确表示资源不存在
    #[error("上游资源不存在: HTTP {status}")]
    NotFound { status: u16 },

    /// JSON 接口返回了非 2xx 状态
    #[error("上游返回异常状态: HTTP {status}")]
    UpstreamStatus { status: u16 },

    /// JSON/HTML 解析失败，或缺少预期的嵌入数据
    #[error("上游响应格式错误: {0}")]
    MalformedUpstreamResponse(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for NeteaseError {
    fn from(err: reqwest::Error) -> Self {
        NeteaseError::UpstreamUnavailable(err)
    }
}

impl From<serde_json::Error> for NeteaseError {
    fn from(err: serde_json::Error) -> Self {
        NeteaseError::MalformedUpstreamResponse(err.to_string())
    }
}

impl NeteaseError {
    /// 网络层失败：连接、传输或等待响应头超时
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            NeteaseError::UpstreamUnavailable(_) | NeteaseError::Timeout(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, NeteaseError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = NeteaseError::NotFound { status: 404 };
        assert_eq!(err.to_string(), "上游资源不存在: HTTP 404");
        assert!(err.is_not_found());
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_timeout_is_unavailable() {
        let err = NeteaseError::Timeout(Duration::from_secs(10));
        assert!(err.is_unavailable());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_serde_error_is_malformed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = NeteaseError::from(parse_err);
        assert!(matches!(err, NeteaseError::MalformedUpstreamResponse(_)));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_status_error_is_neither_category() {
        let err = NeteaseError::UpstreamStatus { status: 503 };
        assert!(err.to_string().contains("503"));
        assert!(!err.is_unavailable());
        assert!(!err.is_not_found());
    }
}
