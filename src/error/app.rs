//! 进程启动阶段的错误

use super::NeteaseError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 监听端口等 IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("网关初始化失败: {0}")]
    Netease(#[from] NeteaseError),

    /// 命令行或环境变量给出的地址不合法
    #[error("配置错误: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "端口被占用");
        let err = AppError::Io(io_err);
        assert!(err.to_string().contains("IO 错误"));
    }

    #[test]
    fn test_error_chain() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let app_err = AppError::Io(io_err);
        assert!(app_err.source().is_some());
    }
}
