//! 统一错误处理模块

mod app;
mod netease;

pub use app::AppError;
pub use netease::NeteaseError;
