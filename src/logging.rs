use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn";
const LOG_FILE_PREFIX: &str = "netease-proxy.log";

/// 持有文件日志的后台 writer，drop 时刷新剩余日志
pub struct LogGuard(#[allow(dead_code)] Option<WorkerGuard>);

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub dir: Option<PathBuf>,
    pub filter: Option<String>,
}

pub fn init(cfg: LogConfig) -> LogGuard {
    let filter = build_filter(cfg.filter.as_deref());

    let stdout_layer = fmt::layer().with_target(true);

    let (file_layer, guard) = match cfg.dir.as_deref().and_then(prepare_log_dir) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(file_writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    if let Some(dir) = cfg.dir {
        tracing::info!(log_dir = %dir.display(), file_logging = guard.is_some(), "tracing 已初始化");
    } else {
        tracing::info!("tracing 已初始化");
    }

    LogGuard(guard)
}

fn build_filter(filter: Option<&str>) -> EnvFilter {
    match filter {
        Some(s) if !s.trim().is_empty() => EnvFilter::new(s),
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

fn prepare_log_dir(dir: &Path) -> Option<PathBuf> {
    match fs::create_dir_all(dir) {
        Ok(()) => Some(dir.to_path_buf()),
        Err(e) => {
            eprintln!("无法创建日志目录 {}: {e}，仅输出到终端", dir.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_log_dir_creates_nested() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("a").join("logs");
        assert_eq!(prepare_log_dir(&dir), Some(dir.clone()));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_prepare_log_dir_rejects_file_path() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let file = tmp.path().join("not-a-dir");
        fs::write(&file, b"x").expect("write");
        assert_eq!(prepare_log_dir(&file.join("logs")), None);
    }

    #[test]
    fn test_explicit_filter_wins() {
        let f = build_filter(Some("debug,hyper=off"));
        assert!(f.to_string().contains("hyper=off"));
    }
}
