use clap::Parser;
use netease_proxy::cli::Cli;
use netease_proxy::error::AppError;
use netease_proxy::logging;
use netease_proxy::netease::NeteaseGateway;
use netease_proxy::server;
use netease_proxy::settings::ServerSettings;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let _log_guard = logging::init(logging::LogConfig {
        dir: cli.log_dir.clone(),
        filter: cli.log_filter.clone(),
    });

    let settings = ServerSettings::from_cli(&cli)?;
    tracing::info!(
        bind = %settings.bind_addr(),
        public_url = %settings.public_url,
        domain = %settings.gateway.domain,
        api_domain = %settings.gateway.api_domain,
        "netease-proxy 启动"
    );

    let gateway = Arc::new(NeteaseGateway::new(settings.gateway.clone())?);
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    server::serve(listener, gateway, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(err = %e, "监听退出信号失败");
        std::future::pending::<()>().await;
    }
    tracing::info!("收到退出信号，开始关闭");
}
