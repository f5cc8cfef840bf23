use crate::cli::Cli;
use crate::error::AppError;
use crate::netease::GatewayConfig;
use reqwest::Url;
use std::net::{Ipv4Addr, UdpSocket};

const FALLBACK_HOST: &str = "127.0.0.1";

/// 由命令行/环境变量解析出的运行配置
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub public_url: String,
    pub gateway: GatewayConfig,
}

impl ServerSettings {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let public_url = match (&cli.public_url, &cli.public_host) {
            (Some(url), _) => url.trim_end_matches('/').to_owned(),
            (None, Some(host)) => public_url(host, cli.port),
            (None, None) => public_url(&detect_public_host(), cli.port),
        };

        let mut gateway = GatewayConfig {
            public_base: public_url.clone(),
            ..GatewayConfig::default()
        };
        if let Some(v) = cli.domain.clone() {
            gateway.domain = v;
        }
        if let Some(v) = cli.api_domain.clone() {
            gateway.api_domain = v;
        }

        check_http_url("public_url", &public_url)?;
        check_http_url("domain", &gateway.domain)?;
        check_http_url("api_domain", &gateway.api_domain)?;

        Ok(Self {
            host: cli.host.clone(),
            port: cli.port,
            public_url,
            gateway,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn check_http_url(name: &str, url: &str) -> Result<(), AppError> {
    let parsed =
        Url::parse(url).map_err(|e| AppError::Config(format!("{name} 不是合法地址 {url:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(AppError::Config(format!("{name} 必须是 http(s) 地址: {url:?}")));
    }
    Ok(())
}

pub fn public_url(host: &str, port: u16) -> String {
    format!("http://{host}:{port}")
}

/// 通过 UDP "连接" 公网地址取本机出口 IP，不会真正发包
pub fn detect_public_host() -> String {
    let probe = || -> std::io::Result<String> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.connect(("8.8.8.8", 80))?;
        Ok(socket.local_addr()?.ip().to_string())
    };
    match probe() {
        Ok(ip) => ip,
        Err(e) => {
            tracing::warn!(err = %e, fallback = FALLBACK_HOST, "探测出口 IP 失败");
            FALLBACK_HOST.to_owned()
        }
    }
}
