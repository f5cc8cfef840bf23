use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "netease-proxy",
    version,
    about = "网易云音乐代理：搜索、歌词、热榜与音频流转发"
)]
pub struct Cli {
    /// 监听地址
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// 监听端口
    #[arg(long, env = "PORT", default_value_t = 9090)]
    pub port: u16,

    /// 对外公开的主机名/IP（默认自动探测本机出口 IP）
    #[arg(long, env = "PUBLIC_HOST")]
    pub public_host: Option<String>,

    /// 完整覆盖对外基础地址，例如 `https://music.example.com`
    #[arg(long, env = "PUBLIC_URL")]
    pub public_url: Option<String>,

    /// 覆盖网易 domain（默认 https://music.163.com）
    #[arg(long, env = "NETEASE_DOMAIN")]
    pub domain: Option<String>,

    /// 覆盖网易 api_domain（默认 https://interface.music.163.com）
    #[arg(long, env = "NETEASE_API_DOMAIN")]
    pub api_domain: Option<String>,

    /// 额外写入按天滚动的日志文件
    #[arg(long, env = "NETEASE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// 覆盖日志过滤（等价于设置 RUST_LOG）
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,
}
