use super::config::GatewayConfig;
use reqwest::Method;

pub const UA_WEB: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REFERER_WEB: &str = "https://music.163.com/";
pub const ORIGIN_WEB: &str = "https://music.163.com";

/// 固定的上游端点表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// weapi，JSON: `result.songs[]`
    Search,
    /// weapi，JSON 原样返回
    Lyric,
    /// HTML 页面，歌曲 JSON 嵌在 textarea 中
    TrendingList,
    /// 公开的外链跳转，返回音频
    Audio,
}

impl Endpoint {
    pub fn method(self) -> Method {
        match self {
            Endpoint::Search | Endpoint::Lyric => Method::POST,
            Endpoint::TrendingList | Endpoint::Audio => Method::GET,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::Lyric => "lyric",
            Endpoint::TrendingList => "toplist",
            Endpoint::Audio => "audio",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Search => "/weapi/search/get",
            Endpoint::Lyric => "/weapi/song/lyric",
            Endpoint::TrendingList => "/discover/toplist",
            Endpoint::Audio => "/song/media/outer/url",
        }
    }

    pub fn url(self, cfg: &GatewayConfig) -> String {
        let base = match self {
            Endpoint::Search => &cfg.api_domain,
            Endpoint::Lyric | Endpoint::TrendingList | Endpoint::Audio => &cfg.domain,
        };
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

pub fn audio_url(cfg: &GatewayConfig, track_id: i64) -> String {
    format!("{}?id={track_id}.mp3", Endpoint::Audio.url(cfg))
}
