use crate::netease::toplist::DEFAULT_ELEMENT_ID;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub domain: String,
    pub api_domain: String,
    /// 本服务对外的基础地址，用于拼接 `music_url`
    pub public_base: String,
    /// search / lyric / 榜单的整体超时
    pub api_timeout: Duration,
    /// 音频：连接、读取以及等待响应头的超时
    pub media_timeout: Duration,
    pub toplist_element_id: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            domain: "https://music.163.com".to_owned(),
            api_domain: "https://interface.music.163.com".to_owned(),
            public_base: "http://127.0.0.1:9090".to_owned(),
            api_timeout: Duration::from_secs(5),
            media_timeout: Duration::from_secs(10),
            toplist_element_id: DEFAULT_ELEMENT_ID.to_owned(),
        }
    }
}

impl GatewayConfig {
    /// 只由 id 和 public_base 决定，保证可重建
    pub fn playback_url(&self, id: i64) -> String {
        format!("{}/playMusic?id={id}", self.public_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_url() {
        let cfg = GatewayConfig {
            public_base: "http://192.168.0.132:9090/".to_owned(),
            ..GatewayConfig::default()
        };
        assert_eq!(cfg.playback_url(33894312), "http://192.168.0.132:9090/playMusic?id=33894312");
    }
}
