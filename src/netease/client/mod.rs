mod config;
mod stream;
mod types;

pub use config::GatewayConfig;
pub use stream::AudioStream;
pub use types::Endpoint;

use crate::domain::model::Track;
use crate::error::NeteaseError;
use crate::netease::crypto;
use crate::netease::models::{convert, dto};
use crate::netease::toplist::{EmbeddedTrackList, TextareaTrackList};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};
use reqwest::redirect::Policy;
use serde_json::{Value, json};
use std::sync::Arc;
use types::{ORIGIN_WEB, REFERER_WEB, UA_WEB};

const MAX_REDIRECTS: usize = 10;

/// 上游网关：持有两个显式构造的 HTTP client，启动时创建、关闭时随之释放
#[derive(Debug)]
pub struct NeteaseGateway {
    api: reqwest::Client,
    media: reqwest::Client,
    toplist: Arc<dyn EmbeddedTrackList>,
    pub cfg: GatewayConfig,
}

impl NeteaseGateway {
    pub fn new(cfg: GatewayConfig) -> Result<Self, NeteaseError> {
        let toplist = TextareaTrackList::new(&cfg.toplist_element_id)
            .map_err(|e| NeteaseError::Internal(format!("榜单元素选择器无效: {e}")))?;
        Self::with_toplist_source(cfg, Arc::new(toplist))
    }

    pub fn with_toplist_source(
        cfg: GatewayConfig,
        toplist: Arc<dyn EmbeddedTrackList>,
    ) -> Result<Self, NeteaseError> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static(REFERER_WEB));
        headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_WEB));

        let api = reqwest::Client::builder()
            .user_agent(UA_WEB)
            .default_headers(headers)
            .timeout(cfg.api_timeout)
            .build()
            .map_err(|e| NeteaseError::Internal(format!("构造 api client 失败: {e}")))?;

        let media = reqwest::Client::builder()
            .user_agent(UA_WEB)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .connect_timeout(cfg.media_timeout)
            .read_timeout(cfg.media_timeout)
            .build()
            .map_err(|e| NeteaseError::Internal(format!("构造 media client 失败: {e}")))?;

        Ok(Self {
            api,
            media,
            toplist,
            cfg,
        })
    }

    // ========== 宽松接口：失败只记录日志 ==========

    pub async fn search(&self, keyword: &str, limit: u32) -> Vec<Track> {
        match self.try_search(keyword, limit).await {
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::warn!(keyword, limit, err = %e, "搜索失败");
                vec![]
            }
        }
    }

    pub async fn lyric(&self, track_id: i64) -> Option<Value> {
        match self.try_lyric(track_id).await {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(track_id, err = %e, "获取歌词失败");
                None
            }
        }
    }

    pub async fn trending_list(&self) -> Vec<Track> {
        match self.try_trending_list().await {
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::warn!(err = %e, "获取榜单失败");
                vec![]
            }
        }
    }

    // ========== 原始接口 ==========

    pub async fn try_search(&self, keyword: &str, limit: u32) -> Result<Vec<Track>, NeteaseError> {
        let body = self
            .weapi_request(
                Endpoint::Search,
                &json!({
                  "s": keyword,
                  "type": 1,
                  "limit": limit,
                  "offset": 0,
                }),
            )
            .await?;
        let resp: dto::SearchResp = serde_json::from_value(body)?;
        let tracks = convert::to_tracks_from_search(resp, &self.cfg);
        tracing::debug!(keyword, count = tracks.len(), "搜索完成");
        Ok(tracks)
    }

    pub async fn try_lyric(&self, track_id: i64) -> Result<Value, NeteaseError> {
        self.weapi_request(
            Endpoint::Lyric,
            &json!({
              "id": track_id,
              "lv": -1,
              "tv": -1,
            }),
        )
        .await
    }

    pub async fn try_trending_list(&self) -> Result<Vec<Track>, NeteaseError> {
        let url = Endpoint::TrendingList.url(&self.cfg);
        let resp = self
            .api
            .request(Endpoint::TrendingList.method(), &url)
            .send()
            .await?;
        let html = ensure_success(resp)?.text().await?;

        let Some(raw) = self.toplist.extract(&html) else {
            return Err(NeteaseError::MalformedUpstreamResponse(
                "页面中未找到榜单数据元素".to_owned(),
            ));
        };
        let items: Vec<Value> = serde_json::from_str(&raw)?;
        let tracks = convert::to_tracks_from_toplist(items, &self.cfg);
        tracing::debug!(count = tracks.len(), "榜单解析完成");
        Ok(tracks)
    }

    /// 直接拉取音频并返回可逐块消费的字节流
    ///
    /// 非 200 → [`NeteaseError::NotFound`]；连接失败或超时 →
    /// [`NeteaseError::UpstreamUnavailable`] / [`NeteaseError::Timeout`]。
    pub async fn stream_audio(&self, track_id: i64) -> Result<AudioStream, NeteaseError> {
        let url = types::audio_url(&self.cfg, track_id);
        tracing::info!(track_id, url = %url, "拉取音频");

        let pending = self.media.request(Endpoint::Audio.method(), &url).send();
        let resp = match tokio::time::timeout(self.cfg.media_timeout, pending).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                tracing::error!(track_id, err = %e, "音频请求网络错误");
                return Err(NeteaseError::UpstreamUnavailable(e));
            }
            Err(_) => {
                tracing::error!(track_id, timeout = ?self.cfg.media_timeout, "音频请求超时");
                return Err(NeteaseError::Timeout(self.cfg.media_timeout));
            }
        };

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(track_id, status = %status, url = %url, "音频不可用");
            return Err(NeteaseError::NotFound {
                status: status.as_u16(),
            });
        }

        Ok(AudioStream::new(track_id, resp))
    }

    // ========== Request Methods ==========

    async fn weapi_request(&self, endpoint: Endpoint, data: &Value) -> Result<Value, NeteaseError> {
        let form = crypto::weapi(data)?;
        let url = endpoint.url(&self.cfg);
        tracing::debug!(endpoint = endpoint.name(), url = %url, "weapi 请求");

        let resp = self
            .api
            .request(endpoint.method(), &url)
            .form(&form.into_form())
            .send()
            .await?;
        let bytes = ensure_success(resp)?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, NeteaseError> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(NeteaseError::NotFound {
            status: status.as_u16(),
        });
    }
    if !status.is_success() {
        return Err(NeteaseError::UpstreamStatus {
            status: status.as_u16(),
        });
    }
    Ok(resp)
}
