use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SearchResp {
    pub result: Option<SearchResult>,
}

/// `songs` 逐条解析，单条异常不影响其余结果
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub songs: Vec<Value>,
}

/// 搜索接口与榜单页面共用的歌曲结构（字段名在两处并不完全一致）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInfo {
    pub id: i64,
    pub name: Option<String>,
    #[serde(default)]
    pub ar: Vec<ArtistInfo>,
    #[serde(default)]
    pub artists: Vec<ArtistInfo>,
    pub al: Option<AlbumInfo>,
    pub album: Option<AlbumInfo>,
    pub dt: Option<i64>,
    pub duration: Option<i64>,
    pub fee: Option<i64>,
    pub copyright_id: Option<i64>,
    pub status: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistInfo {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInfo {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub pic_url: Option<String>,
}
