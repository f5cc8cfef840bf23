use serde::{Deserialize, Serialize};

/// 付费歌曲的 fee 标记，这类歌曲不会出现在结果中
pub const FEE_PAID_ONLY: i64 = 1;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pic_url: Option<String>,
}

/// 归一化后的歌曲；`music_url` 指回本服务的 `/playMusic`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: i64,
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    /// 毫秒
    pub duration: i64,
    #[serde(rename = "music_url")]
    pub music_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
    #[serde(default)]
    pub copyright_id: i64,
    #[serde(default)]
    pub status: i64,
}

impl Track {
    pub fn is_paid_only(&self) -> bool {
        self.fee == Some(FEE_PAID_ONLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_serializes_with_wire_names() {
        let t = Track {
            id: 186016,
            name: "晴天".to_owned(),
            artists: vec![Artist {
                id: 6452,
                name: "周杰伦".to_owned(),
            }],
            album: Album {
                id: 18905,
                name: "叶惠美".to_owned(),
                pic_url: Some("https://p1.music.126.net/x.jpg".to_owned()),
            },
            duration: 269_000,
            music_url: "http://127.0.0.1:9090/playMusic?id=186016".to_owned(),
            fee: Some(8),
            copyright_id: 7001,
            status: 0,
        };
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["music_url"], "http://127.0.0.1:9090/playMusic?id=186016");
        assert_eq!(v["album"]["picUrl"], "https://p1.music.126.net/x.jpg");
        assert_eq!(v["copyrightId"], 7001);
        assert_eq!(v["artists"][0]["name"], "周杰伦");
        assert!(!t.is_paid_only());
    }

    #[test]
    fn fee_one_is_paid_only() {
        let t = Track {
            fee: Some(FEE_PAID_ONLY),
            ..Track::default()
        };
        assert!(t.is_paid_only());
        assert!(!Track::default().is_paid_only());
    }
}
