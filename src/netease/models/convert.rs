use crate::domain::model::{Album, Artist, Track};
use crate::netease::GatewayConfig;
use serde_json::Value;

use super::dto::{AlbumInfo, ArtistInfo, SearchResp, SongInfo};

pub fn to_tracks_from_search(resp: SearchResp, cfg: &GatewayConfig) -> Vec<Track> {
    let Some(result) = resp.result else {
        return vec![];
    };
    to_tracks(result.songs, cfg)
}

pub fn to_tracks_from_toplist(items: Vec<Value>, cfg: &GatewayConfig) -> Vec<Track> {
    to_tracks(items, cfg)
}

/// 单条解析失败只跳过该条
fn to_tracks(items: Vec<Value>, cfg: &GatewayConfig) -> Vec<Track> {
    let songs = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<SongInfo>(item) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::debug!(err = %e, "跳过无法解析的歌曲条目");
                None
            }
        })
        .collect();
    to_playable_tracks(songs, cfg)
}

/// 过滤付费歌曲并注入播放地址
pub fn to_playable_tracks(songs: Vec<SongInfo>, cfg: &GatewayConfig) -> Vec<Track> {
    songs
        .into_iter()
        .map(|s| to_track(s, cfg))
        .filter(|t| !t.is_paid_only())
        .collect()
}

fn to_track(s: SongInfo, cfg: &GatewayConfig) -> Track {
    let artists = if !s.ar.is_empty() { s.ar } else { s.artists };
    Track {
        id: s.id,
        music_url: cfg.playback_url(s.id),
        name: s.name.unwrap_or_default(),
        artists: artists.into_iter().map(to_artist).collect(),
        album: s.al.or(s.album).map(to_album).unwrap_or_default(),
        duration: s.dt.or(s.duration).unwrap_or(0),
        fee: s.fee,
        copyright_id: s.copyright_id.unwrap_or(0),
        status: s.status.unwrap_or(0),
    }
}

fn to_artist(a: ArtistInfo) -> Artist {
    Artist {
        id: a.id,
        name: a.name.unwrap_or_default(),
    }
}

fn to_album(a: AlbumInfo) -> Album {
    Album {
        id: a.id,
        name: a.name.unwrap_or_default(),
        pic_url: a.pic_url,
    }
}
