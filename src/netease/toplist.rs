//! 榜单页面中嵌入的歌曲 JSON 提取
//!
//! 榜单没有结构化接口，只能从 `/discover/toplist` 页面的
//! `<textarea id="song-list-pre-data">` 中取出 JSON 文本。页面结构随时可能变，
//! 所以定位逻辑放在 [`EmbeddedTrackList`] 之后，网关只依赖这个 trait。

use regex::Regex;
use std::borrow::Cow;
use std::fmt;

pub const DEFAULT_ELEMENT_ID: &str = "song-list-pre-data";

pub trait EmbeddedTrackList: Send + Sync + fmt::Debug {
    /// 返回嵌入元素的文本内容（已去实体、去首尾空白）；元素不存在时返回 `None`
    fn extract<'a>(&self, html: &'a str) -> Option<Cow<'a, str>>;
}

/// 按元素 id 查找 `<textarea>`
#[derive(Debug, Clone)]
pub struct TextareaTrackList {
    pattern: Regex,
}

impl TextareaTrackList {
    pub fn new(element_id: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r#"(?is)<textarea\b[^>]*\bid\s*=\s*["']{}["'][^>]*>(.*?)</textarea\s*>"#,
            regex::escape(element_id)
        ))?;
        Ok(Self { pattern })
    }
}

impl EmbeddedTrackList for TextareaTrackList {
    fn extract<'a>(&self, html: &'a str) -> Option<Cow<'a, str>> {
        let text = self.pattern.captures(html)?.get(1)?.as_str().trim();
        // textarea 是 RCDATA，内容里可能带有任意字符实体
        Some(html_escape::decode_html_entities(text))
    }
}
