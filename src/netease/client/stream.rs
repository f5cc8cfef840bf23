use crate::error::NeteaseError;
use bytes::Bytes;
use futures_util::stream::{BoxStream, Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// 上游音频的只读字节流
///
/// 每个 chunk 到达即交给调用方，不在内存中累积。drop 时上游响应随之释放，
/// 连接被关闭而不是继续读完。
pub struct AudioStream {
    track_id: i64,
    content_length: Option<u64>,
    inner: BoxStream<'static, Result<Bytes, reqwest::Error>>,
    forwarded: u64,
    finished: bool,
}

impl AudioStream {
    pub(super) fn new(track_id: i64, resp: reqwest::Response) -> Self {
        Self::from_parts(track_id, resp.content_length(), resp.bytes_stream().boxed())
    }

    pub(super) fn from_parts(
        track_id: i64,
        content_length: Option<u64>,
        inner: BoxStream<'static, Result<Bytes, reqwest::Error>>,
    ) -> Self {
        Self {
            track_id,
            content_length,
            inner,
            forwarded: 0,
            finished: false,
        }
    }

    pub fn track_id(&self) -> i64 {
        self.track_id
    }

    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// 已转发给调用方的字节数
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }
}

impl Stream for AudioStream {
    type Item = Result<Bytes, NeteaseError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.finished {
            return Poll::Ready(None);
        }
        match self.inner.poll_next_unpin(cx) {
            Poll::Ready(Some(Ok(chunk))) => {
                self.forwarded += chunk.len() as u64;
                Poll::Ready(Some(Ok(chunk)))
            }
            Poll::Ready(Some(Err(e))) => {
                self.finished = true;
                tracing::warn!(
                    track_id = self.track_id,
                    forwarded = self.forwarded,
                    err = %e,
                    "音频传输中断"
                );
                Poll::Ready(Some(Err(NeteaseError::UpstreamUnavailable(e))))
            }
            Poll::Ready(None) => {
                self.finished = true;
                tracing::debug!(
                    track_id = self.track_id,
                    forwarded = self.forwarded,
                    "音频转发完成"
                );
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl Drop for AudioStream {
    fn drop(&mut self) {
        if !self.finished {
            tracing::info!(
                track_id = self.track_id,
                forwarded = self.forwarded,
                "调用方提前断开，关闭上游连接"
            );
        }
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream")
            .field("track_id", &self.track_id)
            .field("content_length", &self.content_length)
            .field("forwarded", &self.forwarded)
            .field("finished", &self.finished)
            .finish()
    }
}
