//! Reassembles a DASH rendition into one continuous byte stream.
//!
//! A producer task writes the decoded init segment and then every media
//! segment, fetched one after the other, into a bounded pipe. The reader
//! side is a plain [`AsyncRead`]. A failed segment is delivered to the reader
//! as an error after the bytes that preceded it; dropping the reader aborts
//! the producer together with whatever request it has in flight.

use std::{
    io,
    pin::Pin,
    task::{Context, Poll},
};

use base64::{Engine, engine::general_purpose::STANDARD};
use bytes::Bytes;
use futures::{StreamExt, stream::BoxStream};
use tokio::{io::AsyncRead, io::ReadBuf, task::AbortHandle};
use tokio_util::io::StreamReader;
use tracing::{debug, trace};

use super::{DashSegment, DashStream};
use crate::common::{Result, VimeoError};

/// Chunks buffered between producer and reader before the producer waits.
const PIPE_DEPTH: usize = 4;

type Chunk = io::Result<Bytes>;

/// Sequential reader over init segment + media segments.
///
/// Read errors wrap a [`VimeoError`], see [`VimeoError::from_io`]. Bytes read
/// before an error are valid; the stream is merely incomplete.
pub struct DashStreamReader {
    inner: StreamReader<BoxStream<'static, Chunk>, Bytes>,
    content_length: u64,
    producer: AbortHandle,
}

impl DashStreamReader {
    /// Declared total size: init segment plus the sizes the manifest lists.
    ///
    /// Advisory only, the actual transfer is not checked against it.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }
}

impl AsyncRead for DashStreamReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}

impl Drop for DashStreamReader {
    fn drop(&mut self) {
        self.producer.abort();
    }
}

impl DashStream {
    pub fn decode_init_segment(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.init_segment.as_bytes())?)
    }

    /// Declared size of the reassembled stream, saturating at `u64::MAX`.
    pub fn content_length(&self) -> Result<u64> {
        let init = self.decode_init_segment()?;
        Ok(self.declared_length(&init))
    }

    fn declared_length(&self, init: &[u8]) -> u64 {
        self.segments
            .iter()
            .fold(init.len() as u64, |total, s| total.saturating_add(s.size))
    }

    /// Starts streaming this rendition. Must be called within a Tokio runtime.
    ///
    /// A malformed init segment fails here, before anything is spawned.
    pub fn open(&self, client: &reqwest::Client) -> Result<DashStreamReader> {
        let init = Bytes::from(self.decode_init_segment()?);
        let content_length = self.declared_length(&init);

        let (tx, rx) = flume::bounded::<Chunk>(PIPE_DEPTH);

        let producer = tokio::spawn(produce(
            client.clone(),
            self.url.clone(),
            self.segments.clone(),
            init,
            tx,
        ));

        debug!(
            "DASH: opened stream {} ({} segments, {} bytes declared)",
            self.id,
            self.segments.len(),
            content_length
        );

        Ok(DashStreamReader {
            inner: StreamReader::new(rx.into_stream().boxed()),
            content_length,
            producer: producer.abort_handle(),
        })
    }
}

async fn produce(
    client: reqwest::Client,
    stream_url: String,
    segments: Vec<DashSegment>,
    init: Bytes,
    tx: flume::Sender<Chunk>,
) {
    if !init.is_empty() && tx.send_async(Ok(init)).await.is_err() {
        return;
    }

    for (index, segment) in segments.iter().enumerate() {
        let url = format!("{}{}", stream_url, segment.url);
        trace!("DASH: fetching segment {} from {}", index, url);

        match copy_segment(&client, &url, &tx).await {
            Ok(true) => {}
            // Reader is gone.
            Ok(false) => return,
            Err(e) => {
                debug!("DASH: segment {} failed: {}", index, e);
                let _ = tx.send_async(Err(e.into())).await;
                return;
            }
        }
    }
    // Dropping `tx` closes the pipe and ends the stream.
}

/// Copies one segment body into the pipe. `Ok(false)` when the reader hung up.
async fn copy_segment(
    client: &reqwest::Client,
    url: &str,
    tx: &flume::Sender<Chunk>,
) -> Result<bool> {
    let resp = client.get(url).send().await?;
    if resp.status().as_u16() >= 400 {
        return Err(VimeoError::UnexpectedStatus(resp.status().as_u16()));
    }

    let mut body = resp.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        if tx.send_async(Ok(chunk)).await.is_err() {
            return Ok(false);
        }
    }
    Ok(true)
}
