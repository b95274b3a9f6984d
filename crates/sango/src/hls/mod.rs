//! HLS playlist interpretation.
//!
//! A master playlist names variant and alternate-rendition playlists; each
//! of those lists the actual media segments for one rendition. The master
//! pass collects stream references, then the variant pass turns each
//! referenced playlist into [`Segment`] entries. A master that references
//! nothing is a single-rendition playlist and is scanned directly.

mod master;
mod variant;

pub use master::StreamReference;

use crate::{
    error::SangoResult, segment::Segment, util::http::HttpClient, SegmentSource,
};
use variant::VariantContext;

pub struct HlsPlaylistSource {
    client: HttpClient,
    playlist_url: String,
}

impl HlsPlaylistSource {
    pub fn new(client: HttpClient, playlist_url: impl Into<String>) -> Self {
        Self {
            client,
            playlist_url: playlist_url.into(),
        }
    }

    async fn scan_variant(
        &self,
        stream_name: &str,
        stream_url: &str,
        segments: &mut Vec<Segment>,
    ) -> SangoResult<()> {
        let playlist = self.client.fetch_text(stream_url).await?;
        let context = VariantContext {
            playlist_url: &self.playlist_url,
            stream_name,
            stream_url,
        };
        segments.extend(variant::parse_variant(&context, &playlist)?);
        Ok(())
    }
}

impl SegmentSource for HlsPlaylistSource {
    async fn scan(&self) -> SangoResult<Vec<Segment>> {
        let playlist = self.client.fetch_text(&self.playlist_url).await?;
        let streams = master::parse_master(&self.playlist_url, &playlist)?;
        tracing::debug!("master playlist references {} streams", streams.len());

        let mut segments = Vec::new();
        if streams.is_empty() {
            // Single-rendition playlist: the master URL is the sole variant.
            self.scan_variant("", &self.playlist_url, &mut segments)
                .await?;
        } else {
            for stream in &streams {
                self.scan_variant(&stream.name, &stream.url, &mut segments)
                    .await?;
            }
        }

        Ok(segments)
    }
}
