use crate::{
    dash::DashManifestSource,
    error::{SangoError, SangoResult},
    hls::HlsPlaylistSource,
    segment::Segment,
    util::http::HttpClient,
    SegmentSource,
};

/// Routes a manifest URL to the decoder for its dialect.
///
/// The decision is URL-based only: a URL mentioning `m3u8` goes to the HLS
/// decoder, one mentioning `mpd` to the DASH decoder, anything else is
/// unsupported. No content sniffing is performed.
pub struct SegmentScanner {
    client: HttpClient,
}

impl SegmentScanner {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn scan(&self, manifest_url: &str) -> SangoResult<Vec<Segment>> {
        if manifest_url.contains("m3u8") {
            HlsPlaylistSource::new(self.client.clone(), manifest_url)
                .scan()
                .await
        } else if manifest_url.contains("mpd") {
            DashManifestSource::new(self.client.clone(), manifest_url)
                .scan()
                .await
        } else {
            Err(SangoError::UnsupportedManifest(manifest_url.to_string()))
        }
    }
}

impl Default for SegmentScanner {
    fn default() -> Self {
        Self::new(HttpClient::default())
    }
}
