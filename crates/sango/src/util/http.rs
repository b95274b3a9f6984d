use std::ops::Deref;

use bytes::Bytes;
use reqwest::Client;
use url::Url;

use crate::error::{SangoError, SangoResult};

/// Thin wrapper around [`reqwest::Client`]; the single network boundary the
/// decoders see. One call fetches one playlist or manifest body; a failure
/// propagates unchanged and aborts the enclosing scan. No retry, backoff or
/// timeout logic lives here.
#[derive(Clone, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch_bytes(&self, url: &str) -> SangoResult<Bytes> {
        let url = Url::parse(url)?;
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            if let Ok(body) = response.text().await {
                tracing::warn!("Error body: {body}");
            }
            return Err(SangoError::HttpError(status));
        }

        Ok(response.bytes().await?)
    }

    /// Fetches a playlist body as text. Playlists are treated as opaque
    /// lines; bytes that are not valid UTF-8 are replaced rather than
    /// rejected.
    pub async fn fetch_text(&self, url: &str) -> SangoResult<String> {
        let bytes = self.fetch_bytes(url).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
