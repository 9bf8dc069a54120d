use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::settings::{AttachmentFetcher, FetchError};

/// Discord drops an interaction that isn't answered within 3 s, and the
/// download happens before the first response. Leave headroom for parsing
/// and the reply round trip.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(2500);

/// Downloads Discord attachments over plain HTTPS.
pub struct HttpAttachmentFetcher {
    client: Client,
}

impl HttpAttachmentFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("PandaBot/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl AttachmentFetcher for HttpAttachmentFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::time::Instant;

    #[tokio::test]
    async fn silent_server_times_out_as_transport_error() {
        // Bound but never accepted: the connection completes and no response ever comes.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/config.toml", listener.local_addr().unwrap());

        let fetcher = HttpAttachmentFetcher::with_timeout(Duration::from_millis(200)).unwrap();
        let started = Instant::now();
        let result = fetcher.fetch(&url).await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
        assert!(started.elapsed() < Duration::from_secs(2));
        drop(listener);
    }

    #[test]
    fn default_timeout_fits_in_interaction_window() {
        assert!(FETCH_TIMEOUT < Duration::from_secs(3));
    }
}
