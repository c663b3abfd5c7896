use async_trait::async_trait;
use bytes::Bytes;
use log::debug;

use crate::error::TransportError;

/// The HTTP seam of the client.
///
/// One method: GET a fully qualified URL and hand back the raw body. The
/// client does its own deserialization, so a transport never needs to know
/// about feed shapes. Swap in a scripted implementation to drive the client
/// in tests without a network.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Bytes, TransportError>;
}

/// reqwest-backed [`Transport`] used by [`EventClient::new`](crate::EventClient::new).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Bytes, TransportError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::status(status.as_u16()));
        }

        response.bytes().await.map_err(TransportError::request)
    }
}
