use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    error::{FetchError, TransportError},
    history::History,
    transport::{HttpTransport, Transport},
    types::{Acknowledgement, EventResponse},
};

pub(crate) const LATEST: &str = "/latest";

/// Client for an event feed rooted at a fixed base endpoint.
///
/// The endpoint is set once at construction. All routes are relative to it:
/// the two the client constructs itself (`/latest`, `/event/{id}`) and
/// whatever the server hands back in a page's `links` map.
pub struct EventClient<T = HttpTransport> {
    endpoint: String,
    transport: T,
}

impl EventClient<HttpTransport> {
    /// Client talking real HTTP via reqwest.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_transport(endpoint, HttpTransport::new())
    }
}

impl<T: Transport> EventClient<T> {
    /// Client over a caller-supplied transport.
    pub fn with_transport(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the most recent page of the feed.
    pub async fn fetch_latest(&self) -> Result<EventResponse, FetchError> {
        self.get_route(LATEST).await
    }

    /// Fetch the page for one specific event.
    pub async fn fetch_by_id(&self, id: u64) -> Result<EventResponse, FetchError> {
        self.get_route(&format!("/event/{}", id)).await
    }

    /// Fetch the acknowledgements recorded against an already-fetched event.
    ///
    /// The response must carry an `acknowledgements` link; if it does not,
    /// this fails without issuing any request.
    pub async fn fetch_acknowledgements(
        &self,
        event: &EventResponse,
    ) -> Result<Vec<Acknowledgement>, FetchError> {
        let route = event
            .links
            .acknowledgements
            .as_deref()
            .ok_or_else(|| FetchError::missing_link("acknowledgements"))?;

        self.get_route(route).await
    }

    /// Walk the entire feed, newest first.
    ///
    /// Returns a lazy [`Stream`](futures_core::Stream) that fetches `/latest`
    /// and then follows each page's `next` link until a page carries none.
    /// Nothing is requested until the stream is first polled, and every call
    /// builds a fresh walk; in-flight requests are never shared between
    /// walks.
    pub fn fetch_all(&self) -> History<'_, T> {
        History::new(self)
    }

    pub(crate) async fn fetch_route(&self, route: String) -> Result<EventResponse, FetchError> {
        self.get_route(&route).await
    }

    async fn get_route<D>(&self, route: &str) -> Result<D, FetchError>
    where
        D: DeserializeOwned,
    {
        let url = format!("{}{}", self.endpoint, route);
        debug!("fetching {}", route);

        let body = self
            .transport
            .get(&url)
            .await
            .map_err(|err| FetchError::transport(route, err))?;

        serde_json::from_slice(&body)
            .map_err(|err| FetchError::transport(route, TransportError::decode(err)))
    }
}
