//! Async client for a paginated event feed.
//!
//! The feed serves one event per page and paginates through hypermedia: each
//! page embeds the route of the next one under `links.next`, and the last
//! page simply omits it. [`EventClient::fetch_all`] walks that chain lazily,
//! yielding each page as it arrives, with single-page lookups
//! ([`EventClient::fetch_latest`], [`EventClient::fetch_by_id`]) and an
//! acknowledgements sub-lookup alongside.
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use notify_client::EventClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EventClient::new("https://api.example.com");
//!
//! let mut pages = client.fetch_all();
//! while let Some(page) = pages.next().await.transpose()? {
//!     println!("event {} at {}", page.event.id, page.event.created);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod history;
mod transport;
mod types;

pub use {
    client::EventClient,
    error::{FetchError, FetchErrorKind, TransportError, TransportErrorKind},
    history::History,
    transport::{HttpTransport, Transport},
    types::{Acknowledgement, Event, EventResponse, Links},
};
