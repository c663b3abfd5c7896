use futures_core::Stream;
use std::{
    future::Future,
    mem,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{client::EventClient, error::FetchError, transport::Transport, types::EventResponse};

type PageFuture<'a> = Pin<Box<dyn Future<Output = Result<EventResponse, FetchError>> + Send + 'a>>;

/// Lazy walk over the full event history, created by
/// [`EventClient::fetch_all`].
///
/// Each poll drives at most one request: the walk starts at `/latest`, and
/// every received page decides the next step through its `links.next` route.
/// Pages are yielded as they arrive, strictly one request in flight at a
/// time. The first failed page ends the walk with that error; an absent
/// `next` link ends it cleanly. Dropping the walk between emissions drops
/// the pending request and nothing further is issued.
pub struct History<'a, T> {
    client: &'a EventClient<T>,
    state: State<'a>,
}

enum State<'a> {
    /// The next route to request, not yet issued.
    Next(String),
    /// A request in flight.
    Fetching(PageFuture<'a>),
    /// Chain exhausted, or terminated by an error.
    Done,
}

impl<'a, T: Transport> History<'a, T> {
    pub(crate) fn new(client: &'a EventClient<T>) -> Self {
        Self {
            client,
            state: State::Next(crate::client::LATEST.to_owned()),
        }
    }
}

impl<'a, T: Transport> Stream for History<'a, T> {
    type Item = Result<EventResponse, FetchError>;

    fn poll_next(self: Pin<&mut Self>, ctx: &mut Context) -> Poll<Option<Self::Item>> {
        // Take the state out and put the successor back. `Done` is the
        // resting value, so an error arm can simply return and leave the
        // walk finished.
        let this = self.get_mut();

        loop {
            match mem::replace(&mut this.state, State::Done) {
                State::Done => return Poll::Ready(None),

                State::Next(route) => {
                    this.state = State::Fetching(Box::pin(this.client.fetch_route(route)));
                }

                State::Fetching(mut fut) => match fut.as_mut().poll(ctx) {
                    Poll::Pending => {
                        this.state = State::Fetching(fut);
                        return Poll::Pending;
                    }

                    Poll::Ready(Ok(page)) => {
                        if let Some(next) = &page.links.next {
                            this.state = State::Next(next.clone());
                        }
                        return Poll::Ready(Some(Ok(page)));
                    }

                    Poll::Ready(Err(err)) => return Poll::Ready(Some(Err(err))),
                },
            }
        }
    }
}
