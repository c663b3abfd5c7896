use std::{error::Error as StdError, fmt};

/// Failure raised by a [`Transport`](crate::Transport) while performing a
/// single GET.
///
/// Covers the three ways a page request can go wrong: the request itself
/// failed, the server answered with a non-success status, or the body did
/// not deserialize into the expected shape.
#[derive(Debug)]
pub struct TransportError {
    kind: Box<TransportErrorKind>,
}

impl TransportError {
    /// The request never produced a usable response (connect failure,
    /// broken body stream, timeout imposed by the host environment, ...).
    pub fn request<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            kind: Box::new(TransportErrorKind::Request(Box::new(err))),
        }
    }

    /// The server answered with a non-success HTTP status.
    pub fn status(code: u16) -> Self {
        Self {
            kind: Box::new(TransportErrorKind::Status(code)),
        }
    }

    /// The body arrived but was not the expected JSON shape.
    pub fn decode(err: serde_json::Error) -> Self {
        Self {
            kind: Box::new(TransportErrorKind::Decode(err)),
        }
    }

    pub fn kind(&self) -> &TransportErrorKind {
        &self.kind
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &*self.kind {
            TransportErrorKind::Request(err) => write!(f, "request failed: {}", err),
            TransportErrorKind::Status(code) => write!(f, "unexpected status {}", code),
            TransportErrorKind::Decode(err) => write!(f, "malformed body: {}", err),
        }
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.kind {
            TransportErrorKind::Request(err) => Some(err.as_ref()),
            TransportErrorKind::Status(_) => None,
            TransportErrorKind::Decode(err) => Some(err),
        }
    }
}

#[derive(Debug)]
pub enum TransportErrorKind {
    Request(Box<dyn StdError + Send + Sync>),
    Status(u16),
    Decode(serde_json::Error),
}

/// Error surfaced by [`EventClient`](crate::EventClient) lookups and by the
/// pagination walk. Carries the route that failed alongside the cause.
#[derive(Debug)]
pub struct FetchError {
    route: String,
    kind: Box<FetchErrorKind>,
}

impl FetchError {
    pub(crate) fn transport(route: impl Into<String>, err: TransportError) -> Self {
        Self {
            route: route.into(),
            kind: Box::new(FetchErrorKind::Transport(err)),
        }
    }

    pub(crate) fn missing_link(rel: &'static str) -> Self {
        Self {
            route: String::new(),
            kind: Box::new(FetchErrorKind::MissingLink(rel)),
        }
    }

    /// The relative route the failing request was issued against. Empty for
    /// a missing-link failure, where no request was ever issued.
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn kind(&self) -> &FetchErrorKind {
        &self.kind
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &*self.kind {
            FetchErrorKind::Transport(err) => write!(f, "fetching {}: {}", self.route, err),
            FetchErrorKind::MissingLink(rel) => {
                write!(f, "response carries no \"{}\" link", rel)
            }
        }
    }
}

impl StdError for FetchError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.kind {
            FetchErrorKind::Transport(err) => Some(err),
            FetchErrorKind::MissingLink(_) => None,
        }
    }
}

#[derive(Debug)]
pub enum FetchErrorKind {
    /// The transport failed on the named route. The original cause is
    /// preserved and reachable through `source()`.
    Transport(TransportError),
    /// A sub-resource lookup was asked of a response that does not carry
    /// the required link relation.
    MissingLink(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn transport_cause_is_reachable_through_source() {
        let decode_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = FetchError::transport("/latest", TransportError::decode(decode_err));

        assert_eq!(err.route(), "/latest");
        let source = err.source().expect("transport cause");
        assert!(source.downcast_ref::<TransportError>().is_some());
    }

    #[test]
    fn status_display_names_the_code() {
        let err = FetchError::transport("/event/7", TransportError::status(503));
        assert_eq!(err.to_string(), "fetching /event/7: unexpected status 503");
    }

    #[test]
    fn missing_link_names_the_relation() {
        let err = FetchError::missing_link("acknowledgements");
        assert!(err.to_string().contains("acknowledgements"));
        assert!(err.source().is_none());
    }
}
