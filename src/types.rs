//! Shapes returned by the event feed.
//!
//! One page of the feed is one [`EventResponse`]: the event payload plus the
//! hypermedia links the server attached to it. Pagination is entirely
//! server-driven; the client never computes routes beyond `/latest` and
//! `/event/{id}`, everything else comes out of a [`Links`] map.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// One page of the feed: an event and its links to related resources.
#[derive(Debug, Clone, Deserialize)]
pub struct EventResponse {
    pub event: Event,
    pub links: Links,
}

/// The event payload carried by a page.
///
/// Only the identifier and creation timestamp have fixed meaning; whatever
/// else the server attaches ends up in `fields` untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: u64,
    pub created: DateTime<Utc>,

    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

/// Link relations recognized by this client. Unknown relations are dropped
/// during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    /// Route to the next (older) page. Absent on the last page of the feed.
    pub next: Option<String>,

    /// Route to the acknowledgements recorded against this event.
    pub acknowledgements: Option<String>,
}

/// A single acknowledgement of an event. The feed does not constrain its
/// structure, so it is kept as raw JSON for the caller to interpret.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Acknowledgement(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_with_next_link() {
        let response: EventResponse = serde_json::from_str(
            r#"{
                "event": {
                    "id": 12,
                    "created": "2019-04-02T16:20:00Z",
                    "description": "water main break",
                    "severity": 2
                },
                "links": {
                    "next": "/event/11",
                    "acknowledgements": "/event/12/acks"
                }
            }"#,
        )
        .expect("Parses");

        assert_eq!(response.event.id, 12);
        assert_eq!(response.links.next.as_deref(), Some("/event/11"));
        assert_eq!(
            response.links.acknowledgements.as_deref(),
            Some("/event/12/acks")
        );
        assert_eq!(
            response.event.fields["description"],
            serde_json::json!("water main break")
        );
        assert_eq!(response.event.fields["severity"], serde_json::json!(2));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let response: EventResponse = serde_json::from_str(
            r#"{
                "event": { "id": 1, "created": "2019-01-01T00:00:00Z" },
                "links": {}
            }"#,
        )
        .expect("Parses");

        assert!(response.links.next.is_none());
        assert!(response.links.acknowledgements.is_none());
        assert!(response.event.fields.is_empty());
    }

    #[test]
    fn unknown_link_relations_are_ignored() {
        let links: Links = serde_json::from_str(
            r#"{ "next": "/event/3", "self": "/event/4", "prev": "/event/5" }"#,
        )
        .expect("Parses");

        assert_eq!(links.next.as_deref(), Some("/event/3"));
        assert!(links.acknowledgements.is_none());
    }
}
