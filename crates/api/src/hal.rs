//! HAL (`application/hal+json`) response envelope.
//!
//! Resources are serialized with their own fields at the top level and a
//! `_links` map keyed by relation name:
//!
//! ```json
//! { "id": 1, "title": "...", "_links": { "self": { "href": "/api/selfInterviews/1" } } }
//! ```
//!
//! Collections place their items under `_embedded.<rel>`.

use std::collections::BTreeMap;

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// Media type for HAL documents.
pub const HAL_JSON: &str = "application/hal+json";

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

/// A resource plus its `_links`.
#[derive(Debug, Serialize)]
pub struct HalResource<T: Serialize> {
    #[serde(flatten)]
    pub resource: T,
    #[serde(rename = "_links")]
    pub links: BTreeMap<&'static str, Link>,
}

impl<T: Serialize> HalResource<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            links: BTreeMap::new(),
        }
    }

    /// Add (or replace) the link for `rel`.
    pub fn with_link(mut self, rel: &'static str, href: impl Into<String>) -> Self {
        self.links.insert(rel, Link { href: href.into() });
        self
    }
}

/// A collection of resources embedded under a single relation name.
#[derive(Debug, Serialize)]
pub struct HalCollection<T: Serialize> {
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<&'static str, Vec<HalResource<T>>>,
    #[serde(rename = "_links")]
    pub links: BTreeMap<&'static str, Link>,
}

impl<T: Serialize> HalCollection<T> {
    pub fn new(rel: &'static str, items: Vec<HalResource<T>>, self_href: impl Into<String>) -> Self {
        let mut embedded = BTreeMap::new();
        embedded.insert(rel, items);
        let mut links = BTreeMap::new();
        links.insert(
            "self",
            Link {
                href: self_href.into(),
            },
        );
        Self { embedded, links }
    }
}

/// Response wrapper that serializes `T` as JSON with the HAL content type.
#[derive(Debug)]
pub struct Hal<T>(pub T);

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (
                [(CONTENT_TYPE, HeaderValue::from_static(HAL_JSON))],
                bytes,
            )
                .into_response(),
            Err(err) => AppError::InternalError(format!("HAL serialization failed: {err}"))
                .into_response(),
        }
    }
}
