//! Cursor handling for connection-list responses.
//!
//! A list envelope carries a `paging` node whose `previous`/`next` entries
//! are either full URLs or bare query strings. This module parses those
//! cursors into [`PagingParameters`] and renders parameters back into query
//! parameters for the follow-up request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FacebookError, Result};

/// Which edge of the current page a cursor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

impl PageDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            PageDirection::Previous => "previous",
            PageDirection::Next => "next",
        }
    }
}

impl std::fmt::Display for PageDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging window for a connection-list request.
///
/// Cursor-based fields (`after`/`before`/`paging_token`) and time/offset
/// fields are honored by the server whichever set is present; construction
/// deliberately does not enforce exclusivity between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingParameters {
    pub limit: Option<u32>,
    pub since: Option<u64>,
    pub until: Option<u64>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub paging_token: Option<String>,
    pub offset: Option<u32>,
}

impl PagingParameters {
    /// The default first-page window (25 items).
    pub fn first_page() -> Self {
        Self::with_limit(25)
    }

    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Read the cursor for `direction` out of a list envelope.
    ///
    /// Returns `Ok(None)` when the envelope has no `paging` node or the
    /// requested direction is absent; that signals "no further page", not an
    /// error.
    pub fn from_envelope(envelope: &Value, direction: PageDirection) -> Result<Option<Self>> {
        let Some(cursor) = envelope
            .get("paging")
            .and_then(|paging| paging.get(direction.as_str()))
        else {
            return Ok(None);
        };
        let cursor = cursor.as_str().ok_or_else(|| {
            FacebookError::Structural(format!("paging {direction} cursor is not a string"))
        })?;
        Self::parse_cursor(cursor).map(Some)
    }

    /// Parse a cursor (full URL or bare query string) into parameters.
    ///
    /// Parameters absent from the cursor stay unset; unrecognized parameters
    /// are ignored. A `limit=0` passes through unvalidated, the server
    /// answers such requests with an empty page.
    pub fn parse_cursor(cursor: &str) -> Result<Self> {
        let query = match cursor.split_once('?') {
            Some((_, query)) => query,
            None => cursor,
        };

        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "limit" => params.limit = Some(parse_numeric(&key, &value)?),
                "since" => params.since = Some(parse_numeric(&key, &value)?),
                "until" => params.until = Some(parse_numeric(&key, &value)?),
                "after" => params.after = Some(value.into_owned()),
                "before" => params.before = Some(value.into_owned()),
                "__paging_token" => params.paging_token = Some(value.into_owned()),
                "offset" => params.offset = Some(parse_numeric(&key, &value)?),
                _ => {}
            }
        }
        Ok(params)
    }

    /// Render the set fields as query parameters, in canonical order
    /// (limit, since, until, after, before, `__paging_token`, offset) so
    /// generated URLs are deterministic.
    pub fn to_query_parameters(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(since) = self.since {
            query.push(("since", since.to_string()));
        }
        if let Some(until) = self.until {
            query.push(("until", until.to_string()));
        }
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        if let Some(before) = &self.before {
            query.push(("before", before.clone()));
        }
        if let Some(token) = &self.paging_token {
            query.push(("__paging_token", token.clone()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        query
    }
}

fn parse_numeric<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        FacebookError::Structural(format!("invalid {key} value in paging cursor: {value}"))
    })
}

/// One page of a connection list.
///
/// A pure snapshot: items in server order plus the parameters needed to
/// fetch the neighboring pages. No connection is retained.
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub previous_page: Option<PagingParameters>,
    pub next_page: Option<PagingParameters>,
}

impl<T> PagedList<T> {
    pub fn new(
        items: Vec<T>,
        previous_page: Option<PagingParameters>,
        next_page: Option<PagingParameters>,
    ) -> Self {
        Self {
            items,
            previous_page,
            next_page,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
