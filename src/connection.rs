//! Decoding of connection-list envelopes into typed pages.
//!
//! A list endpoint answers with `{"data": [...], "paging": {...}}` where the
//! records in `data` are heterogeneous post fragments discriminated by their
//! `type` field. This module resolves each record to its concrete [`Post`]
//! variant and assembles the page together with the cursors parsed by
//! [`PagingParameters`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{FacebookError, Result};
use crate::paging::{PageDirection, PagedList, PagingParameters};
use crate::types::{Post, PostType};

/// Decode a feed-style envelope into a page of posts.
///
/// `type_hint` overrides per-record tag resolution unconditionally; pass it
/// for connections whose endpoint already implies the type (`/statuses`,
/// `/links`). One record failing to decode fails the whole page, the API
/// guarantees uniform shape per variant so a mismatch is a genuine schema
/// problem worth surfacing instead of silently dropping data.
pub fn decode_post_list(envelope: &Value, type_hint: Option<PostType>) -> Result<PagedList<Post>> {
    let data = data_array(envelope)?;
    let mut items = Vec::with_capacity(data.len());
    for record in data {
        items.push(decode_post(record, type_hint)?);
    }
    attach_paging(envelope, items)
}

/// Decode a homogeneous connection envelope (friends, references, profiles).
pub fn decode_connection_list<T: DeserializeOwned>(envelope: &Value) -> Result<PagedList<T>> {
    let data = data_array(envelope)?;
    let mut items = Vec::with_capacity(data.len());
    for record in data {
        items.push(serde_json::from_value(record.clone())?);
    }
    attach_paging(envelope, items)
}

/// Decode a single raw record into its post variant.
pub fn decode_post(record: &Value, type_hint: Option<PostType>) -> Result<Post> {
    let object = record.as_object().ok_or_else(|| {
        FacebookError::Structural("post record is not a JSON object".to_string())
    })?;
    let post_type = type_hint.unwrap_or_else(|| resolve_post_type(object));
    let augmented = augment_record(object, post_type);
    decode_variant(post_type, augmented).map_err(|source| FacebookError::VariantDecode {
        post_type,
        record: Box::new(record.clone()),
        source,
    })
}

fn decode_variant(post_type: PostType, augmented: Value) -> serde_json::Result<Post> {
    Ok(match post_type {
        PostType::Status => Post::Status(serde_json::from_value(augmented)?),
        PostType::Link => Post::Link(serde_json::from_value(augmented)?),
        PostType::Photo => Post::Photo(serde_json::from_value(augmented)?),
        PostType::Video => Post::Video(serde_json::from_value(augmented)?),
        PostType::Checkin => Post::Checkin(serde_json::from_value(augmented)?),
        PostType::Post => Post::Generic(serde_json::from_value(augmented)?),
    })
}

fn resolve_post_type(object: &Map<String, Value>) -> PostType {
    match object.get("type").and_then(Value::as_str) {
        Some(tag) => PostType::resolve(tag),
        None => PostType::Post,
    }
}

/// Build the augmented record handed to structural decode: the resolved tag
/// written back to `type`, plus the synthetic `has_likes`/`has_comments`
/// flags. The input record is never mutated.
fn augment_record(object: &Map<String, Value>, post_type: PostType) -> Value {
    let mut augmented = object.clone();
    augmented.insert(
        "type".to_string(),
        Value::String(post_type.as_str().to_string()),
    );
    augmented.insert(
        "has_likes".to_string(),
        Value::Bool(contains_content(object, "likes")),
    );
    augmented.insert(
        "has_comments".to_string(),
        Value::Bool(contains_content(object, "comments")),
    );
    Value::Object(augmented)
}

/// The API always sends an empty `likes`/`comments` envelope even with zero
/// entries, so key presence is not sufficient; the flag is set only when the
/// nested `data` array holds at least one populated entry.
fn contains_content(object: &Map<String, Value>, key: &str) -> bool {
    object
        .get(key)
        .and_then(|node| node.get("data"))
        .and_then(Value::as_array)
        .is_some_and(|entries| {
            entries
                .iter()
                .any(|entry| entry.as_object().is_some_and(|fields| !fields.is_empty()))
        })
}

fn attach_paging<T>(envelope: &Value, items: Vec<T>) -> Result<PagedList<T>> {
    let previous_page = PagingParameters::from_envelope(envelope, PageDirection::Previous)?;
    let next_page = PagingParameters::from_envelope(envelope, PageDirection::Next)?;
    Ok(PagedList::new(items, previous_page, next_page))
}

fn data_array(envelope: &Value) -> Result<&Vec<Value>> {
    envelope
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| FacebookError::Structural("envelope has no data array".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_known_tag_case_insensitive() {
        let object = json!({"type": "STATUS"});
        assert_eq!(
            resolve_post_type(object.as_object().unwrap()),
            PostType::Status
        );
    }

    #[test]
    fn test_resolve_unknown_tag_falls_back() {
        let object = json!({"type": "reel"});
        assert_eq!(resolve_post_type(object.as_object().unwrap()), PostType::Post);
    }

    #[test]
    fn test_resolve_missing_tag_falls_back() {
        let object = json!({"id": "1"});
        assert_eq!(resolve_post_type(object.as_object().unwrap()), PostType::Post);
    }

    #[test]
    fn test_hint_overrides_record_tag() {
        let record = json!({"id": "1", "type": "photo"});
        let post = decode_post(&record, Some(PostType::Link)).unwrap();
        assert!(matches!(post, Post::Link(_)));
    }

    #[test]
    fn test_contains_content_empty_shell() {
        let object = json!({"likes": {"data": []}});
        assert!(!contains_content(object.as_object().unwrap(), "likes"));
    }

    #[test]
    fn test_contains_content_populated() {
        let object = json!({"likes": {"data": [{"id": "1"}]}});
        assert!(contains_content(object.as_object().unwrap(), "likes"));
    }

    #[test]
    fn test_contains_content_missing_key() {
        let object = json!({"id": "1"});
        assert!(!contains_content(object.as_object().unwrap(), "likes"));
    }

    #[test]
    fn test_contains_content_empty_entry_objects() {
        let object = json!({"comments": {"data": [{}, {}]}});
        assert!(!contains_content(object.as_object().unwrap(), "comments"));
    }

    #[test]
    fn test_augment_does_not_mutate_input() {
        let record = json!({"id": "1", "likes": {"data": [{"id": "2"}]}});
        let object = record.as_object().unwrap();
        let augmented = augment_record(object, PostType::Status);
        assert_eq!(augmented["has_likes"], json!(true));
        assert_eq!(augmented["type"], json!("status"));
        // Input untouched.
        assert!(object.get("has_likes").is_none());
        assert!(object.get("type").is_none());
    }
}
