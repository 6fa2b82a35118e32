use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::{PostType, PrivacyType, StatusType};
use super::user::Reference;

/// Fields shared by every post variant.
///
/// `id` is the only structurally required field; the Graph API omits any of
/// the others depending on the post's origin and the requested projection.
/// `has_likes`/`has_comments` are synthesized during decode, they are not
/// part of the raw wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostContent {
    pub id: String,
    #[serde(rename = "type", default)]
    pub post_type: PostType,
    pub from: Option<Reference>,
    pub to: Option<ReferenceList>,
    pub message: Option<String>,
    pub story: Option<String>,
    pub picture: Option<String>,
    pub name: Option<String>,
    pub caption: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub privacy: Option<Privacy>,
    pub actions: Option<Vec<PostAction>>,
    pub properties: Option<Vec<PostProperty>>,
    pub application: Option<Reference>,
    pub message_tags: Option<TagMap>,
    pub story_tags: Option<TagMap>,
    pub attachments: Option<AttachmentList>,
    pub subscribed: Option<bool>,
    pub is_expired: Option<bool>,
    pub status_type: Option<StatusType>,
    pub created_time: Option<String>,
    pub updated_time: Option<String>,
    pub is_hidden: Option<bool>,
    pub with_tags: Option<ReferenceList>,
    pub shares: Option<Shares>,
    #[serde(default)]
    pub has_likes: bool,
    #[serde(default)]
    pub has_comments: bool,
}

/// A shared link post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkPost {
    pub link: Option<String>,
    #[serde(flatten)]
    pub content: PostContent,
}

/// A photo post; `object_id` points at the underlying photo object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoPost {
    pub object_id: Option<String>,
    #[serde(flatten)]
    pub content: PostContent,
}

/// A video post; `source` is the playable video URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPost {
    pub source: Option<String>,
    pub object_id: Option<String>,
    #[serde(flatten)]
    pub content: PostContent,
}

/// A location check-in post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinPost {
    pub place: Option<Place>,
    #[serde(flatten)]
    pub content: PostContent,
}

/// A feed post, resolved to its concrete variant.
///
/// The variant is selected by the record's `type` tag (or a caller-supplied
/// hint); anything unrecognized lands in `Generic`, which still carries the
/// full common field set.
#[derive(Debug, Clone)]
pub enum Post {
    Status(PostContent),
    Link(LinkPost),
    Photo(PhotoPost),
    Video(VideoPost),
    Checkin(CheckinPost),
    Generic(PostContent),
}

impl Post {
    /// The common supertype fields, regardless of variant.
    pub fn content(&self) -> &PostContent {
        match self {
            Post::Status(content) | Post::Generic(content) => content,
            Post::Link(link) => &link.content,
            Post::Photo(photo) => &photo.content,
            Post::Video(video) => &video.content,
            Post::Checkin(checkin) => &checkin.content,
        }
    }

    pub fn id(&self) -> &str {
        &self.content().id
    }

    pub fn post_type(&self) -> PostType {
        self.content().post_type
    }
}

/// Privacy setting attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Privacy {
    pub value: PrivacyType,
    pub description: Option<String>,
    pub allow: Option<String>,
    pub deny: Option<String>,
}

/// An action link rendered alongside a post (e.g. "Comment", "Like").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAction {
    pub name: String,
    pub link: String,
}

/// A named property on a post (typically video metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostProperty {
    pub name: Option<String>,
    pub text: Option<String>,
}

/// A `{"data": [...]}` wrapper around a reference list (the `to` and
/// `with_tags` fields come wrapped this way).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceList {
    #[serde(default)]
    pub data: Vec<Reference>,
}

/// Share count envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shares {
    #[serde(default)]
    pub count: u64,
}

/// A profile tag embedded in a post's message or story text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTag {
    pub id: Option<String>,
    pub name: Option<String>,
    pub offset: Option<u32>,
    pub length: Option<u32>,
}

/// The `message_tags`/`story_tags` wire shape. Older API versions key the
/// entries by text offset; newer ones send a flat array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagMap {
    ByOffset(BTreeMap<String, Vec<MessageTag>>),
    Flat(Vec<MessageTag>),
}

impl TagMap {
    /// All tags regardless of wire shape.
    pub fn entries(&self) -> Vec<&MessageTag> {
        match self {
            TagMap::ByOffset(map) => map.values().flatten().collect(),
            TagMap::Flat(tags) => tags.iter().collect(),
        }
    }
}

/// A `{"data": [...]}` wrapper around a post's story attachments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachmentList {
    #[serde(default)]
    pub data: Vec<StoryAttachment>,
}

/// A rendered attachment on a post (shared media, link preview cards).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryAttachment {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub attachment_type: Option<String>,
    pub media: Option<AttachmentMedia>,
    pub target: Option<AttachmentTarget>,
}

/// Media rendered for an attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentMedia {
    pub image: Option<AttachmentImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentImage {
    pub src: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// The Graph object an attachment points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentTarget {
    pub id: Option<String>,
    pub url: Option<String>,
}

/// Link data for publishing a link post to a feed.
#[derive(Debug, Clone)]
pub struct FacebookLink {
    pub link: String,
    pub name: Option<String>,
    pub caption: Option<String>,
    pub description: Option<String>,
}

impl FacebookLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            name: None,
            caption: None,
            description: None,
        }
    }
}

/// A place a post was checked in at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: Option<String>,
    pub location: Option<Location>,
}

/// Street-level location data on a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
