use serde::{Deserialize, Serialize};

/// Discriminator for the concrete shape of a feed post.
///
/// `Post` is the generic fallback: any record whose `type` field is missing
/// or not one of the known tags decodes as a plain post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Status,
    Link,
    Photo,
    Video,
    Checkin,
    #[default]
    Post,
}

impl PostType {
    /// Resolve a raw `type` tag, case-insensitively. Unrecognized tags fall
    /// back to the generic `Post` variant so newer API subtypes keep
    /// decoding instead of failing the page.
    pub fn resolve(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "status" => PostType::Status,
            "link" => PostType::Link,
            "photo" => PostType::Photo,
            "video" => PostType::Video,
            "checkin" => PostType::Checkin,
            _ => PostType::Post,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Status => "status",
            PostType::Link => "link",
            PostType::Photo => "photo",
            PostType::Video => "video",
            PostType::Checkin => "checkin",
            PostType::Post => "post",
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a status-type story entered the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    MobileStatusUpdate,
    CreatedNote,
    AddedPhotos,
    AddedVideo,
    SharedStory,
    CreatedGroup,
    CreatedEvent,
    WallPost,
    AppCreatedStory,
    PublishedStory,
    TaggedInPhoto,
    ApprovedFriend,
    #[serde(other)]
    Unknown,
}

/// Audience selector on a post's privacy setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrivacyType {
    Everyone,
    AllFriends,
    FriendsOfFriends,
    Custom,
    #[serde(rename = "SELF")]
    OnlyMe,
    #[serde(other)]
    Unknown,
}

/// Size variant of a profile image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Small,
    Normal,
    Large,
    Square,
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageType::Small => write!(f, "small"),
            ImageType::Normal => write!(f, "normal"),
            ImageType::Large => write!(f, "large"),
            ImageType::Square => write!(f, "square"),
        }
    }
}
