pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod oauth;
pub mod paging;
pub mod rest;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use client::{Facebook, ME};
pub use config::FacebookConfig;
pub use error::{FacebookError, Result};

// REST client
pub use rest::GraphHttpClient;

// OAuth
pub use oauth::{AccessGrant, OAuthClient};

// Paging
pub use paging::{PageDirection, PagedList, PagingParameters};

// Core enums
pub use types::{ImageType, PostType, PrivacyType, StatusType};

// Posts
pub use types::{
    CheckinPost, FacebookLink, LinkPost, PhotoPost, Post, PostAction, PostContent, PostProperty,
    Privacy, ReferenceList, Shares, VideoPost,
};

// Attachments + tags
pub use types::{
    AttachmentImage, AttachmentList, AttachmentMedia, AttachmentTarget, MessageTag,
    StoryAttachment, TagMap,
};

// Places
pub use types::{Location, Place, PlaceTag};

// Users + friends
pub use types::{
    CoverPhoto, FamilyMember, Permission, Reference, UserIdForApp, UserProfile,
};
