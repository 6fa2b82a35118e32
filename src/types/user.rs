use serde::{Deserialize, Serialize};

use super::post::Place;

/// A minimal id/name handle to another Graph object (user, page, app).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    pub name: Option<String>,
}

/// A user profile, as returned with the full profile field projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub locale: Option<String>,
    pub email: Option<String>,
    pub third_party_id: Option<String>,
    pub link: Option<String>,
    pub timezone: Option<f64>,
    pub updated_time: Option<String>,
    pub verified: Option<bool>,
    pub about: Option<String>,
    pub bio: Option<String>,
    pub birthday: Option<String>,
    pub location: Option<Reference>,
    pub hometown: Option<Reference>,
    pub interested_in: Option<Vec<String>>,
    pub religion: Option<String>,
    pub political: Option<String>,
    pub quotes: Option<String>,
    pub relationship_status: Option<String>,
    pub significant_other: Option<Reference>,
    pub website: Option<String>,
    pub cover: Option<CoverPhoto>,
}

/// One granted (or declined) permission for the current application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub permission: String,
    pub status: String,
}

/// A user's or page's cover photo.
///
/// Older API versions report the photo id under `cover_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverPhoto {
    #[serde(alias = "cover_id")]
    pub id: String,
    pub source: Option<String>,
    #[serde(default)]
    pub offset_x: i64,
    #[serde(default)]
    pub offset_y: i64,
}

/// A family member connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub name: Option<String>,
    pub relationship: Option<String>,
}

/// An app-scoped user id, as returned by the `ids_for_business` connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdForApp {
    pub id: String,
    pub app: Option<Reference>,
}

/// A place the user has been tagged at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceTag {
    pub id: String,
    pub created_time: Option<String>,
    pub place: Option<Place>,
}
