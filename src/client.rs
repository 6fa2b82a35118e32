use crate::config::FacebookConfig;
use crate::error::{FacebookError, Result};
use crate::paging::{PagedList, PagingParameters};
use crate::rest::GraphHttpClient;
use crate::types::*;

/// Owner alias for the user the access token belongs to.
pub const ME: &str = "me";

/// Main client for the Graph API.
///
/// The zero-argument methods operate on the authorized user's own objects
/// with the default first-page window; the `*_user_*` variants take an
/// explicit owner id (or alias) and paging window.
#[derive(Debug, Clone)]
pub struct Facebook {
    /// Base URL for the Graph API.
    pub graph_api_url: String,
    /// HTTP client.
    pub http_client: GraphHttpClient,
}

impl Facebook {
    pub fn new(config: FacebookConfig) -> Self {
        let http_client = GraphHttpClient::new(&config.graph_api_url, config.access_token);
        Self {
            graph_api_url: config.graph_api_url,
            http_client,
        }
    }

    /// Client for the default API URL with the given access token.
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Self::new(FacebookConfig::with_access_token(access_token))
    }

    pub fn is_authorized(&self) -> bool {
        self.http_client.is_authorized()
    }

    fn require_authorization(&self) -> Result<()> {
        if self.http_client.is_authorized() {
            Ok(())
        } else {
            Err(FacebookError::MissingAuthorization)
        }
    }

    // --- Feed ---

    /// First page of the authorized user's wall.
    pub async fn get_feed(&self) -> Result<PagedList<Post>> {
        self.get_user_feed(ME, &PagingParameters::first_page()).await
    }

    /// A page of the given owner's wall.
    pub async fn get_user_feed(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.require_authorization()?;
        self.http_client.get_feed(owner, paging).await
    }

    /// First page of the authorized user's news feed.
    pub async fn get_home_feed(&self) -> Result<PagedList<Post>> {
        self.get_home_feed_page(&PagingParameters::first_page()).await
    }

    /// A page of the authorized user's news feed. The home connection only
    /// exists on the token owner.
    pub async fn get_home_feed_page(&self, paging: &PagingParameters) -> Result<PagedList<Post>> {
        self.require_authorization()?;
        self.http_client.get_home_feed(ME, paging).await
    }

    /// First page of posts authored by the authorized user.
    pub async fn get_posts(&self) -> Result<PagedList<Post>> {
        self.get_user_posts(ME, &PagingParameters::first_page()).await
    }

    pub async fn get_user_posts(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.require_authorization()?;
        self.http_client.get_posts(owner, paging).await
    }

    /// First page of the authorized user's status updates.
    pub async fn get_statuses(&self) -> Result<PagedList<Post>> {
        self.get_user_statuses(ME, &PagingParameters::first_page())
            .await
    }

    pub async fn get_user_statuses(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.require_authorization()?;
        self.http_client.get_statuses(owner, paging).await
    }

    /// First page of the authorized user's link posts.
    pub async fn get_links(&self) -> Result<PagedList<Post>> {
        self.get_user_links(ME, &PagingParameters::first_page()).await
    }

    pub async fn get_user_links(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.require_authorization()?;
        self.http_client.get_links(owner, paging).await
    }

    /// First page of posts the authorized user is tagged in.
    pub async fn get_tagged(&self) -> Result<PagedList<Post>> {
        self.get_user_tagged(ME, &PagingParameters::first_page()).await
    }

    pub async fn get_user_tagged(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.require_authorization()?;
        self.http_client.get_tagged(owner, paging).await
    }

    /// First page of the authorized user's check-in posts.
    pub async fn get_checkins(&self) -> Result<PagedList<Post>> {
        self.get_user_checkins(ME, &PagingParameters::first_page())
            .await
    }

    pub async fn get_user_checkins(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.require_authorization()?;
        self.http_client.get_checkins(owner, paging).await
    }

    /// A single post by id.
    pub async fn get_post(&self, post_id: &str) -> Result<Post> {
        self.require_authorization()?;
        self.http_client.get_post(post_id).await
    }

    /// Public posts matching a search query.
    pub async fn search_public_feed(
        &self,
        query: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.require_authorization()?;
        self.http_client.search_public_feed(query, paging).await
    }

    /// Publish a status update to the authorized user's wall.
    pub async fn update_status(&self, message: &str) -> Result<String> {
        self.post_message(ME, message).await
    }

    /// Publish a plain message to the given owner's wall.
    pub async fn post_message(&self, owner: &str, message: &str) -> Result<String> {
        self.require_authorization()?;
        self.http_client.post_message(owner, message).await
    }

    /// Share a link on the authorized user's wall.
    pub async fn share_link(&self, message: &str, link: &FacebookLink) -> Result<String> {
        self.post_link(ME, message, link).await
    }

    /// Publish a link to the given owner's wall.
    pub async fn post_link(
        &self,
        owner: &str,
        message: &str,
        link: &FacebookLink,
    ) -> Result<String> {
        self.require_authorization()?;
        self.http_client.post_link(owner, message, link).await
    }

    /// Delete a post.
    pub async fn delete_post(&self, post_id: &str) -> Result<()> {
        self.require_authorization()?;
        self.http_client.delete_post(post_id).await
    }

    /// Publish an Open Graph action (`namespace:action`) against an object
    /// on the authorized user's behalf, returning the action instance id.
    pub async fn publish_action(
        &self,
        namespace: &str,
        action: &str,
        object_type: &str,
        object_url: &str,
    ) -> Result<String> {
        self.require_authorization()?;
        self.http_client
            .publish_action(namespace, action, object_type, object_url)
            .await
    }

    // --- User ---

    /// The authorized user's full profile.
    pub async fn get_profile(&self) -> Result<UserProfile> {
        self.get_user_profile(ME).await
    }

    pub async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.require_authorization()?;
        self.http_client.get_user_profile(user_id).await
    }

    /// URL of a user's profile image. No request is made.
    pub fn user_profile_image_url(&self, user_id: &str, image_type: ImageType) -> String {
        self.http_client.user_profile_image_url(user_id, image_type)
    }

    /// Permissions the authorized user granted to the application.
    pub async fn get_permissions(&self) -> Result<PagedList<Permission>> {
        self.require_authorization()?;
        self.http_client.get_user_permissions(ME).await
    }

    /// The authorized user's app-scoped ids across the business's apps.
    pub async fn get_ids_for_business(&self) -> Result<PagedList<UserIdForApp>> {
        self.require_authorization()?;
        self.http_client.get_ids_for_business(ME).await
    }

    /// Places the authorized user was tagged at.
    pub async fn get_tagged_places(&self) -> Result<PagedList<PlaceTag>> {
        self.require_authorization()?;
        self.http_client
            .get_tagged_places(ME, &PagingParameters::first_page())
            .await
    }

    /// Public profiles matching a search query.
    pub async fn search_users(
        &self,
        query: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Reference>> {
        self.require_authorization()?;
        self.http_client.search_users(query, paging).await
    }

    // --- Friends ---

    /// First page of the authorized user's friends.
    pub async fn get_friends(&self) -> Result<PagedList<Reference>> {
        self.get_user_friends(ME, &PagingParameters::first_page())
            .await
    }

    pub async fn get_user_friends(
        &self,
        user_id: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Reference>> {
        self.require_authorization()?;
        self.http_client.get_friends(user_id, paging).await
    }

    /// First page of the authorized user's friend ids.
    pub async fn get_friend_ids(&self) -> Result<PagedList<String>> {
        self.require_authorization()?;
        self.http_client
            .get_friend_ids(ME, &PagingParameters::first_page())
            .await
    }

    /// Friends with the full profile projection.
    pub async fn get_friend_profiles(
        &self,
        paging: &PagingParameters,
    ) -> Result<PagedList<UserProfile>> {
        self.require_authorization()?;
        self.http_client.get_friend_profiles(ME, paging).await
    }

    /// The authorized user's family connections.
    pub async fn get_family(&self) -> Result<PagedList<FamilyMember>> {
        self.require_authorization()?;
        self.http_client.get_family(ME).await
    }

    /// The authorized user's friend lists.
    pub async fn get_friend_lists(&self) -> Result<PagedList<Reference>> {
        self.require_authorization()?;
        self.http_client.get_friend_lists(ME).await
    }

    /// A single friend list by id.
    pub async fn get_friend_list(&self, friend_list_id: &str) -> Result<Reference> {
        self.require_authorization()?;
        self.http_client.get_friend_list(friend_list_id).await
    }

    /// Profiles the authorized user follows.
    pub async fn get_subscribed_to(&self, paging: &PagingParameters) -> Result<PagedList<Reference>> {
        self.require_authorization()?;
        self.http_client.get_subscribed_to(ME, paging).await
    }

    /// Profiles following the authorized user.
    pub async fn get_subscribers(&self, paging: &PagingParameters) -> Result<PagedList<Reference>> {
        self.require_authorization()?;
        self.http_client.get_subscribers(ME, paging).await
    }
}
