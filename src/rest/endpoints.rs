use serde_json::Value;

use crate::connection::{decode_connection_list, decode_post, decode_post_list};
use crate::error::{FacebookError, Result};
use crate::paging::{PagedList, PagingParameters};
use crate::rest::GraphHttpClient;
use crate::types::*;

/// Field projection requested for feed reads. The API trims the default
/// response aggressively, so every field the post types model is asked for
/// explicitly; `likes.limit(1)`/`comments.limit(1)` are enough to drive the
/// engagement flags without pulling whole engagement lists.
const ALL_POST_FIELDS: &str = "id,type,from,to,message,message_tags,story,story_tags,picture,\
link,source,object_id,place,name,caption,description,icon,privacy,actions,properties,\
application,status_type,created_time,updated_time,is_hidden,subscribed,is_expired,with_tags,\
shares,attachments,likes.limit(1),comments.limit(1)";

/// Field projection for full user profile reads.
const USER_PROFILE_FIELDS: &str = "id,name,first_name,last_name,gender,locale,email,\
third_party_id,link,timezone,updated_time,verified,about,bio,birthday,location,hometown,\
interested_in,religion,political,quotes,relationship_status,significant_other,website,cover";

impl GraphHttpClient {
    // --- Feed ---

    /// GET /{owner}/feed - Everything on the owner's wall.
    pub async fn get_feed(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.fetch_post_connection(owner, "feed", paging, None, &[])
            .await
    }

    /// GET /{owner}/home - The owner's news feed.
    pub async fn get_home_feed(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.fetch_post_connection(owner, "home", paging, None, &[])
            .await
    }

    /// GET /{owner}/posts - Posts authored by the owner.
    pub async fn get_posts(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.fetch_post_connection(owner, "posts", paging, None, &[])
            .await
    }

    /// GET /{owner}/statuses - Status updates only.
    pub async fn get_statuses(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.fetch_post_connection(owner, "statuses", paging, Some(PostType::Status), &[])
            .await
    }

    /// GET /{owner}/links - Link posts only.
    pub async fn get_links(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.fetch_post_connection(owner, "links", paging, Some(PostType::Link), &[])
            .await
    }

    /// GET /{owner}/tagged - Posts the owner is tagged in.
    pub async fn get_tagged(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.fetch_post_connection(owner, "tagged", paging, None, &[])
            .await
    }

    /// GET /{owner}/posts?with=location - Posts carrying a place tag. Each
    /// record keeps its own `type`; a photo taken at a place stays a photo.
    pub async fn get_checkins(
        &self,
        owner: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        self.fetch_post_connection(
            owner,
            "posts",
            paging,
            None,
            &[("with", "location".to_string())],
        )
        .await
    }

    /// GET /{post_id} - A single post.
    pub async fn get_post(&self, post_id: &str) -> Result<Post> {
        let record = self
            .get_value(
                &format!("/{post_id}"),
                &[("fields", ALL_POST_FIELDS.to_string())],
            )
            .await?;
        decode_post(&record, None)
    }

    /// GET /search?type=post - Public posts matching a query.
    pub async fn search_public_feed(
        &self,
        query: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Post>> {
        let mut params = paging.to_query_parameters();
        params.push(("q", query.to_string()));
        params.push(("type", "post".to_string()));
        params.push(("fields", ALL_POST_FIELDS.to_string()));
        let envelope = self.get_value("/search", &params).await?;
        decode_post_list(&envelope, None)
    }

    /// POST /{owner}/feed - Publish a plain message, returning the post id.
    pub async fn post_message(&self, owner: &str, message: &str) -> Result<String> {
        let form = vec![("message", message.to_string())];
        let answer = self.post_form(&format!("/{owner}/feed"), &form).await?;
        extract_id(&answer)
    }

    /// POST /{owner}/feed - Publish a link with optional annotations.
    pub async fn post_link(
        &self,
        owner: &str,
        message: &str,
        link: &FacebookLink,
    ) -> Result<String> {
        let mut form = vec![
            ("message", message.to_string()),
            ("link", link.link.clone()),
        ];
        if let Some(name) = &link.name {
            form.push(("name", name.clone()));
        }
        if let Some(caption) = &link.caption {
            form.push(("caption", caption.clone()));
        }
        if let Some(description) = &link.description {
            form.push(("description", description.clone()));
        }
        let answer = self.post_form(&format!("/{owner}/feed"), &form).await?;
        extract_id(&answer)
    }

    /// DELETE /{post_id} - Remove a post.
    pub async fn delete_post(&self, post_id: &str) -> Result<()> {
        self.delete(&format!("/{post_id}")).await?;
        Ok(())
    }

    /// POST /me/{namespace}:{action} - Publish an Open Graph action against
    /// an object, returning the created action instance id.
    pub async fn publish_action(
        &self,
        namespace: &str,
        action: &str,
        object_type: &str,
        object_url: &str,
    ) -> Result<String> {
        let form = vec![(object_type, object_url.to_string())];
        let answer = self
            .post_form(&format!("/me/{namespace}:{action}"), &form)
            .await?;
        extract_id(&answer)
    }

    // --- User ---

    /// GET /{user_id} - Full profile with the complete field projection.
    pub async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.get(
            &format!("/{user_id}"),
            &[("fields", USER_PROFILE_FIELDS.to_string())],
        )
        .await
    }

    /// URL of the user's profile image at the given size. No request is made;
    /// the picture edge answers with an image redirect, not JSON.
    pub fn user_profile_image_url(&self, user_id: &str, image_type: ImageType) -> String {
        format!("{}/{user_id}/picture?type={image_type}", self.base_url())
    }

    /// GET /{user_id}/permissions - Permissions granted to the application.
    pub async fn get_user_permissions(&self, user_id: &str) -> Result<PagedList<Permission>> {
        let envelope = self
            .get_value(&format!("/{user_id}/permissions"), &[])
            .await?;
        decode_connection_list(&envelope)
    }

    /// GET /{user_id}/ids_for_business - The user's app-scoped ids.
    pub async fn get_ids_for_business(&self, user_id: &str) -> Result<PagedList<UserIdForApp>> {
        let envelope = self
            .get_value(&format!("/{user_id}/ids_for_business"), &[])
            .await?;
        decode_connection_list(&envelope)
    }

    /// GET /{user_id}/tagged_places - Places the user was tagged at.
    pub async fn get_tagged_places(
        &self,
        user_id: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<PlaceTag>> {
        self.fetch_connection(user_id, "tagged_places", paging).await
    }

    /// GET /search?type=user - Public profiles matching a query.
    pub async fn search_users(
        &self,
        query: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Reference>> {
        let mut params = paging.to_query_parameters();
        params.push(("q", query.to_string()));
        params.push(("type", "user".to_string()));
        let envelope = self.get_value("/search", &params).await?;
        decode_connection_list(&envelope)
    }

    // --- Friends ---

    /// GET /{user_id}/friends - Friends as id/name references.
    pub async fn get_friends(
        &self,
        user_id: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Reference>> {
        self.fetch_connection(user_id, "friends", paging).await
    }

    /// GET /{user_id}/friends?fields=id - Friend ids only.
    pub async fn get_friend_ids(
        &self,
        user_id: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<String>> {
        let mut params = paging.to_query_parameters();
        params.push(("fields", "id".to_string()));
        let envelope = self
            .get_value(&format!("/{user_id}/friends"), &params)
            .await?;
        let references: PagedList<Reference> = decode_connection_list(&envelope)?;
        Ok(PagedList::new(
            references.items.into_iter().map(|r| r.id).collect(),
            references.previous_page,
            references.next_page,
        ))
    }

    /// GET /{user_id}/friends with the full profile projection.
    pub async fn get_friend_profiles(
        &self,
        user_id: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<UserProfile>> {
        let mut params = paging.to_query_parameters();
        params.push(("fields", USER_PROFILE_FIELDS.to_string()));
        let envelope = self
            .get_value(&format!("/{user_id}/friends"), &params)
            .await?;
        decode_connection_list(&envelope)
    }

    /// GET /{user_id}/family - Family member connections.
    pub async fn get_family(&self, user_id: &str) -> Result<PagedList<FamilyMember>> {
        let envelope = self.get_value(&format!("/{user_id}/family"), &[]).await?;
        decode_connection_list(&envelope)
    }

    /// GET /{user_id}/friendlists - The user's friend lists.
    pub async fn get_friend_lists(&self, user_id: &str) -> Result<PagedList<Reference>> {
        let envelope = self
            .get_value(&format!("/{user_id}/friendlists"), &[])
            .await?;
        decode_connection_list(&envelope)
    }

    /// GET /{friend_list_id} - A single friend list by id.
    pub async fn get_friend_list(&self, friend_list_id: &str) -> Result<Reference> {
        self.get(&format!("/{friend_list_id}"), &[]).await
    }

    /// GET /{user_id}/subscribedto - Profiles the user follows.
    pub async fn get_subscribed_to(
        &self,
        user_id: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Reference>> {
        self.fetch_connection(user_id, "subscribedto", paging).await
    }

    /// GET /{user_id}/subscribers - Profiles following the user.
    pub async fn get_subscribers(
        &self,
        user_id: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<Reference>> {
        self.fetch_connection(user_id, "subscribers", paging).await
    }

    // --- Shared plumbing ---

    async fn fetch_post_connection(
        &self,
        owner: &str,
        connection: &str,
        paging: &PagingParameters,
        type_hint: Option<PostType>,
        extra: &[(&'static str, String)],
    ) -> Result<PagedList<Post>> {
        let mut params = paging.to_query_parameters();
        params.push(("fields", ALL_POST_FIELDS.to_string()));
        for (key, value) in extra {
            params.push((*key, value.clone()));
        }
        let envelope = self
            .get_value(&format!("/{owner}/{connection}"), &params)
            .await?;
        decode_post_list(&envelope, type_hint)
    }

    async fn fetch_connection<T: serde::de::DeserializeOwned>(
        &self,
        owner: &str,
        connection: &str,
        paging: &PagingParameters,
    ) -> Result<PagedList<T>> {
        let params = paging.to_query_parameters();
        let envelope = self
            .get_value(&format!("/{owner}/{connection}"), &params)
            .await?;
        decode_connection_list(&envelope)
    }
}

fn extract_id(answer: &Value) -> Result<String> {
    answer
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| FacebookError::Structural("publish answer carries no id".to_string()))
}
