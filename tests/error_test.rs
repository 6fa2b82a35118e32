//! Integration tests for transport behavior against a mock Graph API server:
//! error-code mapping, the usage-threshold guard, authorization handling, and
//! the publish/delete round trips.

use fbgraph::{Facebook, FacebookConfig, FacebookError, OAuthClient, Post};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Facebook {
    Facebook::new(FacebookConfig {
        graph_api_url: server.uri(),
        access_token: Some("tok-123".to_string()),
    })
}

fn api_error(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json")
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_invalid_token_maps_to_invalid_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(api_error(
            401,
            r#"{"error":{"message":"Invalid OAuth access token.","type":"OAuthException","code":190}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).get_feed().await.unwrap_err();
    assert!(matches!(err, FacebookError::InvalidAuthorization(_)), "{err}");
}

#[tokio::test]
async fn test_expired_session_maps_to_expired_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(api_error(
            401,
            r#"{"error":{"message":"Session has expired.","type":"OAuthException","code":190,"error_subcode":463}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).get_profile().await.unwrap_err();
    assert!(matches!(err, FacebookError::ExpiredAuthorization(_)), "{err}");
}

#[tokio::test]
async fn test_revoked_session_maps_to_revoked_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(api_error(
            401,
            r#"{"error":{"message":"The session has been invalidated.","type":"OAuthException","code":190,"error_subcode":460}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).get_friends().await.unwrap_err();
    assert!(matches!(err, FacebookError::RevokedAuthorization(_)), "{err}");
}

#[tokio::test]
async fn test_rate_limit_code_maps_to_rate_limit_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(api_error(
            403,
            r#"{"error":{"message":"Calls to this api have exceeded the rate limit.","code":613}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).get_posts().await.unwrap_err();
    assert!(matches!(err, FacebookError::RateLimitExceeded(_)), "{err}");
}

#[tokio::test]
async fn test_unknown_alias_maps_to_resource_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(api_error(
            404,
            r#"{"error":{"message":"(#803) Some of the aliases you requested do not exist","code":803}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_user_profile("nobody-here")
        .await
        .unwrap_err();
    assert!(matches!(err, FacebookError::ResourceNotFound(_)), "{err}");
}

#[tokio::test]
async fn test_duplicate_status_maps_to_duplicate_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(api_error(
            400,
            r#"{"error":{"message":"(#506) Duplicate status message","code":506}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .update_status("same thing twice")
        .await
        .unwrap_err();
    assert!(matches!(err, FacebookError::DuplicatePost(_)), "{err}");
}

#[tokio::test]
async fn test_unparseable_error_body_keeps_status_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_feed().await.unwrap_err();
    match err {
        FacebookError::Http { status, message } => {
            assert_eq!(status, 502);
            assert!(message.contains("bad gateway"));
        }
        other => panic!("expected transport error, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Usage threshold
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_usage_header_at_threshold_fails_even_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "x-app-usage",
                    r#"{"call_count":81,"total_time":12,"total_cputime":4}"#,
                )
                .set_body_raw(r#"{"data":[]}"#.to_string(), "application/json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).get_feed().await.unwrap_err();
    assert!(matches!(err, FacebookError::UsageThresholdReached), "{err}");
}

#[tokio::test]
async fn test_usage_header_below_threshold_is_harmless() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "x-app-usage",
                    r#"{"call_count":10,"total_time":12,"total_cputime":4}"#,
                )
                .set_body_raw(r#"{"data":[]}"#.to_string(), "application/json"),
        )
        .mount(&server)
        .await;

    let page = client_for(&server).get_feed().await.unwrap();
    assert!(page.is_empty());
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_unauthorized_client_fails_before_any_request() {
    let client = Facebook::new(FacebookConfig {
        graph_api_url: "http://127.0.0.1:1".to_string(),
        access_token: None,
    });
    let err = client.get_feed().await.unwrap_err();
    assert!(matches!(err, FacebookError::MissingAuthorization), "{err}");
}

#[tokio::test]
async fn test_access_token_sent_as_oauth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/feed"))
        .and(header("Authorization", "OAuth tok-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":[]}"#.to_string(), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).get_feed().await.unwrap();
}

// ---------------------------------------------------------------------------
// Publish round trips
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_feed_fetch_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/feed"))
        .and(query_param("limit", "25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"{
                    "data": [
                        {"id": "1_1", "type": "status", "message": "hi",
                         "likes": {"data": [{"id": "2"}]}}
                    ],
                    "paging": {"next": "https://graph.facebook.com/me/feed?limit=25&after=NEXT"}
                }"#
                .to_string(),
                "application/json",
            ),
        )
        .mount(&server)
        .await;

    let page = client_for(&server).get_feed().await.unwrap();
    assert_eq!(page.len(), 1);
    match &page.items[0] {
        Post::Status(content) => {
            assert_eq!(content.message.as_deref(), Some("hi"));
            assert!(content.has_likes);
        }
        other => panic!("expected status, got {other:?}"),
    }
    assert_eq!(page.next_page.unwrap().after.as_deref(), Some("NEXT"));
}

#[tokio::test]
async fn test_update_status_returns_post_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/me/feed"))
        .and(body_string_contains("message=out+for+a+walk"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"id":"100_200"}"#.to_string(), "application/json"),
        )
        .mount(&server)
        .await;

    let id = client_for(&server)
        .update_status("out for a walk")
        .await
        .unwrap();
    assert_eq!(id, "100_200");
}

#[tokio::test]
async fn test_checkin_feed_keeps_per_record_types() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/posts"))
        .and(query_param("with", "location"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"{
                    "data": [
                        {"id": "1_1", "type": "checkin",
                         "place": {"id": "777", "name": "A Coffee Shop"}},
                        {"id": "1_2", "type": "photo", "object_id": "900100",
                         "place": {"id": "777", "name": "A Coffee Shop"}}
                    ]
                }"#
                .to_string(),
                "application/json",
            ),
        )
        .mount(&server)
        .await;

    let page = client_for(&server).get_checkins().await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(matches!(&page.items[0], Post::Checkin(_)));
    match &page.items[1] {
        Post::Photo(photo) => assert_eq!(photo.object_id.as_deref(), Some("900100")),
        other => panic!("expected photo, got {other:?}"),
    }
}

#[tokio::test]
async fn test_publish_action_posts_object_and_returns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/me/myapp:eat"))
        .and(body_string_contains("taco=https%3A%2F%2Fexample.com%2Ftaco"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"id":"123456789080"}"#.to_string(), "application/json"),
        )
        .mount(&server)
        .await;

    let id = client_for(&server)
        .publish_action("myapp", "eat", "taco", "https://example.com/taco")
        .await
        .unwrap();
    assert_eq!(id, "123456789080");
}

#[tokio::test]
async fn test_publish_action_requires_authorization() {
    let client = Facebook::new(FacebookConfig {
        graph_api_url: "http://127.0.0.1:1".to_string(),
        access_token: None,
    });
    let err = client
        .publish_action("myapp", "eat", "taco", "https://example.com/taco")
        .await
        .unwrap_err();
    assert!(matches!(err, FacebookError::MissingAuthorization), "{err}");
}

#[tokio::test]
async fn test_get_friend_list_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/22"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"{"id":"22","name":"Close Friends"}"#.to_string(),
                "application/json",
            ),
        )
        .mount(&server)
        .await;

    let list = client_for(&server).get_friend_list("22").await.unwrap();
    assert_eq!(list.id, "22");
    assert_eq!(list.name.as_deref(), Some("Close Friends"));
}

#[tokio::test]
async fn test_delete_post_sends_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/100_200"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"success":true}"#.to_string(), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_post("100_200").await.unwrap();
}

// ---------------------------------------------------------------------------
// OAuth token exchange
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_exchange_accepts_form_encoded_grant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("access_token=granted&expires=5184000".to_string(), "text/plain"),
        )
        .mount(&server)
        .await;

    let oauth = OAuthClient::new("app", "secret")
        .with_access_token_url(format!("{}/oauth/access_token", server.uri()));
    let grant = oauth
        .exchange_for_access("the-code", "https://example.com/cb")
        .await
        .unwrap();
    assert_eq!(grant.access_token, "granted");
    assert_eq!(grant.expires_in, Some(5184000));
}

#[tokio::test]
async fn test_exchange_accepts_json_grant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"access_token":"granted-json","token_type":"bearer","expires_in":5183999}"#
                .to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let oauth = OAuthClient::new("app", "secret")
        .with_access_token_url(format!("{}/oauth/access_token", server.uri()));
    let grant = oauth
        .exchange_for_access("the-code", "https://example.com/cb")
        .await
        .unwrap();
    assert_eq!(grant.access_token, "granted-json");
    assert_eq!(grant.expires_in, Some(5183999));
}
