//! API integration tests.
//!
//! These drive the full router, middleware included, against a fresh
//! in-memory database per test.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use creatorhub_api::{AppState, config::Config, db::Database, router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some("integration-secret".to_string()),
        "SEED_DATA" => Some("false".to_string()),
        _ => None,
    })
    .unwrap()
}

fn test_app() -> Router {
    let state = AppState::new(Database::new(), test_config()).unwrap();
    router(state)
}

/// An app whose suggestion endpoint accepts connections and never answers.
async fn stalled_ai_app() -> Router {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/chat", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some("integration-secret".to_string()),
        "SEED_DATA" => Some("false".to_string()),
        "REQUEST_TIMEOUT_SECS" => Some("1".to_string()),
        "AI_TIMEOUT_SECS" => Some("30".to_string()),
        "AI_ENDPOINT" => Some(endpoint.clone()),
        _ => None,
    })
    .unwrap();
    router(AppState::new(Database::new(), config).unwrap())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&String>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Signs up a user and returns (token, id).
async fn signup(app: &Router, username: &str, role: &str) -> (String, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/signup",
        None,
        Some(json!({
            "email": format!("{username}@example.com"),
            "name": username,
            "username": username,
            "role": role
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    (
        body["token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_str().unwrap().to_string(),
    )
}

async fn create_post(app: &Router, token: &String, title: &str, kind: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/posts",
        Some(token),
        Some(json!({ "title": title, "content": "Some body text", "type": kind })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["post"]["id"].as_str().unwrap().to_string()
}

fn post_ids(body: &Value) -> Vec<String> {
    body["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|post| post["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/nope", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn signup_login_me_and_logout() {
    let app = test_app();
    let (signup_token, id) = signup(&app, "alice", "creator").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "anything" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();
    assert_ne!(token, signup_token);

    let (status, body) = send(&app, Method::GET, "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], id.as_str());

    let (status, _) = send(&app, Method::POST, "/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    // Other sessions for the same user are unaffected.
    let (status, _) = send(&app, Method::GET, "/auth/me", Some(&signup_token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_signup_and_unknown_login_are_rejected() {
    let app = test_app();
    signup(&app, "alice", "creator").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/signup",
        None,
        Some(json!({
            "email": "alice@example.com",
            "name": "Other",
            "username": "other",
            "role": "supporter"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "ghost@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/auth/me", Some(&"garbage".to_string()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn supporters_cannot_create_posts() {
    let app = test_app();
    let (token, _) = signup(&app, "sam", "supporter").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/posts",
        Some(&token),
        Some(json!({ "title": "Hi", "content": "Body", "type": "free" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized - Creator access required");
}

#[tokio::test]
async fn only_the_owner_can_edit_or_delete_a_post() {
    let app = test_app();
    let (owner, _) = signup(&app, "alice", "creator").await;
    let (other, _) = signup(&app, "bob", "creator").await;
    let post_id = create_post(&app, &owner, "Mine", "free").await;
    let uri = format!("/posts/{post_id}");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&other),
        Some(json!({ "title": "Stolen" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Post not found or unauthorized");

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&owner),
        Some(json!({ "title": "Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post"]["title"], "Renamed");

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reading_a_post_counts_a_view() {
    let app = test_app();
    let (token, _) = signup(&app, "alice", "creator").await;
    let post_id = create_post(&app, &token, "Viewed", "free").await;
    let uri = format!("/posts/{post_id}");

    send(&app, Method::GET, &uri, None, None).await;
    let (status, body) = send(&app, Method::GET, &uri, None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post"]["views"], 2);
}

#[tokio::test]
async fn invalid_uuid_in_path_is_a_json_400() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/posts/not-a-uuid", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn blank_comment_is_rejected() {
    let app = test_app();
    let (token, _) = signup(&app, "alice", "creator").await;
    let post_id = create_post(&app, &token, "Post", "free").await;
    let uri = format!("/posts/{post_id}/comments");

    let (status, _) = send(&app, Method::POST, &uri, Some(&token), Some(json!({ "text": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        &uri,
        Some(&token),
        Some(json!({ "text": "  Great post  " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["comment"]["text"], "Great post");

    let (_, body) = send(&app, Method::GET, &uri, None, None).await;
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["user"]["username"], "alice");

    let (_, body) = send(&app, Method::GET, &format!("/posts/{post_id}"), None, None).await;
    assert_eq!(body["post"]["comments"], 1);
}

#[tokio::test]
async fn only_the_author_can_delete_a_comment() {
    let app = test_app();
    let (creator, _) = signup(&app, "alice", "creator").await;
    let (fan, _) = signup(&app, "sam", "supporter").await;
    let post_id = create_post(&app, &creator, "Post", "free").await;

    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/posts/{post_id}/comments"),
        Some(&fan),
        Some(json!({ "text": "Hello" })),
    )
    .await;
    let comment_uri = format!("/comments/{}", body["comment"]["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::DELETE, &comment_uri, Some(&creator), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &comment_uri, Some(&fan), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, &format!("/posts/{post_id}"), None, None).await;
    assert_eq!(body["post"]["comments"], 0);
}

#[tokio::test]
async fn liking_twice_counts_once() {
    let app = test_app();
    let (creator, _) = signup(&app, "alice", "creator").await;
    let (fan, _) = signup(&app, "sam", "supporter").await;
    let post_id = create_post(&app, &creator, "Post", "free").await;
    let like_uri = format!("/posts/{post_id}/like");

    let (_, first) = send(&app, Method::POST, &like_uri, Some(&fan), None).await;
    let (status, second) = send(&app, Method::POST, &like_uri, Some(&fan), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["like"]["id"], second["like"]["id"]);

    let (_, body) = send(&app, Method::GET, &format!("/posts/{post_id}"), None, None).await;
    assert_eq!(body["post"]["likes"], 1);

    let (_, body) = send(&app, Method::GET, &like_uri, Some(&fan), None).await;
    assert_eq!(body["isLiked"], true);

    let (status, _) = send(&app, Method::DELETE, &like_uri, Some(&fan), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Method::DELETE, &like_uri, Some(&fan), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Like not found");

    let (_, body) = send(&app, Method::GET, &format!("/posts/{post_id}"), None, None).await;
    assert_eq!(body["post"]["likes"], 0);
}

#[tokio::test]
async fn following_yourself_is_rejected() {
    let app = test_app();
    let (token, id) = signup(&app, "alice", "creator").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/users/{id}/follow"),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cannot follow yourself");
}

#[tokio::test]
async fn follow_like_unlike_and_duplicate_follow() {
    let app = test_app();
    let (creator, creator_id) = signup(&app, "alice", "creator").await;
    let (fan, fan_id) = signup(&app, "sam", "supporter").await;
    let post_id = create_post(&app, &creator, "Post", "free").await;
    let follow_uri = format!("/users/{creator_id}/follow");

    send(&app, Method::POST, &follow_uri, Some(&fan), None).await;
    send(&app, Method::POST, &follow_uri, Some(&fan), None).await;

    let (_, body) = send(&app, Method::GET, &format!("/users/{creator_id}"), None, None).await;
    assert_eq!(body["user"]["followerCount"], 1);
    let (_, body) = send(&app, Method::GET, &format!("/users/{fan_id}"), None, None).await;
    assert_eq!(body["user"]["followingCount"], 1);

    let (_, body) = send(&app, Method::GET, &format!("/users/{creator_id}/followers"), None, None).await;
    assert_eq!(body["followers"].as_array().unwrap().len(), 1);

    let like_uri = format!("/posts/{post_id}/like");
    send(&app, Method::POST, &like_uri, Some(&fan), None).await;
    send(&app, Method::DELETE, &like_uri, Some(&fan), None).await;
    let (_, body) = send(&app, Method::GET, &format!("/posts/{post_id}"), None, None).await;
    assert_eq!(body["post"]["likes"], 0);

    let (status, _) = send(&app, Method::DELETE, &follow_uri, Some(&fan), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &follow_uri, Some(&fan), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, &format!("/users/{creator_id}"), None, None).await;
    assert_eq!(body["user"]["followerCount"], 0);
    let (_, body) = send(&app, Method::GET, &follow_uri, Some(&fan), None).await;
    assert_eq!(body["isFollowing"], false);
}

#[tokio::test]
async fn premium_posts_are_visible_only_to_followers_and_the_author() {
    let app = test_app();
    let (creator, creator_id) = signup(&app, "alice", "creator").await;
    let (fan, _) = signup(&app, "sam", "supporter").await;
    let (stranger, _) = signup(&app, "tom", "supporter").await;
    let free = create_post(&app, &creator, "Free", "free").await;
    let premium = create_post(&app, &creator, "Premium", "premium").await;

    send(&app, Method::POST, &format!("/users/{creator_id}/follow"), Some(&fan), None).await;

    let (_, body) = send(&app, Method::GET, "/posts/feed", None, None).await;
    let anonymous = post_ids(&body);
    assert!(anonymous.contains(&free));
    assert!(!anonymous.contains(&premium));

    let (_, body) = send(&app, Method::GET, "/posts/feed", Some(&stranger), None).await;
    assert!(!post_ids(&body).contains(&premium));

    let (_, body) = send(&app, Method::GET, "/posts/feed", Some(&fan), None).await;
    assert!(post_ids(&body).contains(&premium));

    let (_, body) = send(&app, Method::GET, "/posts/feed", Some(&creator), None).await;
    assert!(post_ids(&body).contains(&premium));
}

#[tokio::test]
async fn scheduled_posts_start_unpublished() {
    let app = test_app();
    let (creator, _) = signup(&app, "alice", "creator").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/posts",
        Some(&creator),
        Some(json!({
            "title": "Later",
            "content": "Coming soon",
            "type": "free",
            "scheduledFor": "2030-01-01T00:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["post"]["published"], false);
    let id = body["post"]["id"].as_str().unwrap().to_string();

    let (_, body) = send(&app, Method::GET, "/posts/feed", Some(&creator), None).await;
    assert!(!post_ids(&body).contains(&id));
}

#[tokio::test]
async fn trending_never_includes_premium_posts() {
    let app = test_app();
    let (creator, _) = signup(&app, "alice", "creator").await;
    let (fan, _) = signup(&app, "sam", "supporter").await;
    let free = create_post(&app, &creator, "Free", "free").await;
    let premium = create_post(&app, &creator, "Premium", "premium").await;

    send(&app, Method::POST, &format!("/posts/{premium}/like"), Some(&fan), None).await;

    let (_, body) = send(&app, Method::GET, "/posts/trending", None, None).await;
    let ids = post_ids(&body);
    assert_eq!(ids, vec![free]);
}

#[tokio::test]
async fn subscriptions_pay_the_creator_85_percent() {
    let app = test_app();
    let (_, creator_id) = signup(&app, "alice", "creator").await;
    let (fan, fan_id) = signup(&app, "sam", "supporter").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/subscriptions",
        Some(&fan),
        Some(json!({ "creatorId": creator_id, "tier": "premium" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["subscription"]["status"], "active");
    let earnings = body["subscription"]["mockEarnings"].as_f64().unwrap();
    assert!((earnings - 12.75).abs() < 1e-9);

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/subscriptions/check/{creator_id}"),
        Some(&fan),
        None,
    )
    .await;
    assert_eq!(body["isSubscribed"], true);

    // Supporters cannot be subscribed to.
    let (creator_token, _) = signup(&app, "bob", "creator").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/subscriptions",
        Some(&creator_token),
        Some(json!({ "creatorId": fan_id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Creator not found");
}

#[tokio::test]
async fn analytics_overview_sums_post_counters() {
    let app = test_app();
    let (creator, creator_id) = signup(&app, "alice", "creator").await;
    let (fan, _) = signup(&app, "sam", "supporter").await;
    let first = create_post(&app, &creator, "First", "free").await;
    let second = create_post(&app, &creator, "Second", "free").await;

    send(&app, Method::GET, &format!("/posts/{first}"), None, None).await;
    send(&app, Method::GET, &format!("/posts/{second}"), None, None).await;
    send(&app, Method::GET, &format!("/posts/{second}"), None, None).await;
    send(&app, Method::POST, &format!("/posts/{first}/like"), Some(&fan), None).await;
    send(&app, Method::POST, &format!("/users/{creator_id}/follow"), Some(&fan), None).await;
    send(
        &app,
        Method::POST,
        "/subscriptions",
        Some(&fan),
        Some(json!({ "creatorId": creator_id })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/analytics/overview", Some(&creator), None).await;
    assert_eq!(status, StatusCode::OK);
    let analytics = &body["analytics"];
    assert_eq!(analytics["views"], 3);
    assert_eq!(analytics["likes"], 1);
    assert_eq!(analytics["followers"], 1);
    assert_eq!(analytics["period"], "month");
    assert_eq!(analytics["topPosts"][0]["id"], second.as_str());
    let earnings = analytics["earnings"].as_f64().unwrap();
    assert!((earnings - 4.25).abs() < 1e-9);

    let (status, _) = send(&app, Method::GET, "/analytics/overview", Some(&fan), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn search_matches_users_posts_and_tags() {
    let app = test_app();
    let (creator, _) = signup(&app, "designer", "creator").await;
    send(
        &app,
        Method::POST,
        "/posts",
        Some(&creator),
        Some(json!({
            "title": "Design systems",
            "content": "Tokens and components",
            "type": "free",
            "tags": ["Design", "#UI"]
        })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/search?q=DESIGN", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
    assert_eq!(body["posts"].as_array().unwrap().len(), 1);
    assert_eq!(body["tags"], json!(["design"]));

    let (_, body) = send(&app, Method::GET, "/search?q=", None, None).await;
    assert!(body["posts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn notifications_are_addressed_to_the_caller() {
    let app = test_app();
    let (token, id) = signup(&app, "alice", "creator").await;

    let (status, body) = send(&app, Method::GET, "/notifications", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let notifications = body["notifications"].as_array().unwrap();
    assert!(!notifications.is_empty());
    assert!(notifications.iter().all(|n| n["userId"] == id.as_str()));
    assert_eq!(body["unreadCount"], 3);
}

#[tokio::test]
async fn ai_suggestions_fall_back_without_an_endpoint() {
    let app = test_app();

    let (status, _) = send(&app, Method::POST, "/ai/suggestions", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/ai/suggestions",
        None,
        Some(json!({ "title": "Photography lighting guide", "content": "Natural window light" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
    let prediction = body["engagement_prediction"].as_u64().unwrap();
    assert!((70..100).contains(&prediction));
    assert!(body["hashtags"].as_array().unwrap().contains(&json!("#photography")));
}

#[tokio::test]
async fn blank_username_is_rejected_on_signup_and_update() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/signup",
        None,
        Some(json!({
            "email": "blank@example.com",
            "name": "Blank",
            "username": "     ",
            "role": "supporter"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (token, _) = signup(&app, "alice", "creator").await;
    let (status, _) = send(
        &app,
        Method::PUT,
        "/users/me",
        Some(&token),
        Some(json!({ "username": "  ab  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_update_authenticates_before_validating() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::PUT,
        "/users/me",
        None,
        Some(json!({ "username": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn slow_requests_time_out_with_408() {
    let app = stalled_ai_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/ai/suggestions",
        None,
        Some(json!({ "title": "Slow", "content": "Never answered" })),
    )
    .await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Request timed out");
}
