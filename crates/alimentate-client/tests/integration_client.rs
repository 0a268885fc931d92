#![allow(clippy::expect_used)]

use parking_lot::Mutex;
use std::sync::Arc;

use alimentate_client::{AlimentateClient, AuthApi, ClientError, NoToken, TokenSource};
use alimentate_types::{ApiConfig, SignInRequest, SignUpRequest};
use serde::{Deserialize, Serialize};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct SwappableToken(Mutex<Option<String>>);

impl SwappableToken {
    fn set(&self, token: Option<&str>) {
        *self.0.lock() = token.map(str::to_string);
    }
}

impl TokenSource for SwappableToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.lock().clone()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Recipe {
    id: u64,
    name: String,
}

fn client_for(server: &MockServer, source: Arc<dyn TokenSource>) -> AlimentateClient {
    let config = ApiConfig { base_url: format!("{}/api/v1", server.uri()), ..Default::default() };
    AlimentateClient::new(config, source).expect("client")
}

#[tokio::test]
async fn test_sign_in_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/authentication/sign-in"))
        .and(body_json(serde_json::json!({"username": "ana", "password": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42, "username": "ana", "token": "tok-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(NoToken));
    let resp = client.sign_in(&SignInRequest::new("ana", "x")).await.expect("sign in");

    assert_eq!(resp.id, 42);
    assert_eq!(resp.username, "ana");
    assert_eq!(resp.token, "tok-1");
}

#[tokio::test]
async fn test_sign_in_unauthorized_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/authentication/sign-in"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(NoToken));
    let err = client.sign_in(&SignInRequest::new("ana", "nope")).await.expect_err("401");

    assert_eq!(err.status(), Some(401));
    match err {
        ClientError::Rejected { message, .. } => assert_eq!(message, "bad credentials"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_sign_in_garbage_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/authentication/sign-in"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(NoToken));
    let err = client.sign_in(&SignInRequest::new("ana", "x")).await.expect_err("bad body");
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_sign_up_returns_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/authentication/sign-up"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({"message": "User created successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(NoToken));
    let resp = client.sign_up(&SignUpRequest::new("ana", "x")).await.expect("sign up");
    assert_eq!(resp.message, "User created successfully");
}

#[tokio::test]
async fn test_bearer_header_follows_token_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let token = Arc::new(SwappableToken::default());
    let client = client_for(&server, token.clone());

    let _: Vec<Recipe> = client.get("recipes").await.expect("anonymous");
    token.set(Some("tok-1"));
    let _: Vec<Recipe> = client.get("recipes").await.expect("authorized");
    token.set(None);
    let _: Vec<Recipe> = client.get("recipes").await.expect("anonymous again");

    let requests = server.received_requests().await.expect("recording enabled");
    let auth: Vec<Option<String>> = requests
        .iter()
        .map(|r| {
            r.headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_string)
        })
        .collect();
    assert_eq!(auth, vec![None, Some("Bearer tok-1".to_string()), None]);
}

#[tokio::test]
async fn test_resource_crud_shapes() {
    let server = MockServer::start().await;
    let recipe = serde_json::json!({"id": 3, "name": "Oatmeal"});

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([recipe])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/recipes/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe.clone()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/recipes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(recipe.clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/recipes/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe.clone()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/recipes/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let token = Arc::new(SwappableToken::default());
    token.set(Some("tok-9"));
    let client = client_for(&server, token);
    let recipes = client.resource("recipes");
    let expected = Recipe { id: 3, name: "Oatmeal".to_string() };

    let all: Vec<Recipe> = recipes.get_all().await.expect("get_all");
    assert_eq!(all, vec![Recipe { id: 3, name: "Oatmeal".to_string() }]);

    let one: Recipe = recipes.get_by_id(3).await.expect("get_by_id");
    assert_eq!(one, expected);

    let created: Recipe = recipes.create(&expected).await.expect("create");
    assert_eq!(created.id, 3);

    let updated: Recipe = recipes.update(3, &expected).await.expect("update");
    assert_eq!(updated.name, "Oatmeal");

    recipes.delete(3).await.expect("delete");
}
