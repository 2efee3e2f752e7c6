//! Tests for the PPP client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real backend.

use ppp_client::{
    Album, ApiResult, ClientConfig, ClientError, FailureKind, Payload, PppClient, User,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PppClient {
    PppClient::new(ClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        match PppClient::new(ClientConfig::new("")) {
            Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            Err(e) => panic!("Expected InvalidUrl error, got: {:?}", e),
            Ok(_) => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match PppClient::new(ClientConfig::new("example.com")) {
            Err(ClientError::InvalidUrl(msg)) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            Err(e) => panic!("Expected InvalidUrl error, got: {:?}", e),
            Ok(_) => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = PppClient::new(ClientConfig::new("http://localhost:99999"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_trailing_slashes_removed() {
        let client = PppClient::new(ClientConfig::new("https://example.com///")).unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }
}

// =============================================================================
// User Operation Tests
// =============================================================================

mod users {
    use super::*;

    #[tokio::test]
    async fn test_add_user_posts_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "username": "a", "password": "b" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "userId": 1,
                "username": "a",
                "password": "b"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.users().add_user(&User::new("a", "b")).await;

        assert_eq!(result.status(), Some(201));
        let user: User = result.decode().unwrap();
        assert_eq!(user.user_id, Some(1));
    }

    #[tokio::test]
    async fn test_update_user_patches_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/users/12"))
            .and(body_json(json!({ "userId": 12, "password": "new" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "userId": 12,
                "username": "a",
                "password": "new"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let update = User {
            user_id: Some(12),
            username: None,
            password: Some("new".into()),
        };
        let result = client.users().update_user(12, &update).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_all_users() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "userId": 1, "username": "a" },
                { "userId": 2, "username": "b" }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let users: Vec<User> = client.users().get_all_users().await.decode().unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_get_user_by_username_encodes_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/jo%20doe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "userId": 9,
                "username": "jo doe"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let user: User = client
            .users()
            .get_user_by_username("jo doe")
            .await
            .decode()
            .unwrap();

        assert_eq!(user.username.as_deref(), Some("jo doe"));
    }

    #[tokio::test]
    async fn test_find_user_does_not_send_password() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/find/alice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "userId": 3,
                "username": "alice"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client
            .users()
            .get_user_by_username_and_password("alice", "secret")
            .await;

        assert!(result.is_ok());
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_empty());
        assert!(!requests[0].url.as_str().contains("secret"));
    }

    #[tokio::test]
    async fn test_dot_usernames_send_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        for username in [".", ".."] {
            let by_name = client.users().get_user_by_username(username).await;
            assert_eq!(by_name.failure_kind(), Some(FailureKind::InvalidUrl));

            let found = client
                .users()
                .get_user_by_username_and_password(username, "pw")
                .await;
            assert_eq!(found.failure_kind(), Some(FailureKind::InvalidUrl));
        }

        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_reads_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/users/4"))
            .respond_with(ResponseTemplate::new(200).set_body_string("User deleted"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.users().delete_user(4).await;

        assert_eq!(
            result,
            ApiResult::Ok {
                status: 200,
                payload: Payload::Text("User deleted".into()),
            }
        );
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "userId": 1,
                "username": "a",
                "password": "b"
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "userId": 1,
                "username": "a",
                "password": "b"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let created: User = client
            .users()
            .add_user(&User::new("a", "b"))
            .await
            .decode()
            .unwrap();
        let fetched: User = client
            .users()
            .get_user_by_username(created.username.as_deref().unwrap())
            .await
            .decode()
            .unwrap();

        assert_eq!(fetched.username.as_deref(), Some("a"));
    }
}

// =============================================================================
// Album Operation Tests
// =============================================================================

mod albums {
    use super::*;

    #[tokio::test]
    async fn test_add_album_puts_owner_in_path_only() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/albums/7"))
            .and(body_json(json!({ "title": "X", "songCount": "3" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "albumId": 1,
                "title": "X",
                "songCount": 3
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let body = json!({ "title": "X", "songCount": "3" });
        let result = client.albums().add_album(&body, 7).await;

        assert_eq!(result.status(), Some(201));
    }

    #[tokio::test]
    async fn test_update_album() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/albums/2"))
            .and(body_json(json!({ "albumId": 2, "runTime": 2400 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "albumId": 2,
                "runTime": 2400
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let album = Album {
            album_id: Some(2),
            run_time: Some(2400),
            ..Album::default()
        };
        let updated: Album = client
            .albums()
            .update_album(2, &album)
            .await
            .decode()
            .unwrap();

        assert_eq!(updated.run_time, Some(2400));
    }

    #[tokio::test]
    async fn test_list_and_lookup_routes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/albums"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/albums/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "albumId": 5 })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/albums/7/albums"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "albumId": 5 }])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let albums = client.albums();

        let all: Vec<Album> = albums.get_all_albums().await.decode().unwrap();
        assert!(all.is_empty());

        let one: Album = albums.get_album_by_id(5).await.decode().unwrap();
        assert_eq!(one.album_id, Some(5));

        let owned: Vec<Album> = albums.get_albums_by_user_id(7).await.decode().unwrap();
        assert_eq!(owned.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_album_reads_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/albums/0"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Album not found"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.albums().delete_album(0).await;

        assert_eq!(result.status(), Some(404));
        assert_eq!(
            result.payload().and_then(Payload::as_text),
            Some("Album not found")
        );
    }
}

// =============================================================================
// Result Normalization Tests
// =============================================================================

mod normalization {
    use super::*;

    #[tokio::test]
    async fn test_error_status_returns_body_unchanged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": 404,
                "error": "Not Found"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.users().get_user_by_username("ghost").await;

        assert!(result.is_ok());
        assert_eq!(result.status(), Some(404));
        assert_eq!(
            result.payload().and_then(Payload::as_json),
            Some(&json!({ "status": 404, "error": "Not Found" }))
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/albums"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.albums().get_all_albums().await;

        assert_eq!(result.failure_kind(), Some(FailureKind::Decode));
        match result {
            ApiResult::Err { message, .. } => {
                assert_eq!(message, "An unexpected error occured when retrieving all albums");
            }
            ApiResult::Ok { .. } => panic!("Expected failure"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_on_create_user() {
        let client = PppClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();

        let result = client.users().add_user(&User::new("a", "b")).await;

        match &result {
            ApiResult::Err { kind, message, .. } => {
                assert!(
                    matches!(kind, FailureKind::Unreachable | FailureKind::Request),
                    "unexpected kind {:?}",
                    kind
                );
                assert_eq!(message, "An unexpected error occured when creating a user");
            }
            ApiResult::Ok { .. } => panic!("Expected failure"),
        }
        assert_eq!(
            result.legacy_value(),
            json!({ "error": "An unexpected error occured when creating a user" })
        );
    }

    #[tokio::test]
    async fn test_each_operation_issues_one_request() {
        let mock_server = MockServer::start().await;

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let users = client.users();
        let albums = client.albums();
        let body = json!({});

        users.add_user(&body).await;
        users.update_user(1, &body).await;
        users.get_all_users().await;
        users.get_user_by_username("a").await;
        users.get_user_by_username_and_password("a", "b").await;
        users.delete_user(1).await;
        albums.add_album(&body, 1).await;
        albums.update_album(2, &body).await;
        albums.get_all_albums().await;
        albums.get_album_by_id(2).await;
        albums.get_albums_by_user_id(1).await;
        albums.delete_album(2).await;

        let seen: Vec<(String, String)> = mock_server
            .received_requests()
            .await
            .unwrap()
            .into_iter()
            .map(|r| (r.method.to_string(), r.url.path().to_string()))
            .collect();

        let expected = [
            ("POST", "/users"),
            ("PATCH", "/users/1"),
            ("GET", "/users"),
            ("GET", "/users/a"),
            ("GET", "/find/a"),
            ("DELETE", "/users/1"),
            ("POST", "/albums/1"),
            ("PATCH", "/albums/2"),
            ("GET", "/albums"),
            ("GET", "/albums/2"),
            ("GET", "/albums/1/albums"),
            ("DELETE", "/albums/2"),
        ];
        let expected: Vec<(String, String)> = expected
            .iter()
            .map(|(m, p)| ((*m).to_string(), (*p).to_string()))
            .collect();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_base_path_prefix_is_kept() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            PppClient::new(ClientConfig::new(format!("{}/api/", mock_server.uri()))).unwrap();
        let result = client.users().get_all_users().await;

        assert_eq!(result.status(), Some(200));
    }
}
