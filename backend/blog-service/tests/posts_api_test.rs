/// Integration tests for the posts CRUD endpoints
mod common;

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde::Deserialize;

    use crate::common;

    #[derive(Debug, Deserialize)]
    struct ErrorResponse {
        error: String,
        status: u16,
    }

    // ============================================
    // Create and Read
    // ============================================

    #[actix_web::test]
    async fn test_create_and_get_post() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let token = common::register_and_login(&app, "alice", "pw1").await;

        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .insert_header(common::bearer(&token))
            .set_json(serde_json::json!({
                "title": "First Post",
                "content": "Hello, world",
                "username": "alice"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let created: serde_json::Value = test::read_body_json(resp).await;
        let post_id = created["id"].as_i64().unwrap();
        assert!(post_id > 0);
        assert_eq!(created["title"], "First Post");
        assert_eq!(created["content"], "Hello, world");
        assert_eq!(created["username"], "alice");
        assert!(created["created_at"].as_str().is_some());

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{}", post_id))
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let fetched: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(fetched["id"], post_id);
        assert_eq!(fetched["title"], "First Post");
        // A fresh post carries an empty comment list, not null
        assert_eq!(fetched["comments"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_create_post_rejects_empty_title() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let token = common::register_and_login(&app, "bob", "pw1").await;

        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .insert_header(common::bearer(&token))
            .set_json(serde_json::json!({
                "title": "",
                "content": "Body",
                "username": "bob"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_list_posts_in_creation_order() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let token = common::register_and_login(&app, "carol", "pw1").await;

        let first = common::create_post(&app, &token, "One", "1", "carol").await;
        let second = common::create_post(&app, &token, "Two", "2", "carol").await;
        let third = common::create_post(&app, &token, "Three", "3", "carol").await;

        let req = test::TestRequest::get()
            .uri("/api/v1/posts")
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let posts: Vec<serde_json::Value> = test::read_body_json(resp).await;
        assert_eq!(posts.len(), 3);
        let ids: Vec<i64> = posts.iter().map(|p| p["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![first, second, third]);
        assert_eq!(posts[0]["title"], "One");
        assert_eq!(posts[2]["title"], "Three");
    }

    #[actix_web::test]
    async fn test_get_nonexistent_post() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let token = common::register_and_login(&app, "dave", "pw1").await;

        let req = test::TestRequest::get()
            .uri("/api/v1/posts/9999")
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Post not found");
        assert_eq!(body.status, 404);
    }

    // ============================================
    // Update
    // ============================================

    #[actix_web::test]
    async fn test_update_post() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let token = common::register_and_login(&app, "erin", "pw1").await;
        let post_id = common::create_post(&app, &token, "Draft", "wip", "erin").await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{}", post_id))
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let before: serde_json::Value = test::read_body_json(resp).await;
        let created_at = before["created_at"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/posts/{}", post_id))
            .insert_header(common::bearer(&token))
            .set_json(serde_json::json!({
                "title": "Published",
                "content": "done",
                "username": "erin"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{}", post_id))
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let after: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(after["title"], "Published");
        assert_eq!(after["content"], "done");
        // The creation timestamp survives edits
        assert_eq!(after["created_at"].as_str().unwrap(), created_at);
    }

    #[actix_web::test]
    async fn test_update_nonexistent_post() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let token = common::register_and_login(&app, "frank", "pw1").await;

        let req = test::TestRequest::put()
            .uri("/api/v1/posts/9999")
            .insert_header(common::bearer(&token))
            .set_json(serde_json::json!({
                "title": "Ghost",
                "content": "none",
                "username": "frank"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Post not found");
    }

    // ============================================
    // Delete
    // ============================================

    #[actix_web::test]
    async fn test_delete_post() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let token = common::register_and_login(&app, "grace", "pw1").await;
        let post_id = common::create_post(&app, &token, "Temp", "gone soon", "grace").await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/posts/{}", post_id))
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{}", post_id))
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        // Second delete reports not found
        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/posts/{}", post_id))
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_delete_post_cascades_to_comments() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let token = common::register_and_login(&app, "heidi", "pw1").await;
        let post_id = common::create_post(&app, &token, "Discussed", "body", "heidi").await;

        for text in ["first!", "second!"] {
            let req = test::TestRequest::post()
                .uri(&format!("/api/v1/posts/{}/comments", post_id))
                .insert_header(common::bearer(&token))
                .set_json(serde_json::json!({"content": text, "username": "heidi"}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 201);
        }

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/posts/{}", post_id))
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        // The comments went with the post
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{}/comments", post_id))
            .insert_header(common::bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let comments: Vec<serde_json::Value> = test::read_body_json(resp).await;
        assert!(comments.is_empty());
    }

    // ============================================
    // Access Control
    // ============================================

    #[actix_web::test]
    async fn test_posts_require_token() {
        let pool = common::create_test_pool().await;
        let app = common::setup_test_app(pool).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .set_json(serde_json::json!({
                "title": "Anonymous",
                "content": "no token",
                "username": "ghost"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
