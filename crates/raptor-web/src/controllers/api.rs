//! JSON API handlers under `/api/v1`.

use raptor_router::{Request, Response};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Serialize)]
struct User {
    id: u64,
    name: String,
    email: String,
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        },
    ]
}

/// `GET /api/v1/status`
pub async fn status(_request: Request) -> Response {
    Response::json(&json!({
        "status": "ok",
        "framework": "raptor",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /api/v1/health`
pub async fn health(_request: Request) -> Response {
    Response::json(&json!({ "healthy": true }))
}

/// `GET /api/v1/users`
pub async fn user_index(_request: Request) -> Response {
    Response::json(&json!({ "data": sample_users() }))
}

/// `POST /api/v1/users`
pub async fn user_store(_request: Request) -> Response {
    Response::json(&json!({ "created": true }))
}

/// `GET /api/v1/users/{id}`
pub async fn user_show(request: Request) -> Response {
    match request.params.parse::<u64>("id") {
        Some(id) => Response::json(&json!({
            "data": { "id": id, "name": format!("User {id}") },
        })),
        None => Response::json(&json!({ "error": "invalid user id" })),
    }
}

/// `PUT /api/v1/users/{id}`
pub async fn user_update(request: Request) -> Response {
    let id = request.params.get("id").unwrap_or("unknown");
    Response::json(&json!({ "updated": id }))
}

/// `DELETE /api/v1/users/{id}`
pub async fn user_destroy(request: Request) -> Response {
    let id = request.params.get("id").unwrap_or("unknown");
    Response::json(&json!({ "deleted": id }))
}

/// `GET /api/v1/me`
pub async fn me(_request: Request) -> Response {
    Response::json(&json!({ "data": sample_users().remove(0) }))
}

/// `PUT /api/v1/profile`
pub async fn update_profile(_request: Request) -> Response {
    Response::json(&json!({ "updated": true }))
}

/// `GET /api/v1/posts`
pub async fn post_index(_request: Request) -> Response {
    Response::json(&json!({ "data": [] }))
}

/// `POST /api/v1/posts`
pub async fn post_store(_request: Request) -> Response {
    Response::json(&json!({ "created": true }))
}

/// `GET /api/v1/posts/{id}`
pub async fn post_show(request: Request) -> Response {
    let id = request.params.get("id").unwrap_or("unknown");
    Response::json(&json!({ "data": { "id": id } }))
}

/// `POST /api/v1/logout`
pub async fn logout(_request: Request) -> Response {
    Response::json(&json!({ "logged_out": true }))
}
