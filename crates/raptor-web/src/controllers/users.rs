//! User management handlers (HTML-facing RESTful resource).

use raptor_router::{Request, Response};

/// `GET /users`
pub async fn index(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>Users - Raptor</title></head><body>\
         <h1>Users</h1>\
         <a href=\"/users/create\">Create New User</a>\
         <p><a href=\"/\">Back to Home</a></p>\
         </body></html>",
    )
}

/// `GET /users/create`
pub async fn create(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>Create User - Raptor</title></head><body>\
         <h1>Create User</h1>\
         <form method=\"post\" action=\"/users\">\
         <input name=\"name\" placeholder=\"Name\">\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\
         <button type=\"submit\">Create</button>\
         </form>\
         </body></html>",
    )
}

/// `POST /users`
pub async fn store(_request: Request) -> Response {
    Response::redirect("/users")
}

/// `GET /users/{id}`
pub async fn show(request: Request) -> Response {
    let id = request.params.get("id").unwrap_or("unknown");
    Response::html(format!(
        "<!DOCTYPE html>\
         <html><head><title>User {id} - Raptor</title></head><body>\
         <h1>User {id}</h1>\
         <a href=\"/users/{id}/edit\">Edit</a>\
         <p><a href=\"/users\">Back to Users</a></p>\
         </body></html>"
    ))
}

/// `GET /users/{id}/edit`
pub async fn edit(request: Request) -> Response {
    let id = request.params.get("id").unwrap_or("unknown");
    Response::html(format!(
        "<!DOCTYPE html>\
         <html><head><title>Edit User {id} - Raptor</title></head><body>\
         <h1>Edit User {id}</h1>\
         <form method=\"post\" action=\"/users/{id}\">\
         <input name=\"name\" placeholder=\"Name\">\
         <button type=\"submit\">Save</button>\
         </form>\
         </body></html>"
    ))
}

/// `PUT /users/{id}`
pub async fn update(request: Request) -> Response {
    let id = request.params.get("id").unwrap_or("unknown");
    Response::redirect(format!("/users/{id}"))
}

/// `DELETE /users/{id}`
pub async fn destroy(_request: Request) -> Response {
    Response::redirect("/users")
}
