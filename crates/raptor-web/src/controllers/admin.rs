//! Admin handlers.
//!
//! These sit behind the `/admin` group's `auth`/`admin` middleware tags;
//! enforcing those tags is the transport layer's job, not the router's.

use raptor_router::{Request, Response};

/// `GET /admin`
pub async fn dashboard(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>Dashboard - Raptor Admin</title></head><body>\
         <h1>Admin Dashboard</h1>\
         <ul>\
         <li><a href=\"/admin/users\">Users</a></li>\
         <li><a href=\"/admin/settings\">Settings</a></li>\
         </ul>\
         </body></html>",
    )
}

/// `GET /admin/users`
pub async fn users(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>Users - Raptor Admin</title></head><body>\
         <h1>Manage Users</h1>\
         <p><a href=\"/admin\">Back to Dashboard</a></p>\
         </body></html>",
    )
}

/// `GET /admin/settings`
pub async fn settings(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>Settings - Raptor Admin</title></head><body>\
         <h1>Settings</h1>\
         <p><a href=\"/admin\">Back to Dashboard</a></p>\
         </body></html>",
    )
}
