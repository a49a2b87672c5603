//! Home page handlers.

use raptor_router::{Request, Response};

/// `GET /`
pub async fn index(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>Raptor</title></head><body>\
         <h1>Raptor</h1>\
         <p>Laravel-style routing: named routes, parameters, groups, and middleware tags.</p>\
         <ul>\
         <li><a href=\"/about\">About</a></li>\
         <li><a href=\"/users\">Users</a></li>\
         <li><a href=\"/blog\">Blog</a></li>\
         </ul>\
         </body></html>",
    )
}

/// `GET /about`
pub async fn about(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>About - Raptor</title></head><body>\
         <h1>About</h1>\
         <p>Routes are declared in route tables and resolved first-match-wins.</p>\
         <p><a href=\"/\">Back to Home</a></p>\
         </body></html>",
    )
}

/// `GET /contact`
pub async fn contact(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>Contact - Raptor</title></head><body>\
         <h1>Contact</h1>\
         <form method=\"post\" action=\"/contact\">\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\
         <textarea name=\"message\" placeholder=\"Message\"></textarea>\
         <button type=\"submit\">Send</button>\
         </form>\
         </body></html>",
    )
}
