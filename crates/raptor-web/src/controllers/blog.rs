//! Blog handlers: slug and category path parameters.

use raptor_router::{Request, Response};

/// `GET /blog`
pub async fn index(_request: Request) -> Response {
    Response::html(
        "<!DOCTYPE html>\
         <html><head><title>Blog - Raptor</title></head><body>\
         <h1>Blog</h1>\
         <p><a href=\"/\">Back to Home</a></p>\
         </body></html>",
    )
}

/// `GET /blog/{slug}`
pub async fn show(request: Request) -> Response {
    let slug = request.params.get("slug").unwrap_or("unknown");
    Response::html(format!(
        "<!DOCTYPE html>\
         <html><head><title>{slug} - Raptor</title></head><body>\
         <h1>Post: {slug}</h1>\
         <p><a href=\"/blog\">Back to Blog</a></p>\
         </body></html>"
    ))
}

/// `GET /categories/{category}/posts`
pub async fn category(request: Request) -> Response {
    let category = request.params.get("category").unwrap_or("unknown");
    Response::html(format!(
        "<!DOCTYPE html>\
         <html><head><title>{category} - Raptor</title></head><body>\
         <h1>Posts in {category}</h1>\
         <p><a href=\"/blog\">Back to Blog</a></p>\
         </body></html>"
    ))
}
