//! Route tables, split like Laravel's `web.php` / `api.php`.
//!
//! Declaration order is match-priority order: literal paths such as
//! `/users/create` come before `/users/{id}` so the parameter route
//! cannot capture them.

use raptor_router::{Result, Route, RouteGroup};

/// Browser-facing routes.
pub fn web_routes() -> Result<Vec<Route>> {
    let mut routes = vec![
        // Home
        Route::get("/", "HomeController@index")?.name("home"),
        Route::get("/about", "HomeController@about")?.name("about"),
        Route::get("/contact", "HomeController@contact")?.name("contact"),
        // User management
        Route::get("/users", "UserController@index")?.name("users.index"),
        Route::get("/users/create", "UserController@create")?.name("users.create"),
        Route::post("/users", "UserController@store")?.name("users.store"),
        Route::get("/users/{id}", "UserController@show")?.name("users.show"),
        Route::get("/users/{id}/edit", "UserController@edit")?.name("users.edit"),
        Route::put("/users/{id}", "UserController@update")?.name("users.update"),
        Route::delete("/users/{id}", "UserController@destroy")?.name("users.destroy"),
        // Blog
        Route::get("/blog", "BlogController@index")?.name("blog.index"),
        Route::get("/blog/{slug}", "BlogController@show")?.name("blog.show"),
        Route::get("/categories/{category}/posts", "BlogController@category")?
            .name("blog.category"),
    ];

    let admin = RouteGroup::prefix("/admin")
        .middleware(["auth", "admin"])
        .group(&[
            Route::get("/", "AdminController@dashboard")?.name("admin.dashboard"),
            Route::get("/users", "AdminController@users")?.name("admin.users"),
            Route::get("/settings", "AdminController@settings")?.name("admin.settings"),
        ])?;
    routes.extend(admin);

    Ok(routes)
}

/// JSON API routes under `/api/v1`.
pub fn api_routes() -> Result<Vec<Route>> {
    let mut routes = RouteGroup::prefix("/api/v1").group(&[
        // System
        Route::get("/status", "api::SystemController@status")?.name("api.status"),
        Route::get("/health", "api::SystemController@health")?.name("api.health"),
        // Users
        Route::get("/users", "api::UserController@index")?.name("api.users.index"),
        Route::post("/users", "api::UserController@store")?.name("api.users.store"),
        Route::get("/users/{id}", "api::UserController@show")?.name("api.users.show"),
        Route::put("/users/{id}", "api::UserController@update")?.name("api.users.update"),
        Route::delete("/users/{id}", "api::UserController@destroy")?.name("api.users.destroy"),
        // Posts
        Route::get("/posts", "api::PostController@index")?.name("api.posts.index"),
        Route::post("/posts", "api::PostController@store")?.name("api.posts.store"),
        Route::get("/posts/{id}", "api::PostController@show")?.name("api.posts.show"),
    ])?;

    let protected = RouteGroup::prefix("/api/v1")
        .middleware(["auth:api"])
        .group(&[
            Route::post("/logout", "api::AuthController@logout")?.name("api.logout"),
            Route::get("/me", "api::UserController@me")?.name("api.me"),
            Route::put("/profile", "api::UserController@update_profile")?
                .name("api.profile.update"),
        ])?;
    routes.extend(protected);

    Ok(routes)
}
