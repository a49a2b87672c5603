//! # raptor-router
//!
//! A lightweight, Laravel-style URL routing library.
//!
//! This crate provides:
//! - Path templates with `{name}` and optional `{name?}` parameters
//! - Ordered, first-match-wins resolution with parameter capture
//! - Named routes with reverse URL generation
//! - Route groups applying a prefix and middleware tags to a batch
//! - `Controller@method` action descriptors and a startup-time handler
//!   registry for dispatch
//!
//! ## Quick Start
//!
//! ```
//! use raptor_router::{Method, Route, Router};
//!
//! # fn main() -> raptor_router::Result<()> {
//! let mut router = Router::new();
//! router.register_routes(vec![
//!     Route::get("/", "HomeController@index")?.name("home"),
//!     Route::get("/users/{id}", "UserController@show")?.name("users.show"),
//! ]);
//!
//! let resolution = router.resolve(Method::Get, "/users/42")?;
//! assert_eq!(resolution.parameters.get("id"), Some("42"));
//! assert_eq!(resolution.action.controller.as_deref(), Some("UserController"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Declaration order matters
//!
//! Resolution scans routes in registration order and the first match
//! wins, so literal paths must be declared before parameterized siblings:
//!
//! ```
//! use raptor_router::Route;
//!
//! # fn main() -> raptor_router::Result<()> {
//! let routes = vec![
//!     Route::get("/users/create", "UserController@create")?,
//!     Route::get("/users/{id}", "UserController@show")?,
//! ];
//! # Ok(())
//! # }
//! ```
//!
//! ## Route Groups
//!
//! ```
//! use raptor_router::{Route, RouteGroup};
//!
//! # fn main() -> raptor_router::Result<()> {
//! let admin = RouteGroup::prefix("/admin")
//!     .middleware(["auth", "admin"])
//!     .group(&[
//!         Route::get("/", "AdminController@dashboard")?.name("admin.dashboard"),
//!         Route::get("/users", "AdminController@users")?.name("admin.users"),
//!     ])?;
//! assert_eq!(admin[0].path, "/admin");
//! # Ok(())
//! # }
//! ```
//!
//! ## Named Routes
//!
//! ```
//! use std::collections::HashMap;
//! use raptor_router::{Route, Router};
//!
//! # fn main() -> raptor_router::Result<()> {
//! let mut router = Router::new();
//! router.add_route(Route::get("/users/{id}", "UserController@show")?.name("users.show"));
//!
//! let params: HashMap<String, String> =
//!     [("id".to_string(), "7".to_string())].into_iter().collect();
//! assert_eq!(router.url("users.show", &params)?, "/users/7");
//! # Ok(())
//! # }
//! ```
//!
//! ## Dispatch
//!
//! Handlers are plain async functions registered under the exact action
//! strings the routes declare; no reflection, no runtime name lookup:
//!
//! ```
//! use raptor_router::{Dispatcher, HandlerRegistry, Request, Response, Route, Router};
//!
//! async fn show_user(req: Request) -> Response {
//!     let id = req.params.get("id").unwrap_or("unknown");
//!     Response::text(format!("user {id}"))
//! }
//!
//! # fn main() -> raptor_router::Result<()> {
//! let mut router = Router::new();
//! router.add_route(Route::get("/users/{id}", "UserController@show")?);
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register("UserController@show", show_user);
//!
//! let dispatcher = Dispatcher::new(router, registry);
//! # Ok(())
//! # }
//! ```

mod action;
mod dispatch;
mod error;
mod group;
mod pattern;
mod request;
mod response;
mod route;
mod router;

pub use action::ActionDescriptor;
pub use dispatch::{Dispatcher, Handler, HandlerRegistry};
pub use error::{Result, RouterError};
pub use group::RouteGroup;
pub use pattern::{PathPattern, RouteParameter};
pub use request::{Method, PathParams, Request};
pub use response::Response;
pub use route::Route;
pub use router::{Resolution, Router};
