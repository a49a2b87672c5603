//! # raptor-web
//!
//! Demo application for [`raptor_router`]: the original framework's route
//! tables and controllers, expressed as declarative route files and plain
//! async handler functions wired through a startup-time registry.
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use raptor_router::Request;
//!
//! let app = raptor_web::app::build().unwrap();
//! let response = app.dispatch(Request::get("/users/42")).await;
//! assert_eq!(response.status, 200);
//! # }
//! ```

pub mod app;
pub mod controllers;
pub mod routes;
