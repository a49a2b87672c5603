//! Route declarations.

use crate::error::Result;
use crate::pattern::PathPattern;
use crate::request::{Method, PathParams};

/// A single route declaration: method + path template + action.
///
/// Routes are built with the per-method constructors and decorated with
/// the consuming builders [`name`](Self::name) and
/// [`middleware`](Self::middleware) before being registered into a
/// [`Router`](crate::Router). Once registered they are frozen; the router
/// only ever hands out shared references.
///
/// # Example
///
/// ```
/// use raptor_router::Route;
///
/// let route = Route::get("/users/{id}", "UserController@show")
///     .unwrap()
///     .name("users.show")
///     .middleware("auth");
/// assert_eq!(route.path, "/users/{id}");
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    /// HTTP method, fixed at construction.
    pub method: Method,
    /// The declared path template.
    pub path: String,
    /// Action string, e.g. `UserController@show`.
    pub action: String,
    /// Optional route name for reverse URL lookup.
    pub name: Option<String>,
    /// Middleware tags in execution order. Recorded only; the core never
    /// runs middleware.
    pub middlewares: Vec<String>,
    /// Matcher compiled from `path`, never mutated afterwards.
    pub pattern: PathPattern,
}

impl Route {
    /// Creates a route, compiling its path template.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`](crate::RouterError::InvalidPattern)
    /// when the template is malformed. Callers registering routes at
    /// startup must treat this as fatal.
    pub fn new(method: Method, path: &str, action: &str) -> Result<Self> {
        Ok(Self {
            method,
            path: path.to_string(),
            action: action.to_string(),
            name: None,
            middlewares: Vec::new(),
            pattern: PathPattern::compile(path)?,
        })
    }

    /// Declares a GET route.
    pub fn get(path: &str, action: &str) -> Result<Self> {
        Self::new(Method::Get, path, action)
    }

    /// Declares a POST route.
    pub fn post(path: &str, action: &str) -> Result<Self> {
        Self::new(Method::Post, path, action)
    }

    /// Declares a PUT route.
    pub fn put(path: &str, action: &str) -> Result<Self> {
        Self::new(Method::Put, path, action)
    }

    /// Declares a PATCH route.
    pub fn patch(path: &str, action: &str) -> Result<Self> {
        Self::new(Method::Patch, path, action)
    }

    /// Declares a DELETE route.
    pub fn delete(path: &str, action: &str) -> Result<Self> {
        Self::new(Method::Delete, path, action)
    }

    /// Declares an OPTIONS route.
    pub fn options(path: &str, action: &str) -> Result<Self> {
        Self::new(Method::Options, path, action)
    }

    /// Sets the route name for reverse URL lookup. Last write wins.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends one middleware tag.
    #[must_use]
    pub fn middleware(mut self, tag: impl Into<String>) -> Self {
        self.middlewares.push(tag.into());
        self
    }

    /// Appends several middleware tags, preserving their order.
    #[must_use]
    pub fn middlewares<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middlewares.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Tests whether this route matches a method and an entire path.
    ///
    /// Never panics: a mismatch on either method or pattern simply
    /// returns false.
    pub fn matches(&self, method: Method, path: &str) -> bool {
        self.method == method && self.pattern.is_match(path)
    }

    /// Extracts path parameters from a path.
    ///
    /// Returns an empty mapping when the pattern does not match; callers
    /// are expected to have confirmed the match via [`matches`](Self::matches).
    pub fn extract_parameters(&self, path: &str) -> PathParams {
        self.pattern.match_path(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_fixed_by_constructor() {
        assert_eq!(Route::get("/", "a").unwrap().method, Method::Get);
        assert_eq!(Route::post("/", "a").unwrap().method, Method::Post);
        assert_eq!(Route::put("/", "a").unwrap().method, Method::Put);
        assert_eq!(Route::patch("/", "a").unwrap().method, Method::Patch);
        assert_eq!(Route::delete("/", "a").unwrap().method, Method::Delete);
        assert_eq!(Route::options("/", "a").unwrap().method, Method::Options);
    }

    #[test]
    fn test_matches_method_and_path() {
        let route = Route::get("/users/{id}", "UserController@show").unwrap();
        assert!(route.matches(Method::Get, "/users/42"));
        assert!(!route.matches(Method::Post, "/users/42"));
        assert!(!route.matches(Method::Get, "/users"));
    }

    #[test]
    fn test_extract_parameters() {
        let route = Route::get("/users/{id}", "UserController@show").unwrap();
        let params = route.extract_parameters("/users/42");
        assert_eq!(params.get("id"), Some("42"));
        // Non-matching path yields an empty mapping, not a panic.
        assert!(route.extract_parameters("/posts/1").is_empty());
    }

    #[test]
    fn test_name_last_write_wins() {
        let route = Route::get("/", "HomeController@index")
            .unwrap()
            .name("first")
            .name("second");
        assert_eq!(route.name.as_deref(), Some("second"));
    }

    #[test]
    fn test_middleware_accumulates_in_order() {
        let route = Route::get("/admin", "AdminController@dashboard")
            .unwrap()
            .middleware("auth")
            .middlewares(["admin", "audit"]);
        assert_eq!(route.middlewares, ["auth", "admin", "audit"]);
    }

    #[test]
    fn test_bad_template_is_an_error() {
        assert!(Route::get("/users/{id", "UserController@show").is_err());
    }
}
