//! The route table: registration, resolution, and reverse URL generation.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::action::ActionDescriptor;
use crate::error::{Result, RouterError};
use crate::request::{Method, PathParams};
use crate::route::Route;

/// The outcome of resolving a request against the route table.
#[derive(Debug)]
pub struct Resolution<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// Parameters extracted from the path.
    pub parameters: PathParams,
    /// The parsed action descriptor, handed to the dispatcher unmodified.
    pub action: ActionDescriptor,
    /// The matched route's middleware tags, in execution order.
    pub middlewares: &'a [String],
}

/// Ordered route table with a name index for reverse URL lookup.
///
/// The router has a two-phase lifecycle: it is populated once during
/// startup, then serves as a read-only table. [`resolve`](Self::resolve)
/// and [`url`](Self::url) are pure reads and safe to call concurrently
/// once loading has finished.
///
/// Registration order is the authoritative match-priority order:
/// resolution scans linearly and the first matching route wins. Declare
/// literal routes such as `/users/create` before parameterized siblings
/// such as `/users/{id}`, or the parameter route captures them.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
    named: HashMap<String, usize>,
}

impl Router {
    /// Creates a new empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single route to the table.
    ///
    /// A named route inserts or overwrites its entry in the name index;
    /// when two routes share a name, the later registration wins there
    /// while both stay in the ordered table. Identical method+path pairs
    /// are not deduplicated either: the later duplicate is unreachable
    /// for matching but still listed by [`routes`](Self::routes).
    pub fn add_route(&mut self, route: Route) {
        if let Some(name) = &route.name {
            self.named.insert(name.clone(), self.routes.len());
        }
        info!(method = %route.method, path = %route.path, action = %route.action, "registered route");
        self.routes.push(route);
    }

    /// Registers a batch of routes, preserving their order.
    pub fn register_routes(&mut self, routes: Vec<Route>) {
        for route in routes {
            self.add_route(route);
        }
    }

    /// Returns the ordered route table, for listings and diagnostics.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a request to the first matching route.
    ///
    /// The query string, if any, is split off before matching; it belongs
    /// to the caller, not the route table. Scans registration order and
    /// returns the first route whose method and pattern both match,
    /// together with its extracted parameters, parsed action descriptor,
    /// and middleware tags.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::RouteNotFound`] when nothing matches; the
    /// transport layer maps this to a 404.
    pub fn resolve(&self, method: Method, raw_path: &str) -> Result<Resolution<'_>> {
        let path = raw_path.split_once('?').map_or(raw_path, |(path, _)| path);

        for route in &self.routes {
            if route.matches(method, path) {
                debug!(%method, path, route = %route.path, action = %route.action, "resolved");
                return Ok(Resolution {
                    parameters: route.extract_parameters(path),
                    action: ActionDescriptor::parse(&route.action),
                    middlewares: &route.middlewares,
                    route,
                });
            }
        }

        debug!(%method, path, "no route matched");
        Err(RouterError::RouteNotFound {
            method: method.to_string(),
            path: path.to_string(),
        })
    }

    /// Generates a URL for a named route.
    ///
    /// Each supplied parameter replaces its `{name}` (or `{name?}`)
    /// placeholder in the original path template. Supplied parameters with
    /// no matching placeholder are ignored; placeholders with no supplied
    /// value are left as literal `{name}` text. The template is walked in
    /// a single left-to-right pass, so substituted values are never
    /// re-scanned for placeholders. No check is made that the generated
    /// URL satisfies the route's own matcher.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::NamedRouteNotFound`] for an unregistered
    /// name. This is a configuration error in the caller and is raised
    /// immediately.
    pub fn url(&self, name: &str, parameters: &HashMap<String, String>) -> Result<String> {
        let index = self
            .named
            .get(name)
            .ok_or_else(|| RouterError::NamedRouteNotFound(name.to_string()))?;
        let route = &self.routes[*index];

        let mut url = String::with_capacity(route.path.len());
        let mut rest = route.path.as_str();
        while let Some(open) = rest.find('{') {
            let (literal, tail) = rest.split_at(open);
            url.push_str(literal);

            // A registered route always compiled, so braces are balanced.
            let Some(close) = tail.find('}') else {
                url.push_str(tail);
                return Ok(url);
            };
            let raw = &tail[1..close];
            let key = raw.strip_suffix('?').unwrap_or(raw);
            match parameters.get(key) {
                Some(value) => url.push_str(value),
                None => url.push_str(&tail[..=close]),
            }
            rest = &tail[close + 1..];
        }
        url.push_str(rest);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_literal_resolution() {
        let mut router = Router::new();
        router.add_route(Route::get("/about", "HomeController@about").unwrap());

        let resolution = router.resolve(Method::Get, "/about").unwrap();
        assert_eq!(resolution.route.path, "/about");
        assert!(resolution.parameters.is_empty());
        assert_eq!(
            resolution.action.controller.as_deref(),
            Some("HomeController")
        );
        assert_eq!(resolution.action.method, "about");
    }

    #[test]
    fn test_parameter_extraction() {
        let mut router = Router::new();
        router.add_route(Route::get("/users/{id}", "UserController@show").unwrap());

        let resolution = router.resolve(Method::Get, "/users/42").unwrap();
        assert_eq!(resolution.parameters.get("id"), Some("42"));

        // An empty segment does not satisfy a required parameter.
        assert!(router.resolve(Method::Get, "/users/").is_err());
    }

    #[test]
    fn test_query_string_never_matches() {
        let mut router = Router::new();
        router.add_route(Route::get("/users/{id}", "UserController@show").unwrap());

        let resolution = router.resolve(Method::Get, "/users/42?tab=posts").unwrap();
        assert_eq!(resolution.parameters.get("id"), Some("42"));
    }

    #[test]
    fn test_method_mismatch_is_not_found() {
        let mut router = Router::new();
        router.add_route(Route::get("/users", "UserController@index").unwrap());

        assert!(matches!(
            router.resolve(Method::Post, "/users"),
            Err(RouterError::RouteNotFound { .. })
        ));
    }

    #[test]
    fn test_first_match_wins() {
        // Declared in the safe order: the literal route is found first.
        let mut router = Router::new();
        router.add_route(Route::get("/users/create", "UserController@create").unwrap());
        router.add_route(Route::get("/users/{id}", "UserController@show").unwrap());

        let resolution = router.resolve(Method::Get, "/users/create").unwrap();
        assert_eq!(resolution.route.action, "UserController@create");

        // Declared the other way round, the parameter route captures the
        // literal path: declaration order decides, nothing else.
        let mut router = Router::new();
        router.add_route(Route::get("/users/{id}", "UserController@show").unwrap());
        router.add_route(Route::get("/users/create", "UserController@create").unwrap());

        let resolution = router.resolve(Method::Get, "/users/create").unwrap();
        assert_eq!(resolution.route.action, "UserController@show");
        assert_eq!(resolution.parameters.get("id"), Some("create"));
    }

    #[test]
    fn test_duplicate_routes_kept_in_table() {
        let mut router = Router::new();
        router.add_route(Route::get("/ping", "A@ping").unwrap());
        router.add_route(Route::get("/ping", "B@ping").unwrap());

        assert_eq!(router.routes().len(), 2);
        let resolution = router.resolve(Method::Get, "/ping").unwrap();
        assert_eq!(resolution.route.action, "A@ping");
    }

    #[test]
    fn test_name_index_later_registration_wins() {
        let mut router = Router::new();
        router.add_route(Route::get("/", "HomeController@index").unwrap().name("home"));
        router.add_route(Route::get("/home", "HomeController@home").unwrap().name("home"));

        assert_eq!(router.routes().len(), 2);
        assert_eq!(router.url("home", &HashMap::new()).unwrap(), "/home");
    }

    #[test]
    fn test_url_generation() {
        let mut router = Router::new();
        router.add_route(
            Route::get("/users/{id}", "UserController@show")
                .unwrap()
                .name("users.show"),
        );

        let url = router.url("users.show", &params(&[("id", "7")])).unwrap();
        assert_eq!(url, "/users/7");
    }

    #[test]
    fn test_url_unknown_name_fails() {
        let router = Router::new();
        assert!(matches!(
            router.url("missing.route", &HashMap::new()),
            Err(RouterError::NamedRouteNotFound(name)) if name == "missing.route"
        ));
    }

    #[test]
    fn test_url_extra_parameters_ignored() {
        let mut router = Router::new();
        router.add_route(Route::get("/about", "HomeController@about").unwrap().name("about"));

        let url = router.url("about", &params(&[("junk", "1")])).unwrap();
        assert_eq!(url, "/about");
    }

    #[test]
    fn test_url_missing_parameter_left_literal() {
        let mut router = Router::new();
        router.add_route(
            Route::get("/users/{id}/posts/{post}", "UserController@post")
                .unwrap()
                .name("users.post"),
        );

        let url = router.url("users.post", &params(&[("id", "3")])).unwrap();
        assert_eq!(url, "/users/3/posts/{post}");
    }

    #[test]
    fn test_url_optional_placeholder_substituted() {
        let mut router = Router::new();
        router.add_route(
            Route::get("/files/{name?}", "FileController@show")
                .unwrap()
                .name("files.show"),
        );

        let url = router.url("files.show", &params(&[("name", "report")])).unwrap();
        assert_eq!(url, "/files/report");
    }

    #[test]
    fn test_url_substituted_values_are_not_rescanned() {
        let mut router = Router::new();
        router.add_route(
            Route::get("/posts/{a}/{b}", "PostController@pair")
                .unwrap()
                .name("posts.pair"),
        );

        // A value that spells out another placeholder must be spliced in
        // verbatim, never treated as a placeholder itself.
        let url = router
            .url("posts.pair", &params(&[("a", "{b}"), ("b", "x")]))
            .unwrap();
        assert_eq!(url, "/posts/{b}/x");
    }

    #[test]
    fn test_url_round_trip() {
        let mut router = Router::new();
        router.add_route(
            Route::get("/users/{id}/posts/{post}", "UserController@post")
                .unwrap()
                .name("users.post"),
        );

        let supplied = params(&[("id", "3"), ("post", "nine")]);
        let url = router.url("users.post", &supplied).unwrap();
        let resolution = router.resolve(Method::Get, &url).unwrap();
        assert_eq!(resolution.parameters.get("id"), Some("3"));
        assert_eq!(resolution.parameters.get("post"), Some("nine"));
    }
}
