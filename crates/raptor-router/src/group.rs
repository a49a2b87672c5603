//! Route groups: batch prefix and middleware application.

use crate::error::Result;
use crate::route::Route;

/// A prefix/middleware wrapper applied to a batch of routes.
///
/// Groups are transient builders: [`group`](Self::group) produces brand-new
/// routes with the prefix concatenated and the group's middleware running
/// before each route's own. The input routes are borrowed and never
/// mutated.
///
/// # Example
///
/// ```
/// use raptor_router::{Route, RouteGroup};
///
/// let admin = RouteGroup::prefix("/admin")
///     .middleware(["auth", "admin"])
///     .group(&[Route::get("/users", "AdminController@users").unwrap()])
///     .unwrap();
/// assert_eq!(admin[0].path, "/admin/users");
/// assert_eq!(admin[0].middlewares, ["auth", "admin"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteGroup {
    prefix: String,
    middlewares: Vec<String>,
}

impl RouteGroup {
    /// Starts a group with a path prefix. Trailing slashes are stripped.
    pub fn prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
            middlewares: Vec::new(),
        }
    }

    /// Sets the group's middleware list, replacing any previous one.
    #[must_use]
    pub fn middleware<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middlewares = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Applies the group to a batch of routes, yielding new routes.
    ///
    /// Each new route recompiles its pattern over the prefixed path. A
    /// route at `/` maps to the bare prefix, so `/admin` + `/` matches
    /// `/admin` exactly rather than `/admin/`.
    ///
    /// # Errors
    ///
    /// Propagates pattern compilation failures from the prefixed paths.
    pub fn group(&self, routes: &[Route]) -> Result<Vec<Route>> {
        routes.iter().map(|route| self.apply(route)).collect()
    }

    fn apply(&self, route: &Route) -> Result<Route> {
        let path = if route.path == "/" && !self.prefix.is_empty() {
            self.prefix.clone()
        } else {
            let concatenated = format!("{}{}", self.prefix, route.path);
            if concatenated.is_empty() {
                "/".to_string()
            } else {
                concatenated
            }
        };

        let mut grouped = Route::new(route.method, &path, &route.action)?;
        grouped.name = route.name.clone();
        grouped.middlewares = self
            .middlewares
            .iter()
            .chain(&route.middlewares)
            .cloned()
            .collect();
        Ok(grouped)
    }
}
