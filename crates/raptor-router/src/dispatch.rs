//! Action dispatch: an explicit handler registry instead of reflection.
//!
//! Action strings such as `UserController@show` name handlers. Rather
//! than resolving controller names to code at request time, a
//! [`HandlerRegistry`] is populated once at startup with a handler
//! function per action string, and the [`Dispatcher`] looks handlers up
//! by the exact key the routes declare.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::warn;

use crate::action::ActionDescriptor;
use crate::error::RouterError;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// A boxed async request handler.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// Maps action strings to handlers. Populated once during startup, then
/// read-only, like the route table itself.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under an action string.
    ///
    /// The key must equal the action as declared in the route, e.g.
    /// `UserController@show` or a bare callable name. A later
    /// registration under the same key replaces the earlier one.
    pub fn register<F, Fut>(&mut self, action: &str, handler: F)
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.handlers.insert(
            action.to_string(),
            Arc::new(move |request| Box::pin(handler(request))),
        );
    }

    /// Looks up the handler for a parsed action descriptor.
    pub fn lookup(&self, action: &ActionDescriptor) -> Option<Handler> {
        self.handlers.get(&action.key()).cloned()
    }

    /// Returns the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Resolves requests through a router and invokes registered handlers.
pub struct Dispatcher {
    router: Router,
    registry: HandlerRegistry,
}

impl Dispatcher {
    /// Creates a dispatcher over a loaded router and registry.
    pub fn new(router: Router, registry: HandlerRegistry) -> Self {
        Self { router, registry }
    }

    /// Returns the underlying router, e.g. for URL generation.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Dispatches one request to its handler.
    ///
    /// An unroutable request becomes a 404. A route whose action has no
    /// registered handler is a configuration gap and becomes a 500; the
    /// dispatcher itself never tears down over it.
    pub async fn dispatch(&self, mut request: Request) -> Response {
        let resolution = match self.router.resolve(request.method, &request.path) {
            Ok(resolution) => resolution,
            Err(RouterError::RouteNotFound { .. }) => return Response::not_found(),
            Err(err) => {
                warn!(%err, "resolution failed");
                return Response::internal_server_error();
            }
        };

        let Some(handler) = self.registry.lookup(&resolution.action) else {
            warn!(action = %resolution.action, path = %request.path, "no handler registered");
            return Response::internal_server_error();
        };

        request.params = resolution.parameters;
        handler(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    async fn show_user(request: Request) -> Response {
        let id = request.params.get("id").unwrap_or("unknown");
        Response::text(format!("user {id}"))
    }

    fn router() -> Router {
        let mut router = Router::new();
        router.add_route(Route::get("/users/{id}", "UserController@show").unwrap());
        router
    }

    #[tokio::test]
    async fn test_dispatch_invokes_handler_with_params() {
        let mut registry = HandlerRegistry::new();
        registry.register("UserController@show", show_user);
        let dispatcher = Dispatcher::new(router(), registry);

        let response = dispatcher.dispatch(Request::get("/users/42")).await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body_string(), Some("user 42".to_string()));
    }

    #[tokio::test]
    async fn test_dispatch_unmatched_is_404() {
        let dispatcher = Dispatcher::new(router(), HandlerRegistry::new());

        let response = dispatcher.dispatch(Request::get("/nowhere")).await;
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_dispatch_unregistered_action_is_500() {
        let dispatcher = Dispatcher::new(router(), HandlerRegistry::new());

        let response = dispatcher.dispatch(Request::get("/users/42")).await;
        assert_eq!(response.status, 500);
    }

    #[test]
    fn test_registry_lookup_by_action_key() {
        let mut registry = HandlerRegistry::new();
        registry.register("UserController@show", show_user);

        assert_eq!(registry.len(), 1);
        assert!(registry
            .lookup(&ActionDescriptor::parse("UserController@show"))
            .is_some());
        assert!(registry
            .lookup(&ActionDescriptor::parse("UserController@index"))
            .is_none());
    }
}
