//! Application composition: route tables + handler registry → dispatcher.

use raptor_router::{Dispatcher, Result, Router};
use tracing::info;

use crate::controllers;
use crate::routes;

/// Builds the fully loaded dispatcher.
///
/// This is the single load-phase composition point: after it returns, the
/// router and registry are read-only and the dispatcher may serve
/// requests concurrently.
///
/// # Errors
///
/// Fails fast on any malformed path template; the application must not
/// start serving with an uncompiled route.
pub fn build() -> Result<Dispatcher> {
    let mut router = Router::new();
    router.register_routes(routes::web_routes()?);
    router.register_routes(routes::api_routes()?);

    let registry = controllers::registry();
    info!(
        routes = router.routes().len(),
        handlers = registry.len(),
        "application loaded"
    );
    Ok(Dispatcher::new(router, registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_succeeds() {
        let dispatcher = build().unwrap();
        assert!(!dispatcher.router().routes().is_empty());
    }

    #[test]
    fn test_every_declared_action_has_a_handler() {
        let dispatcher = build().unwrap();
        let registry = controllers::registry();

        for route in dispatcher.router().routes() {
            let action = raptor_router::ActionDescriptor::parse(&route.action);
            assert!(
                registry.lookup(&action).is_some(),
                "no handler registered for {action}",
            );
        }
    }
}
