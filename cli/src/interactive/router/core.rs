//! Navigation state for the interactive application
//!
//! The app shell builds a fixed route table at startup and navigates by
//! route id; history is kept so Esc-style back navigation can restore
//! the previous page.

use super::route::{Route, RouteId};
use std::collections::HashMap;

/// Errors raised while building the route table or navigating it.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    #[error("Initial route '{0}' not found in configuration")]
    InitialRouteMissing(String),
}

pub type RouterResult<T> = Result<T, RouterError>;

/// The route table plus the starting page.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    routes: HashMap<RouteId, Route>,
    default_route: Option<RouteId>,
    /// History entries kept beyond this are discarded, oldest first.
    pub max_history: usize,
}

impl RouterConfig {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            default_route: None,
            max_history: 50,
        }
    }

    /// Register a route. The first route added with `as_default` becomes
    /// the starting page.
    pub fn add_route(mut self, route: Route) -> Self {
        if route.is_default && self.default_route.is_none() {
            self.default_route = Some(route.id.clone());
        }
        self.routes.insert(route.id.clone(), route);
        self
    }

    pub fn with_default_route(mut self, route_id: RouteId) -> Self {
        self.default_route = Some(route_id);
        self
    }

    pub fn default_route(&self) -> Option<&RouteId> {
        self.default_route.as_ref()
    }

    pub fn routes(&self) -> &HashMap<RouteId, Route> {
        &self.routes
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the active route and a bounded back-history over a fixed
/// route table.
#[derive(Debug, Clone)]
pub struct Router {
    config: RouterConfig,
    current: RouteId,
    /// Most recent first.
    history: Vec<RouteId>,
}

impl Router {
    /// Build a router from a configuration. The starting page is the
    /// configured default, falling back to any registered route; an
    /// empty table is an error.
    pub fn new(config: RouterConfig) -> RouterResult<Self> {
        let current = match config.default_route() {
            Some(route_id) => route_id.clone(),
            None => config
                .routes()
                .keys()
                .next()
                .cloned()
                .ok_or(RouterError::NoRoutes)?,
        };

        if !config.routes().contains_key(&current) {
            return Err(RouterError::InitialRouteMissing(current.0));
        }

        Ok(Self {
            config,
            current,
            history: Vec::new(),
        })
    }

    /// Switch to a route, recording the departed route in history.
    /// Navigating to the current route is a no-op.
    pub fn navigate(&mut self, id: impl Into<RouteId>) -> RouterResult<()> {
        let route_id = id.into();
        if !self.config.routes().contains_key(&route_id) {
            return Err(RouterError::RouteNotFound(route_id.0));
        }
        if route_id != self.current {
            self.history.insert(0, self.current.clone());
            self.history.truncate(self.config.max_history);
            self.current = route_id;
        }
        Ok(())
    }

    /// Pop the most recent history entry and return to it. Returns
    /// false when there is nowhere to go back to.
    pub fn go_back(&mut self) -> bool {
        match self.history.first().cloned() {
            Some(previous) => {
                self.history.remove(0);
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.config.routes().get(&self.current)
    }

    pub fn current_route_id(&self) -> &RouteId {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_route_config() -> RouterConfig {
        RouterConfig::new()
            .add_route(Route::new("home", "Home"))
            .add_route(Route::new("glossary", "Glossary"))
            .with_default_route("home".into())
    }

    #[test]
    fn test_navigation_and_history() {
        let mut router = Router::new(two_route_config()).expect("router");

        assert_eq!(router.current_route_id().0, "home");
        assert!(!router.can_go_back());

        router.navigate("glossary").expect("navigate");
        assert_eq!(router.current_route_id().0, "glossary");
        assert!(router.can_go_back());

        assert!(router.go_back());
        assert_eq!(router.current_route_id().0, "home");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_unknown_route_is_rejected() {
        let mut router = Router::new(two_route_config()).expect("router");
        let err = router.navigate("nowhere").unwrap_err();
        assert_eq!(err.to_string(), "Route 'nowhere' not found");
        assert_eq!(router.current_route_id().0, "home");
    }

    #[test]
    fn test_empty_config_is_an_error() {
        let err = Router::new(RouterConfig::new()).unwrap_err();
        assert_eq!(err.to_string(), "No routes configured");
    }

    #[test]
    fn test_navigating_to_current_route_keeps_history() {
        let mut router = Router::new(two_route_config()).expect("router");
        router.navigate("home").expect("navigate");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut config = two_route_config();
        config.max_history = 1;
        let mut router = Router::new(config).expect("router");

        router.navigate("glossary").expect("navigate");
        router.navigate("home").expect("navigate");
        router.navigate("glossary").expect("navigate");

        assert!(router.go_back());
        assert!(!router.can_go_back());
    }
}
