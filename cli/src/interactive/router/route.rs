//! Route definitions and utilities

use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(pub String);

impl RouteId {
    /// Create a new route ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Route definition containing metadata and configuration
#[derive(Debug, Clone)]
pub struct Route {
    /// Unique identifier for this route
    pub id: RouteId,
    /// Human-readable name for this route
    pub name: String,
    /// Optional description of what this route displays
    pub description: Option<String>,
    /// Whether this route is the default route
    pub is_default: bool,
}

impl Route {
    /// Create a new route with the given ID and name
    pub fn new(id: impl Into<RouteId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            is_default: false,
        }
    }

    /// Set the description for this route
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this route as the default route
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_id_traits() {
        let route_id = RouteId::from("glossary");

        assert_eq!(format!("{}", route_id), "glossary");

        let s: &str = route_id.as_ref();
        assert_eq!(s, "glossary");

        let s: &str = route_id.borrow();
        assert_eq!(s, "glossary");
    }

    #[test]
    fn test_route_builder() {
        let route = Route::new("home", "Home")
            .with_description("Feature menu")
            .as_default();

        assert_eq!(route.id, RouteId::from("home"));
        assert_eq!(route.description.as_deref(), Some("Feature menu"));
        assert!(route.is_default);
    }
}
