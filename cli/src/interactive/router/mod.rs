//! Router module for managing page navigation
//!
//! This module provides a small routing system used to switch between
//! the demo's pages in the interactive application.

pub mod core;
pub mod route;

// Re-export commonly used types
pub use core::{Router, RouterConfig, RouterError, RouterResult};
pub use route::{Route, RouteId};
