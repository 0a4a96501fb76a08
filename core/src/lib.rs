//! # ClaimPulse Core
//!
//! Core library for ClaimPulse - a demo health-insurance assistant.
//!
//! Everything here runs on canned data and a seedable random source.
//! No network calls, no real claims, no protected health information.

// Core modules
pub mod claim;
pub mod config;
pub mod documentation;
pub mod eob;
pub mod error;
pub mod feedback;
pub mod glossary;
pub mod policy;
pub mod scenario;
pub mod treatment;
pub mod upload;

// Re-export commonly used types
pub use config::{DemoConfig, DemoOperation};
pub use error::{Error, Result, ValidationError};
pub use scenario::{FeatureArea, Scenario, ScenarioRotator, ScenarioSet};

/// Current version of the claimpulse-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
