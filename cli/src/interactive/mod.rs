//! Interactive terminal UI for the demo

pub mod app;
pub mod components;
pub mod pages;
pub mod router;
