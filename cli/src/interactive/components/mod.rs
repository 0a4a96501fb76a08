//! Shared components for the interactive application

pub mod logo;
pub mod nav_bar;
pub mod spinner;

pub use logo::ClaimPulseLogo;
pub use nav_bar::NavBar;
pub use spinner::Spinner;
