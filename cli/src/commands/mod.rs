//! CLI command implementations

pub mod glossary;
pub mod interactive;
pub mod scenarios;

pub use glossary::glossary_command;
pub use interactive::interactive_command;
pub use scenarios::scenarios_command;
