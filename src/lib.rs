pub mod analyzer;
pub mod config;
pub mod remote;
pub mod render;
pub mod rules;
pub mod solution;
pub mod sound;
pub mod theme;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use analyzer::{Analyzer, Strategy};
pub use config::Config;
pub use remote::{RemoteClassifier, RemoteError, SearchBackend};
pub use rules::{classify, RuleSet};
pub use solution::{Category, Resource, Solution};
