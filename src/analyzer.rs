use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

use crate::config::Config;
use crate::remote::{RemoteClassifier, SearchBackend};
use crate::rules::RuleSet;
use crate::solution::Solution;

/// How the local rules and the remote search are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Local rule table only, no network access.
    Local,
    /// Remote knowledge-base search only.
    #[default]
    Remote,
    /// Remote search, answered by the local rules when the search fails.
    RemoteThenLocal,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::RemoteThenLocal => "remote-then-local",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}', expected local, remote or remote-then-local",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            "remote-then-local" | "remote_then_local" => Ok(Self::RemoteThenLocal),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

pub struct Analyzer {
    strategy: Strategy,
    rules: RuleSet,
    remote: RemoteClassifier,
}

impl Analyzer {
    pub fn new(strategy: Strategy, rules: RuleSet, remote: RemoteClassifier) -> Self {
        Self {
            strategy,
            rules,
            remote,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.classifier.strategy,
            RuleSet::builtin(),
            RemoteClassifier::from_config(&config.remote),
        )
    }

    /// Builtin rules with a custom search backend.
    pub fn with_backend(strategy: Strategy, backend: impl SearchBackend + 'static) -> Self {
        Self::new(strategy, RuleSet::builtin(), RemoteClassifier::new(backend))
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub async fn analyze(&self, error_text: &str) -> Solution {
        let error_text = error_text.trim();
        info!(strategy = %self.strategy, chars = error_text.len(), "analyzing error");

        match self.strategy {
            Strategy::Local => self.rules.classify(error_text),
            Strategy::Remote => self.remote.classify_remote(error_text).await,
            Strategy::RemoteThenLocal => match self.remote.lookup(error_text).await {
                Ok(Some(item)) => Solution::from_search_hit(&item.title, &item.link),
                Ok(None) => Solution::no_solution_found(),
                Err(e) => {
                    warn!(error = %e, "remote search failed, falling back to local rules");
                    self.rules.classify(error_text)
                }
            },
        }
    }
}
