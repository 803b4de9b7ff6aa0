use crate::solution::{Solution, SolutionTemplate};
use tracing::debug;

mod catalog;

pub use catalog::COMMON_ERRORS;

/// Error classes the builtin rules recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UndefinedProperty,
    Syntax,
    Reference,
    NotAFunction,
    NotFound,
    Cors,
    MissingDependency,
    General,
}

/// Substring test run against the lower-cased error text.
#[derive(Debug)]
pub enum Predicate {
    AnyOf(&'static [&'static str]),
    AllOf(&'static [&'static str]),
}

impl Predicate {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::AnyOf(needles) => needles.iter().any(|n| lowered.contains(n)),
            Self::AllOf(needles) => needles.iter().all(|n| lowered.contains(n)),
        }
    }
}

#[derive(Debug)]
pub struct Rule {
    pub kind: ErrorKind,
    pub predicate: Predicate,
    pub template: SolutionTemplate,
}

/// Ordered rules plus the answer given when none of them match.
/// Rules can overlap, so declaration order decides.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    rules: &'static [Rule],
    fallback: &'static SolutionTemplate,
}

impl RuleSet {
    pub const fn new(rules: &'static [Rule], fallback: &'static SolutionTemplate) -> Self {
        Self { rules, fallback }
    }

    pub fn builtin() -> Self {
        Self::new(catalog::BUILTIN_RULES, &catalog::GENERAL_ERROR)
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn find(&self, error_text: &str) -> Option<&'static Rule> {
        let lowered = error_text.to_lowercase();
        self.rules.iter().find(|rule| rule.predicate.matches(&lowered))
    }

    pub fn kind_of(&self, error_text: &str) -> ErrorKind {
        self.find(error_text)
            .map(|rule| rule.kind)
            .unwrap_or(ErrorKind::General)
    }

    pub fn classify(&self, error_text: &str) -> Solution {
        match self.find(error_text) {
            Some(rule) => {
                debug!(kind = ?rule.kind, "matched local rule");
                rule.template.to_solution()
            }
            None => {
                debug!("no local rule matched, using general analysis");
                self.fallback.to_solution()
            }
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classifies with the builtin rule set.
pub fn classify(error_text: &str) -> Solution {
    RuleSet::builtin().classify(error_text)
}
