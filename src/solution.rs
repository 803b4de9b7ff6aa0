use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display tag attached to every solution. Nothing branches on it besides styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Syntax,
    Runtime,
    Logic,
    Network,
    Dependency,
    Configuration,
    Default,
    External,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Runtime => "runtime",
            Self::Logic => "logic",
            Self::Network => "network",
            Self::Dependency => "dependency",
            Self::Configuration => "configuration",
            Self::Default => "default",
            Self::External => "external",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Resource {
    pub label: String,
    pub url: String,
}

/// A diagnosed problem and how to fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Solution {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
    pub tips: Vec<String>,
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub sourced_externally: bool,
}

const FOUND_DESCRIPTION: &str = "StackOverflow has a related question with an accepted answer.";

impl Solution {
    /// Solution pointing at the top search hit of the remote knowledge base.
    pub fn from_search_hit(title: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            description: FOUND_DESCRIPTION.to_string(),
            category: Category::External,
            steps: Vec::new(),
            code_example: None,
            tips: vec!["Check the accepted answer in the linked thread".to_string()],
            resources: vec![Resource {
                label: "View Solution on StackOverflow".to_string(),
                url: link.to_string(),
            }],
            sourced_externally: true,
        }
    }

    pub fn no_solution_found() -> Self {
        Self {
            title: "No solution found".to_string(),
            description: "Couldn't fetch a relevant answer from StackOverflow.".to_string(),
            category: Category::Default,
            steps: vec!["Try searching with different keywords".to_string()],
            code_example: None,
            tips: vec!["Check the exact wording of your error".to_string()],
            resources: Vec::new(),
            sourced_externally: true,
        }
    }

    pub fn api_error() -> Self {
        Self {
            title: "API Error".to_string(),
            description: "Could not connect to StackOverflow API.".to_string(),
            category: Category::Network,
            steps: vec![
                "Check your internet connection".to_string(),
                "Try again later".to_string(),
            ],
            code_example: None,
            tips: Vec::new(),
            resources: Vec::new(),
            sourced_externally: true,
        }
    }
}

/// Compile-time counterpart of [`Solution`] used by the rule table.
#[derive(Debug)]
pub struct SolutionTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub steps: &'static [&'static str],
    pub code_example: Option<&'static str>,
    pub tips: &'static [&'static str],
    pub resources: &'static [ResourceTemplate],
}

#[derive(Debug)]
pub struct ResourceTemplate {
    pub label: &'static str,
    pub url: &'static str,
}

impl SolutionTemplate {
    pub fn to_solution(&self) -> Solution {
        Solution {
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            steps: self.steps.iter().map(|s| s.to_string()).collect(),
            code_example: self.code_example.map(str::to_string),
            tips: self.tips.iter().map(|s| s.to_string()).collect(),
            resources: self
                .resources
                .iter()
                .map(|r| Resource {
                    label: r.label.to_string(),
                    url: r.url.to_string(),
                })
                .collect(),
            sourced_externally: false,
        }
    }
}
