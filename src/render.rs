use std::fmt::Write;

use crate::solution::Solution;
use crate::theme::Theme;

/// Formats a solution for the terminal.
pub fn render(solution: &Solution, theme: &Theme) -> String {
    let mut out = String::new();

    let badge = format!("[{}]", solution.category.as_str().to_uppercase());
    let _ = writeln!(
        out,
        "{} {}",
        theme.category(solution.category).apply(&badge),
        theme.title.apply(&solution.title)
    );
    if solution.sourced_externally {
        let _ = writeln!(out, "{}", theme.tip.apply("(found via StackOverflow search)"));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", theme.description.apply(&solution.description));

    if !solution.steps.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", theme.heading.apply("Steps to fix"));
        for (idx, step) in solution.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", idx + 1, theme.step.apply(step));
        }
    }

    if let Some(code) = solution.code_example.as_deref().filter(|c| !c.is_empty()) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", theme.heading.apply("Example"));
        let _ = writeln!(out, "```");
        for line in code.lines() {
            let _ = writeln!(out, "{}", theme.code.apply(line));
        }
        let _ = writeln!(out, "```");
    }

    if !solution.tips.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", theme.heading.apply("Tips"));
        for tip in &solution.tips {
            let _ = writeln!(out, "  * {}", theme.tip.apply(tip));
        }
    }

    if !solution.resources.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", theme.heading.apply("Further reading"));
        for resource in &solution.resources {
            let _ = writeln!(
                out,
                "  - {}: {}",
                resource.label,
                theme.resource.apply(&resource.url)
            );
        }
    }

    out
}
