use colored::Colorize;

use crate::parser::ParsedPlan;

/// Render a parsed plan for the terminal.
///
/// Fields are always present on the plan, so sections are simply
/// skipped when empty.
pub fn render_plan(plan: &ParsedPlan) -> String {
    let mut out = String::new();

    if !plan.intro.is_empty() {
        out.push_str(&plan.intro);
        out.push_str("\n\n");
    }

    for task in &plan.tasks {
        out.push_str(&format!("{}\n", task.title.green().bold()));

        if !task.description.is_empty() {
            out.push_str(&indent(&task.description));
        }

        if !task.tips.is_empty() {
            out.push_str(&format!("  {}\n", "Small Tips:".cyan()));
            for tip in &task.tips {
                out.push_str(&format!("    - {}\n", tip));
            }
        }

        if !task.why.is_empty() {
            out.push_str(&format!("  {} {}\n", "Why:".cyan(), task.why));
        }
        if !task.build.is_empty() {
            out.push_str(&format!("  {} {}\n", "Build:".cyan(), task.build));
        }
        if !task.resources.is_empty() {
            out.push_str(&format!("  {} {}\n", "Resources:".cyan(), task.resources));
        }

        out.push('\n');
    }

    if !plan.pro_tip.is_empty() {
        out.push_str(&format!("{} {}\n", "Pro Tip:".yellow().bold(), plan.pro_tip));
    }

    out
}

fn indent(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out
}
