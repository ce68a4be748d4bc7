mod blocks;
mod fields;
mod plan;

pub use plan::{ParsedPlan, Task};

use regex::Regex;

/// A leading block of prose this long or longer is taken as the intro
const MIN_INTRO_LINES: usize = 3;

/// Parse one AI-generated plan response into structure.
///
/// Total on any input: malformed text degrades to an intro-only plan or
/// to fallback-titled tasks, never an error. The backend's output format
/// drifted over time (`**Label**:` markdown vs. looser `Label:` text
/// with `---` separators), so both conventions are accepted.
pub fn parse_plan(text: &str) -> ParsedPlan {
    let normalized = text.replace("\r\n", "\n");
    let (core, pro_tip) = split_pro_tip(normalized.trim());

    if core.is_empty() {
        return ParsedPlan {
            pro_tip,
            ..ParsedPlan::default()
        };
    }

    let mut blocks = blocks::split(&core);

    // A leading block of plain prose is the intro, not a task
    let mut intro = String::new();
    if let Some(first) = blocks.first() {
        if first.heading.is_empty()
            && !blocks::has_micro_task_label(first)
            && first.lines.len() >= MIN_INTRO_LINES
        {
            intro = first.lines.join("\n").trim().to_string();
            blocks.remove(0);
        }
    }

    let tasks = blocks
        .into_iter()
        .map(|mut block| {
            blocks::detect_heading(&mut block);
            fields::extract_task(&block)
        })
        .collect();

    ParsedPlan {
        intro,
        tasks,
        pro_tip,
    }
}

/// Capture and remove a trailing "Pro Tip:" section.
///
/// Returns the remaining core text and the captured tip, both trimmed.
fn split_pro_tip(text: &str) -> (String, String) {
    let Ok(re) = Regex::new(r"(?ims)^\s*pro tip:\s*(.*)") else {
        return (text.to_string(), String::new());
    };

    match re.captures(text) {
        Some(caps) => {
            let pro_tip = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            let core = caps
                .get(0)
                .map(|m| text[..m.start()].trim().to_string())
                .unwrap_or_else(|| text.to_string());
            (core, pro_tip)
        }
        None => (text.to_string(), String::new()),
    }
}
