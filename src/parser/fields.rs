use std::collections::HashSet;

use regex::Regex;

use super::blocks::Block;
use super::plan::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Title,
    Description,
    SmallTips,
    Why,
    Build,
    Resources,
}

impl Label {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "title" => Some(Label::Title),
            "description" => Some(Label::Description),
            "small tips" => Some(Label::SmallTips),
            "why" => Some(Label::Why),
            "build" => Some(Label::Build),
            "resources" => Some(Label::Resources),
            _ => None,
        }
    }
}

/// Extract a task from one block by label-driven section matching.
///
/// Labels are recognized case-insensitively in both the `**Label**:`
/// and bare `Label:` spellings; a section's content runs until the next
/// recognized label line or the end of the block.
pub fn extract_task(block: &Block) -> Task {
    let sections = scan_sections(&block.lines);

    let title = section_first_line(&sections, Label::Title)
        .or_else(|| {
            if block.heading.is_empty() {
                None
            } else {
                Some(block.heading.clone())
            }
        })
        .unwrap_or_else(|| "Task".to_string());

    Task {
        title,
        description: section_text(&sections, Label::Description),
        tips: collect_tips(&sections),
        why: section_text(&sections, Label::Why),
        build: section_text(&sections, Label::Build),
        resources: section_text(&sections, Label::Resources),
    }
}

fn scan_sections(lines: &[String]) -> Vec<(Label, Vec<String>)> {
    let label_re = match Regex::new(
        r"(?i)^\s*(?:\*\*\s*(title|description|small tips|why|build|resources)\s*\*\*\s*:?|(title|description|small tips|why|build|resources)\s*:)\s*(.*)$",
    ) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let mut sections: Vec<(Label, Vec<String>)> = Vec::new();

    for line in lines {
        let matched = label_re.captures(line).and_then(|caps| {
            let name = caps.get(1).or_else(|| caps.get(2))?.as_str();
            let label = Label::parse(name)?;
            let rest = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
            Some((label, rest.to_string()))
        });

        match matched {
            Some((label, rest)) => {
                let content = if rest.is_empty() { Vec::new() } else { vec![rest] };
                sections.push((label, content));
            }
            None => {
                if let Some((_, content)) = sections.last_mut() {
                    content.push(line.clone());
                }
            }
        }
    }

    sections
}

/// First non-empty content line of the first matching section
fn section_first_line(sections: &[(Label, Vec<String>)], label: Label) -> Option<String> {
    sections
        .iter()
        .find(|(l, _)| *l == label)
        .and_then(|(_, content)| content.iter().find(|l| !l.trim().is_empty()))
        .map(|l| l.trim().to_string())
}

/// Full trimmed text of the first matching section
fn section_text(sections: &[(Label, Vec<String>)], label: Label) -> String {
    sections
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, content)| content.join("\n").trim().to_string())
        .unwrap_or_default()
}

/// Bullet lines from every "Small Tips" section, bullet prefix stripped,
/// de-duplicated case- and whitespace-insensitively in first-seen order
fn collect_tips(sections: &[(Label, Vec<String>)]) -> Vec<String> {
    let Ok(bullet_re) = Regex::new(r"^\s*[-*•]\s+(.*)$") else {
        return Vec::new();
    };

    let mut tips = Vec::new();
    let mut seen = HashSet::new();

    for (label, content) in sections {
        if *label != Label::SmallTips {
            continue;
        }
        for line in content {
            let Some(caps) = bullet_re.captures(line) else {
                continue;
            };
            let tip = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            if tip.is_empty() {
                continue;
            }
            if seen.insert(normalize_tip(tip)) {
                tips.push(tip.to_string());
            }
        }
    }

    tips
}

fn normalize_tip(tip: &str) -> String {
    tip.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(heading: &str, lines: &[&str]) -> Block {
        Block {
            heading: heading.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_description_stops_at_next_label() {
        let task = extract_task(&block(
            "",
            &[
                "Description: Read for ten minutes.",
                "Pick anything light.",
                "Small Tips:",
                "- Use a timer",
            ],
        ));
        assert_eq!(task.description, "Read for ten minutes.\nPick anything light.");
        assert_eq!(task.tips, vec!["Use a timer"]);
    }

    #[test]
    fn test_bold_labels_with_optional_colon() {
        let task = extract_task(&block(
            "",
            &[
                "**Title**: Read",
                "**Description** Sit down with a book.",
                "**Small Tips**:",
                "- Silence your phone",
            ],
        ));
        assert_eq!(task.title, "Read");
        assert_eq!(task.description, "Sit down with a book.");
        assert_eq!(task.tips, vec!["Silence your phone"]);
    }

    #[test]
    fn test_explicit_title_beats_heading() {
        let task = extract_task(&block("Morning Routine", &["Title: Stretch"]));
        assert_eq!(task.title, "Stretch");
    }

    #[test]
    fn test_heading_fallback_then_literal_task() {
        let with_heading = extract_task(&block("Morning Routine", &["no labels here"]));
        assert_eq!(with_heading.title, "Morning Routine");

        let bare = extract_task(&block("", &["no labels here"]));
        assert_eq!(bare.title, "Task");
    }

    #[test]
    fn test_tips_deduplicate_case_and_whitespace() {
        let task = extract_task(&block(
            "",
            &[
                "Small Tips:",
                "- Do X",
                "- Do X",
                "-   do   x",
                "- Do Y",
            ],
        ));
        assert_eq!(task.tips, vec!["Do X", "Do Y"]);
    }

    #[test]
    fn test_bullet_variants_stripped_in_order() {
        let task = extract_task(&block(
            "",
            &["Small Tips:", "* tip one", "• tip two", "- tip three"],
        ));
        assert_eq!(task.tips, vec!["tip one", "tip two", "tip three"]);
    }

    #[test]
    fn test_multiple_small_tips_sections_are_unioned() {
        let task = extract_task(&block(
            "",
            &[
                "Small Tips:",
                "- first",
                "Description: middle",
                "Small Tips:",
                "- second",
                "- first",
            ],
        ));
        assert_eq!(task.tips, vec!["first", "second"]);
        assert_eq!(task.description, "middle");
    }

    #[test]
    fn test_legacy_sections() {
        let task = extract_task(&block(
            "Learn Rust",
            &[
                "Why: Practice compounds.",
                "Build: A tiny CLI.",
                "Resources: The book, chapter 3.",
            ],
        ));
        assert_eq!(task.why, "Practice compounds.");
        assert_eq!(task.build, "A tiny CLI.");
        assert_eq!(task.resources, "The book, chapter 3.");
        assert!(task.tips.is_empty());
    }

    #[test]
    fn test_non_bullet_lines_under_tips_ignored() {
        let task = extract_task(&block(
            "",
            &["Small Tips:", "these are optional", "- real tip"],
        ));
        assert_eq!(task.tips, vec!["real tip"]);
    }
}
