use regex::Regex;

/// Implicit headings are only inferred from reasonably short lines
const MAX_IMPLICIT_HEADING_LEN: usize = 60;

/// One contiguous segment of the plan text, optionally headed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Block {
    fn is_empty(&self) -> bool {
        self.heading.is_empty() && self.lines.iter().all(|l| l.trim().is_empty())
    }

    fn trim_blank_edges(&mut self) {
        while self.lines.first().is_some_and(|l| l.trim().is_empty()) {
            self.lines.remove(0);
        }
        while self.lines.last().is_some_and(|l| l.trim().is_empty()) {
            self.lines.pop();
        }
    }
}

/// Split plan text into blocks.
///
/// The backend has produced two delimiter conventions over time: `###`
/// heading lines and horizontal rules of three or more hyphens. Both are
/// honored in a single pass; a `###` line opens a headed block, a rule
/// line closes the current block.
pub fn split(core: &str) -> Vec<Block> {
    let heading_re = match Regex::new(r"^###\s*(.+)$") {
        Ok(re) => re,
        Err(_) => return vec![whole_text_block(core)],
    };
    let rule_re = match Regex::new(r"^\s*-{3,}\s*$") {
        Ok(re) => re,
        Err(_) => return vec![whole_text_block(core)],
    };

    let mut blocks = Vec::new();
    let mut current = Block::default();

    for line in core.lines() {
        if let Some(caps) = heading_re.captures(line) {
            push_block(&mut blocks, current);
            current = Block {
                heading: clean_heading(caps.get(1).map(|m| m.as_str()).unwrap_or("")),
                lines: Vec::new(),
            };
        } else if rule_re.is_match(line) {
            push_block(&mut blocks, current);
            current = Block::default();
        } else {
            current.lines.push(line.to_string());
        }
    }
    push_block(&mut blocks, current);

    blocks
}

/// Whether the block opens with an explicit "Micro-Task ..." label line
pub fn has_micro_task_label(block: &Block) -> bool {
    let Ok(re) = Regex::new(r"(?i)^\s*(?:\*\*\s*)?micro-task\b") else {
        return false;
    };
    block.lines.first().is_some_and(|l| re.is_match(l))
}

/// Resolve a heading for a block that did not come from a `###` line.
///
/// Cascade: a leading "Micro-Task ..." label, then a short first line
/// with no colon when more lines follow. The matched line moves out of
/// the body.
pub fn detect_heading(block: &mut Block) {
    if !block.heading.is_empty() {
        return;
    }

    if has_micro_task_label(block) {
        block.heading = clean_heading(&block.lines.remove(0));
        block.trim_blank_edges();
        return;
    }

    let implicit = block.lines.first().is_some_and(|first| {
        let first = first.trim();
        block.lines.len() > 1 && first.len() <= MAX_IMPLICIT_HEADING_LEN && !first.contains(':')
    });

    if implicit {
        block.heading = clean_heading(&block.lines.remove(0));
        block.trim_blank_edges();
    }
}

fn whole_text_block(core: &str) -> Block {
    let mut block = Block {
        heading: String::new(),
        lines: core.lines().map(str::to_string).collect(),
    };
    block.trim_blank_edges();
    block
}

fn push_block(blocks: &mut Vec<Block>, mut block: Block) {
    block.trim_blank_edges();
    if !block.is_empty() {
        blocks.push(block);
    }
}

/// Strip markdown emphasis markers around a heading line
fn clean_heading(raw: &str) -> String {
    raw.trim().trim_matches('*').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_markdown_headings() {
        let blocks = split("intro line\n### Morning Routine\nbody\n### Evening\nmore");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].heading, "");
        assert_eq!(blocks[1].heading, "Morning Routine");
        assert_eq!(blocks[1].lines, vec!["body"]);
        assert_eq!(blocks[2].heading, "Evening");
    }

    #[test]
    fn test_split_on_hyphen_rules() {
        let blocks = split("first\n---\nsecond\n-----\nthird");
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|b| b.heading.is_empty()));
        assert_eq!(blocks[2].lines, vec!["third"]);
    }

    #[test]
    fn test_heading_strips_emphasis() {
        let blocks = split("### **Deep Work**\nbody");
        assert_eq!(blocks[0].heading, "Deep Work");
    }

    #[test]
    fn test_consecutive_rules_produce_no_empty_blocks() {
        let blocks = split("a\n---\n---\n\n---\nb");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_detect_micro_task_heading() {
        let mut block = Block {
            heading: String::new(),
            lines: vec![
                "**Micro-Task 1: Stretch**".to_string(),
                "Description: Loosen up.".to_string(),
            ],
        };
        detect_heading(&mut block);
        assert_eq!(block.heading, "Micro-Task 1: Stretch");
        assert_eq!(block.lines.len(), 1);
    }

    #[test]
    fn test_detect_implicit_heading() {
        let mut block = Block {
            heading: String::new(),
            lines: vec!["Quick Stretch".to_string(), "Do it slowly.".to_string()],
        };
        detect_heading(&mut block);
        assert_eq!(block.heading, "Quick Stretch");
        assert_eq!(block.lines, vec!["Do it slowly."]);
    }

    #[test]
    fn test_implicit_heading_rejects_labels_and_long_lines() {
        let mut labeled = Block {
            heading: String::new(),
            lines: vec!["Title: Read".to_string(), "more".to_string()],
        };
        detect_heading(&mut labeled);
        assert_eq!(labeled.heading, "");

        let long_line = "x".repeat(61);
        let mut long = Block {
            heading: String::new(),
            lines: vec![long_line, "more".to_string()],
        };
        detect_heading(&mut long);
        assert_eq!(long.heading, "");
    }

    #[test]
    fn test_single_line_block_gets_no_implicit_heading() {
        let mut block = Block {
            heading: String::new(),
            lines: vec!["just one line".to_string()],
        };
        detect_heading(&mut block);
        assert_eq!(block.heading, "");
    }
}
