use chrono::{DateTime, Local};
use colored::Colorize;

use crate::api::HistoryEntry;

/// Collapsed entries show this many characters of the response
const PREVIEW_CHARS: usize = 140;

/// Render history entries in the order the backend returned them.
pub fn render_history(entries: &[HistoryEntry], full: bool) -> String {
    if entries.is_empty() {
        return "No history yet. Try `freetime generate` first.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{}  {}\n",
            entry.prompt_summary.green().bold(),
            readable_date(entry.timestamp).dimmed()
        ));

        let summary = if full {
            entry.response_summary.clone()
        } else {
            preview(&entry.response_summary)
        };
        for line in summary.lines() {
            out.push_str(&format!("  {}\n", line));
        }
        out.push('\n');
    }

    out
}

fn readable_date(ts: f64) -> String {
    if ts <= 0.0 {
        return String::new();
    }
    DateTime::from_timestamp(ts as i64, 0)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn preview(s: &str) -> String {
    if s.chars().count() <= PREVIEW_CHARS {
        return s.to_string();
    }
    let cut: String = s.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(prompt: &str, response: &str) -> HistoryEntry {
        HistoryEntry {
            prompt_summary: prompt.to_string(),
            response_summary: response.to_string(),
            timestamp: 1754500000.0,
        }
    }

    #[test]
    fn test_empty_history_message() {
        let out = render_history(&[], false);
        assert!(out.contains("No history yet"));
    }

    #[test]
    fn test_preview_truncates() {
        colored::control::set_override(false);

        let long = "x".repeat(200);
        let out = render_history(&[entry("Programming, 30 minutes", &long)], false);
        assert!(out.contains("..."));
        assert!(!out.contains(&long));

        let full = render_history(&[entry("Programming, 30 minutes", &long)], true);
        assert!(full.contains(&long));
    }

    #[test]
    fn test_zero_timestamp_renders_blank_date() {
        assert_eq!(readable_date(0.0), "");
    }
}
