//! Aligned plain-text table rendering.
//!
//! Status and priority cells are tinted through the display-hint mapping in
//! gly-core when color is on.

use gly_core::display::{priority_hint, status_hint};
use gly_core::enums::{Priority, ProjectStatus};

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            format_cell(&text, *width, false, false)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let numeric = looks_numeric(&truncated);
                    let colored = if options.color {
                        colorize_cell(&truncated)
                    } else {
                        truncated
                    };
                    format_cell(&colored, *width, numeric, options.color)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    for ch in value.chars().take(width - 1) {
        out.push(ch);
    }
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        strip_ansi(value).len()
    } else {
        value.len()
    };
    let pad = width.saturating_sub(plain_len);
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Tint a cell when it holds a pipeline status or priority value.
fn colorize_cell(value: &str) -> String {
    let hint = parse_cell::<ProjectStatus>(value)
        .map(status_hint)
        .or_else(|| parse_cell::<Priority>(value).map(priority_hint));

    match hint.and_then(hint_to_ansi) {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn parse_cell<T: serde::de::DeserializeOwned>(value: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).ok()
}

fn hint_to_ansi(hint: &str) -> Option<&'static str> {
    match hint {
        "gray" => Some("90"),
        "orange" => Some("33"),
        "blue" => Some("34"),
        "purple" => Some("35"),
        "teal" => Some("36"),
        "green" => Some("32"),
        "red" => Some("31"),
        _ => None,
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "status", "title"];
        let rows = vec![
            vec!["prj-1".to_string(), "inquiry".to_string(), "short".to_string()],
            vec![
                "prj-200".to_string(),
                "in_progress".to_string(),
                "a much longer title".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines.len() >= 4);
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("status"));
        assert!(lines[0].contains("title"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn status_cells_are_tinted_when_color_is_on() {
        let colored = colorize_cell("completed");
        assert!(colored.contains("\u{1b}[32m"));

        let urgent = colorize_cell("urgent");
        assert!(urgent.contains("\u{1b}[31m"));

        // Arbitrary text passes through untouched.
        assert_eq!(colorize_cell("hello"), "hello");
    }

    #[test]
    fn fit_widths_shrinks_widest_column() {
        let headers = ["id", "title"];
        let mut widths = vec![6, 40];
        fit_widths(&mut widths, &headers, Some(30));
        assert!(widths.iter().sum::<usize>() + 2 <= 30);
        assert_eq!(widths[0], 6);
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate_text("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_text("abc", 5), "abc");
    }

    #[test]
    fn strip_ansi_removes_escapes() {
        let colored = "\u{1b}[32mcompleted\u{1b}[0m";
        assert_eq!(strip_ansi(colored), "completed");
    }
}
