//! In-place description fixing
//!
//! Rewrites only the `description:` values of a schema file at the text
//! level, so quoting style, indentation, comments, and key order survive.
//! Round-tripping the whole document through a YAML parser would reformat
//! everything else too.

use crate::document::SchemaError;
use regex::Regex;
use std::path::Path;

/// YAML block scalar indicators a description value can start with
const BLOCK_INDICATORS: &[&str] = &["|", "|-", "|+", ">", ">-", ">+"];

/// Apply a fixer to every description value in a file
///
/// Returns true when the file was rewritten.
pub fn fix_file_in_place(path: &Path, fix: impl Fn(&str) -> String) -> Result<bool, SchemaError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SchemaError::IoError(path.display().to_string(), e.to_string()))?;

    let fixed = fix_descriptions(&content, fix);
    if fixed == content {
        return Ok(false);
    }

    std::fs::write(path, &fixed)
        .map_err(|e| SchemaError::IoError(path.display().to_string(), e.to_string()))?;
    Ok(true)
}

/// Apply a fixer to every description value in a YAML document string
pub fn fix_descriptions(content: &str, fix: impl Fn(&str) -> String) -> String {
    let key = Regex::new(r"^(?P<prefix>[ \t]*description:[ \t]*)(?P<value>.*)$").unwrap();

    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        let Some(caps) = key.captures(line) else {
            out.push(line.to_string());
            i += 1;
            continue;
        };

        let prefix = &caps["prefix"];
        let value = caps["value"].trim_end();

        if value.is_empty() || BLOCK_INDICATORS.contains(&value) {
            out.push(line.to_string());
            i += 1;
            i = rewrite_block(&lines, i, indent_width(line), &mut out, &fix);
        } else {
            let fixed_value = fix_scalar(value, &fix);
            if fixed_value == value {
                out.push(line.to_string());
            } else {
                out.push(format!("{}{}", prefix, fixed_value));
            }
            i += 1;
        }
    }

    out.join("\n")
}

/// Rewrite a block scalar starting at `lines[start]`, returning the index of
/// the first line after the block
fn rewrite_block(
    lines: &[&str],
    start: usize,
    base_indent: usize,
    out: &mut Vec<String>,
    fix: &impl Fn(&str) -> String,
) -> usize {
    let mut end = start;
    while end < lines.len() {
        let next = lines[end];
        if next.trim().is_empty() || indent_width(next) > base_indent {
            end += 1;
        } else {
            break;
        }
    }

    let block = &lines[start..end];

    // Trailing blank lines separate the block from the next key; keep them
    // verbatim after the rewritten content
    let content_len = block
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|p| p + 1)
        .unwrap_or(0);
    let (content_lines, trailing) = block.split_at(content_len);

    if content_lines.is_empty() {
        out.extend(block.iter().map(|l| l.to_string()));
        return end;
    }

    let content_indent = content_lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    let body = content_lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                &l[content_indent..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let fixed = fix(&body);

    if fixed == body {
        out.extend(content_lines.iter().map(|l| l.to_string()));
    } else {
        // Indentation prefix comes from the first content line, so tabs vs
        // spaces survive the rewrite
        let indent = &content_lines[0][..content_indent];
        for fl in fixed.split('\n') {
            if fl.is_empty() {
                out.push(String::new());
            } else {
                out.push(format!("{}{}", indent, fl));
            }
        }
    }

    out.extend(trailing.iter().map(|l| l.to_string()));
    end
}

/// Fix a same-line scalar value, preserving its quoting style
fn fix_scalar(value: &str, fix: &impl Fn(&str) -> String) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = &value[1..value.len() - 1];
            return format!("{}{}{}", quote, fix(inner), quote);
        }
    }

    fix(value)
}

/// Width of the leading space/tab indentation (indentation is ASCII)
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}
