//! Parsing of agent answer text into [`AnswerContent`].
//!
//! Agents ask the model for this layout:
//!
//! ```text
//! MAIN_ANSWER: <overview or direct answer>
//! SUPPORTING_DETAILS:
//! - <detail 1>
//! - <detail 2>
//! ```
//!
//! Models drift from it, so the parser is lenient: markers may be wrapped in
//! markdown emphasis, bullets may be `-`, `*`, `•` or numbered, and text
//! without any marker falls back to "first plain line is the answer, bullet
//! lines are the details".

use super::entities::AnswerContent;

const MAIN_ANSWER_MARKER: &str = "MAIN_ANSWER:";
const DETAILS_MARKER: &str = "SUPPORTING_DETAILS:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Main,
    Details,
}

/// Parse model output into structured content.
///
/// Returns `None` only when the text has no usable line at all, so any
/// `Some` result carries a non-empty `main_answer`.
pub fn parse_answer(text: &str) -> Option<AnswerContent> {
    let mut section = Section::Preamble;
    let mut main_answer = String::new();
    let mut details = Vec::new();
    let mut first_plain: Option<&str> = None;
    let mut all_bullets: Vec<String> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_rule(line) {
            continue;
        }
        if let Some(rest) = strip_marker(line, MAIN_ANSWER_MARKER) {
            section = Section::Main;
            append_sentence(&mut main_answer, rest);
            continue;
        }
        if let Some(rest) = strip_marker(line, DETAILS_MARKER) {
            section = Section::Details;
            if let Some(item) = bullet_item(rest).or(Some(rest).filter(|r| !r.is_empty())) {
                details.push(item.to_string());
            }
            continue;
        }

        match bullet_item(line) {
            Some(item) => {
                all_bullets.push(item.to_string());
                if section != Section::Preamble {
                    details.push(item.to_string());
                }
            }
            None => {
                if first_plain.is_none() {
                    first_plain = Some(line);
                }
                if section == Section::Main {
                    append_sentence(&mut main_answer, line);
                }
            }
        }
    }

    if main_answer.is_empty() {
        // No usable MAIN_ANSWER marker: fall back to the plain layout
        match first_plain {
            Some(line) => main_answer = line.to_string(),
            None if !all_bullets.is_empty() => {
                main_answer = all_bullets.remove(0);
                if let Some(pos) = details.iter().position(|d| *d == main_answer) {
                    details.remove(pos);
                }
            }
            None => return None,
        }
        if details.is_empty() {
            details = all_bullets;
        }
    }

    Some(AnswerContent {
        main_answer,
        supporting_details: details,
    })
}

/// Text after `marker` when `line` starts with it, ignoring ASCII case and
/// surrounding markdown emphasis (`**MAIN_ANSWER:**`, `## MAIN_ANSWER:`).
fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let bare = line.trim_start_matches(['*', '#', '_', ' ']);
    let head = bare.get(..marker.len())?;
    if !head.eq_ignore_ascii_case(marker) {
        return None;
    }
    Some(bare[marker.len()..].trim_matches(['*', '_', ' ']).trim())
}

/// Markdown horizontal rules (`---`, `***`, `===`).
fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| matches!(c, '-' | '*' | '_' | '='))
}

/// The item text when `line` is a list entry.
fn bullet_item(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix('-') {
        return non_empty(rest);
    }
    for prefix in ["* ", "• ", "+ "] {
        if let Some(rest) = line.strip_prefix(prefix) {
            return non_empty(rest);
        }
    }

    // "1. Step" / "2) Step"
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return non_empty(rest);
        }
    }
    None
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn append_sentence(buf: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(text);
}
