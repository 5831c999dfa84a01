//! Best-effort extraction of severity and conditions from the markdown the
//! AI collaborator returns. Never fails: missing pieces become a
//! [`ParseOutcome::Fallback`] and an unset [`Severity`].

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::analysis::entities::{
    AnalysisKind, AnalysisResult, FallbackReason, Language, ParseOutcome, Severity,
};

static SEVERITY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:severity(?:\s+rating)?|गंभीरता(?:\s+रेटिंग)?)[*_\s]*[:：][*_\s]*([1-5])\b")
        .expect("severity pattern is valid")
});

pub fn parse_analysis(raw_text: &str, language: Language, kind: AnalysisKind) -> AnalysisResult {
    let severity = extract_severity(raw_text);

    let (conditions, outcome) = match extract_conditions(raw_text, language) {
        Ok(conditions) => (conditions, ParseOutcome::Parsed),
        Err(reason) => (Vec::new(), ParseOutcome::Fallback { reason }),
    };

    AnalysisResult {
        raw_text: raw_text.to_string(),
        severity,
        conditions,
        kind,
        outcome,
    }
}

/// First `severity: N` / `severity rating: N` token in reading order.
pub fn extract_severity(text: &str) -> Severity {
    SEVERITY_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .map(Severity::assessed)
        .unwrap_or_default()
}

pub fn extract_conditions(text: &str, language: Language) -> Result<Vec<String>, FallbackReason> {
    if text.trim().is_empty() {
        return Err(FallbackReason::EmptyInput);
    }

    let section = language
        .condition_headings()
        .iter()
        .find_map(|heading| section_after_heading(text, heading))
        .ok_or(FallbackReason::MissingHeading)?;

    let conditions: Vec<String> = section
        .iter()
        .filter_map(|line| list_item(line))
        .filter_map(|item| clean_condition(item))
        .collect();

    if conditions.is_empty() {
        return Err(FallbackReason::EmptySection);
    }

    Ok(conditions)
}

/// Lines between the heading line and the next heading, `#` or bold.
fn section_after_heading<'a>(text: &'a str, heading: &str) -> Option<Vec<&'a str>> {
    let mut lines = text.lines();
    lines.by_ref().find(|line| is_heading_line(line, heading))?;

    Some(lines.take_while(|line| !is_section_break(line)).collect())
}

fn is_section_break(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        return true;
    }

    // a line that is bold from end to end, e.g. "**Recommended Steps:**"
    let unpunctuated = trimmed.trim_end_matches([':', ' ']);
    unpunctuated.len() > 4 && unpunctuated.starts_with("**") && unpunctuated.ends_with("**")
}

fn is_heading_line(line: &str, heading: &str) -> bool {
    let trimmed = line.trim();
    if !(trimmed.starts_with('#') || trimmed.starts_with("**")) {
        return false;
    }

    let title = trimmed
        .trim_start_matches(['#', '*', ' '])
        .trim_end_matches(['*', ':', ' ']);

    title.to_lowercase().starts_with(&heading.to_lowercase())
}

/// Body of a bulleted or numbered line, `None` for anything else.
fn list_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(['-', '*', '•', '+']) {
        // "**Bold**" on its own line is emphasis, not a bullet
        if trimmed.starts_with("**") && !trimmed.starts_with("** ") {
            return None;
        }
        return Some(rest);
    }

    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &trimmed[digits..];
        return rest.strip_prefix(['.', ')']);
    }

    None
}

fn clean_condition(item: &str) -> Option<String> {
    let without_emphasis = item.replace("**", "").replace("__", "");
    let name = without_emphasis
        .split('(')
        .next()
        .unwrap_or_default()
        .trim_start_matches(['-', '*', '•', ' '])
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
