//! Tolerant parser for structured remote replies.
//!
//! The remote model is instructed to answer in four labeled fields
//! (VERDICT, CONFIDENCE, EXPLANATION, SOURCES), but replies drift: fields
//! go missing, the explanation spans several lines, confidence arrives
//! with or without a percent sign. This parser is a small line-oriented
//! state machine that tolerates all of that. A missing or unparseable
//! field keeps its safe default; nothing here ever fails the whole call.

use crate::result::{Verdict, VerificationResult};

/// Which multi-line field is currently being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Explanation,
    Sources,
}

/// Parse a remote reply into a verification result.
///
/// Defaults when a field is absent: verdict unverifiable, confidence 0,
/// empty explanation, no sources.
pub fn parse_reply(reply: &str) -> VerificationResult {
    let mut verdict = Verdict::Unverifiable;
    let mut confidence = 0u8;
    let mut explanation_lines: Vec<String> = Vec::new();
    let mut sources: Vec<String> = Vec::new();
    let mut section = Section::None;

    for line in reply.lines() {
        let line = line.trim();

        // Field headers take the line; VERDICT and CONFIDENCE do not end
        // an in-progress explanation, only a SOURCES header does.
        if let Some(rest) = line.strip_prefix("VERDICT:") {
            verdict = parse_verdict(rest.trim());
        } else if let Some(rest) = line.strip_prefix("CONFIDENCE:") {
            confidence = parse_confidence(rest.trim());
        } else if let Some(rest) = line.strip_prefix("EXPLANATION:") {
            section = Section::Explanation;
            let text = rest.trim();
            if !text.is_empty() {
                explanation_lines.push(text.to_string());
            }
        } else if let Some(rest) = line.strip_prefix("SOURCES:") {
            section = Section::Sources;
            sources.extend(split_sources(rest));
        } else if !line.is_empty() {
            match section {
                Section::Explanation => explanation_lines.push(line.to_string()),
                Section::Sources => sources.extend(split_sources(line)),
                Section::None => {}
            }
        }
    }

    VerificationResult {
        verdict,
        confidence,
        explanation: explanation_lines.join(" "),
        sources,
    }
}

/// Map a verdict token to the enum, defaulting to unverifiable.
fn parse_verdict(text: &str) -> Verdict {
    match text {
        "TRUE" => Verdict::True,
        "FALSE" => Verdict::False,
        "PARTIALLY_TRUE" => Verdict::PartiallyTrue,
        "UNVERIFIABLE" => Verdict::Unverifiable,
        _ => Verdict::Unverifiable,
    }
}

/// Parse a bare or percent-suffixed integer, clamped to 0..=100.
fn parse_confidence(text: &str) -> u8 {
    text.trim_end_matches('%')
        .trim()
        .parse::<i64>()
        .map(|value| value.clamp(0, 100) as u8)
        .unwrap_or(0)
}

/// Split a semicolon-separated sources line into trimmed entries.
fn split_sources(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
