use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One unit of tokenized answer text.
///
/// Carries only the discriminant plus text or index; presentation (badges, colors) belongs to
/// whatever consumes the segments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerSegment {
    Literal { text: String },
    CitationMarker { index: u32 },
}

impl AnswerSegment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    pub fn marker(index: u32) -> Self {
        Self::CitationMarker { index }
    }

    /// The exact slice of the answer this segment was cut from.
    pub fn source_text(&self) -> Cow<'_, str> {
        match self {
            Self::Literal { text } => Cow::Borrowed(text),
            Self::CitationMarker { index } => Cow::Owned(format!("[{index}]")),
        }
    }

    pub fn is_empty_literal(&self) -> bool {
        matches!(self, Self::Literal { text } if text.is_empty())
    }
}

impl fmt::Display for AnswerSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_text())
    }
}

/// Split an answer into literal runs and `[n]` citation markers.
///
/// The output always alternates literal, marker, literal, ..., literal: `n` markers give `2n + 1`
/// segments, empty literals included, so `tokenize("")` is a single empty literal.
///
/// Only canonical markers are typed: ASCII digits with no leading zero (`[0]` itself is allowed)
/// whose value fits in `u32`. Anything else that merely looks like a marker (`[01]`, `[ 1]`,
/// `[99999999999]`) stays literal, which keeps [`reconstruct`] exact. Indices are not checked
/// against any citation list.
pub fn tokenize(response: &str) -> Vec<AnswerSegment> {
    let bytes = response.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some((index, len)) = parse_marker(&bytes[i..]) {
                segments.push(AnswerSegment::literal(&response[literal_start..i]));
                segments.push(AnswerSegment::marker(index));
                i += len;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }
    segments.push(AnswerSegment::literal(&response[literal_start..]));
    segments
}

/// Parse a marker at the start of `bytes` (which begins with `[`), returning its index and byte length.
fn parse_marker(bytes: &[u8]) -> Option<(u32, usize)> {
    let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || bytes.get(1 + digits) != Some(&b']') {
        return None;
    }
    let raw = &bytes[1..1 + digits];
    if digits > 1 && raw[0] == b'0' {
        return None;
    }
    let index = std::str::from_utf8(raw).ok()?.parse::<u32>().ok()?;
    Some((index, digits + 2))
}

/// Concatenate segments back into the answer they came from.
pub fn reconstruct(segments: &[AnswerSegment]) -> String {
    segments.iter().map(|s| s.source_text()).collect()
}

/// Distinct marker indices in order of first appearance.
pub fn cited_indices(segments: &[AnswerSegment]) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::new();
    for seg in segments {
        if let AnswerSegment::CitationMarker { index } = seg {
            if !out.contains(index) {
                out.push(*index);
            }
        }
    }
    out
}
