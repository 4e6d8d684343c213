use serde::{Deserialize, Serialize};

use crate::domain::QueryOutput;
use crate::markers::{cited_indices, tokenize, AnswerSegment};
use crate::normalize::citation_text::normalize_citation_text;

/// A citation as it appears in the list under the answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayCitation {
    /// 1-based list position; `[n]` markers in the answer point here. Saturates at `u32::MAX`,
    /// beyond which markers cannot be written anyway.
    pub number: u32,
    pub source: String,
    /// Normalized excerpt. May be empty when the raw text was only a self-reference.
    pub text: String,
}

/// Everything a renderer needs for one query/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedAnswer {
    pub query: String,
    pub segments: Vec<AnswerSegment>,
    pub citations: Vec<DisplayCitation>,
}

impl AnnotatedAnswer {
    /// Look up the citation a marker refers to. Markers are 1-based, so `[0]` never resolves.
    pub fn citation_for_marker(&self, index: u32) -> Option<&DisplayCitation> {
        let pos = index.checked_sub(1)? as usize;
        self.citations.get(pos)
    }

    /// Marker indices (first-appearance order) with no matching citation.
    pub fn unresolved_markers(&self) -> Vec<u32> {
        cited_indices(&self.segments)
            .into_iter()
            .filter(|i| self.citation_for_marker(*i).is_none())
            .collect()
    }
}

pub fn annotate(output: &QueryOutput) -> AnnotatedAnswer {
    let segments = tokenize(&output.response);
    let citations = output
        .citations
        .iter()
        .enumerate()
        .map(|(i, c)| DisplayCitation {
            number: u32::try_from(i + 1).unwrap_or(u32::MAX),
            source: c.source.clone(),
            text: normalize_citation_text(&c.text),
        })
        .collect::<Vec<_>>();

    let answer = AnnotatedAnswer {
        query: output.query.clone(),
        segments,
        citations,
    };

    let unresolved = answer.unresolved_markers();
    tracing::debug!(
        segments = answer.segments.len(),
        citations = answer.citations.len(),
        unresolved = ?unresolved,
        "annotated answer"
    );
    answer
}

/// Render for a terminal: the answer body, then a numbered citation list.
pub fn render_plain_text(answer: &AnnotatedAnswer) -> String {
    let mut out = String::new();
    for seg in answer.segments.iter().filter(|s| !s.is_empty_literal()) {
        out.push_str(&seg.source_text());
    }
    out.push('\n');

    if answer.citations.is_empty() {
        return out;
    }

    out.push_str("\nSources & Citations\n");
    for c in &answer.citations {
        out.push_str(&format!("[{}] {}\n", c.number, c.source));
        if !c.text.is_empty() {
            out.push_str(&format!("    {}\n", c.text));
        }
    }
    out
}
