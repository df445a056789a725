//! Section scanning over loaded snapshot text.
//!
//! A record's body starts at the first `{` or `[` after its delimiter line
//! and ends right before the next line beginning with `---`, or at end of
//! input. Keys are not guaranteed unique; the first occurrence by forward
//! scan wins.

use crate::key::GameKey;

/// A located record: the full delimiter line and the raw body text.
#[derive(Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub marker: &'a str,
    pub body: &'a str,
}

/// Find the record whose delimiter matches `key` exactly.
pub fn find_section<'a>(content: &'a str, key: &str) -> Option<Section<'a>> {
    let marker = format!("--- {key} ---");
    section_at(content, content.find(&marker)?)
}

/// Relaxed search: first record for the same endpoint family, with the
/// embedded id and the suffix ignored. Lets a structurally similar capture
/// for a different game stand in for the one requested.
pub fn find_relaxed<'a>(content: &'a str, key: &GameKey) -> Option<Section<'a>> {
    section_at(content, content.find(&key.pattern_marker())?)
}

fn section_at(content: &str, marker_start: usize) -> Option<Section<'_>> {
    let line_end = content[marker_start..]
        .find('\n')
        .map(|i| marker_start + i)
        .unwrap_or(content.len());
    let marker = &content[marker_start..line_end];

    let rest = &content[line_end..];
    let body_rel = match (rest.find('{'), rest.find('[')) {
        (Some(o), Some(a)) => o.min(a),
        (Some(o), None) => o,
        (None, Some(a)) => a,
        (None, None) => return None,
    };
    let body_start = line_end + body_rel;
    let body_end = content[body_start..]
        .find("\n---")
        .map(|i| body_start + i)
        .unwrap_or(content.len());

    Some(Section {
        marker,
        body: content[body_start..body_end].trim(),
    })
}
