//! Downstream boundary: renderers that consume annotated text.

use crate::model::{ChangeKind, DiffMarkers};

/// Renders annotated text for display.
///
/// A renderer must recognise the two marker tokens of its [`DiffMarkers`]
/// and must not assume every line carries one.
pub trait CodeRenderer {
    /// Rendered representation (markup, styled spans, plain text...).
    type Output;

    /// Render `annotated` as source in `language_id`.
    fn render(&self, annotated: &str, language_id: &str) -> Self::Output;
}

/// Split a marker off a single annotated line.
///
/// Returns the line's kind and its content without the marker. Lines that
/// end in neither marker are [`ChangeKind::Unchanged`] and come back whole.
pub fn parse_annotated_line<'a>(line: &'a str, markers: &DiffMarkers) -> (ChangeKind, &'a str) {
    if !markers.insertion.is_empty() {
        if let Some(content) = line.strip_suffix(markers.insertion.as_str()) {
            return (ChangeKind::Added, content);
        }
    }
    if !markers.deletion.is_empty() {
        if let Some(content) = line.strip_suffix(markers.deletion.as_str()) {
            return (ChangeKind::Removed, content);
        }
    }
    (ChangeKind::Unchanged, line)
}

/// Renders annotated text as a unified-diff style listing.
///
/// Each line is prefixed with `+`, `-` or a space and terminated by `'\n'`.
/// No highlighting is done; the language id is ignored.
#[derive(Debug, Clone, Default)]
pub struct UnifiedRenderer {
    markers: DiffMarkers,
}

impl UnifiedRenderer {
    /// Create a renderer recognising the given markers.
    pub fn new(markers: DiffMarkers) -> Self {
        Self { markers }
    }
}

impl CodeRenderer for UnifiedRenderer {
    type Output = String;

    fn render(&self, annotated: &str, _language_id: &str) -> String {
        let mut output = String::with_capacity(annotated.len() + annotated.len() / 8);
        // Split on '\n' only, like the annotator, so a '\r' stays part of
        // the line whether or not it carries a marker.
        for line in annotated.split_terminator('\n') {
            let (kind, content) = parse_annotated_line(line, &self.markers);
            output.push(kind.prefix());
            output.push_str(content);
            output.push('\n');
        }
        output
    }
}
