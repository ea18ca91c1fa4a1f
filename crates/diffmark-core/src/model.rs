//! Diff data structures consumed by the annotator.

use serde::{Deserialize, Serialize};

/// Default suffix for inserted lines (Shiki diff transformer notation).
pub const DEFAULT_INSERTION_MARKER: &str = " // [!code ++]";

/// Default suffix for deleted lines (Shiki diff transformer notation).
pub const DEFAULT_DELETION_MARKER: &str = " // [!code --]";

/// Classification of a diff span relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present only in the new text.
    Added,
    /// Present only in the old text.
    Removed,
    /// Present in both.
    Unchanged,
}

impl ChangeKind {
    /// Get the unified-diff prefix character for this kind.
    pub fn prefix(&self) -> char {
        match self {
            ChangeKind::Added => '+',
            ChangeKind::Removed => '-',
            ChangeKind::Unchanged => ' ',
        }
    }
}

/// One contiguous span of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOperation {
    /// How this span relates to the baseline.
    pub kind: ChangeKind,
    /// Literal content. May be empty or contain any number of newlines.
    pub text: String,
}

impl DiffOperation {
    /// Create an operation of the given kind.
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create an added span.
    pub fn added(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Added, text)
    }

    /// Create a removed span.
    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Removed, text)
    }

    /// Create an unchanged span.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Unchanged, text)
    }

    /// Whether this span is an addition or a removal.
    pub fn is_change(&self) -> bool {
        self.kind != ChangeKind::Unchanged
    }
}

/// Reconstruct the old side of a diff (everything except additions).
pub fn old_text(operations: &[DiffOperation]) -> String {
    operations
        .iter()
        .filter(|op| op.kind != ChangeKind::Added)
        .map(|op| op.text.as_str())
        .collect()
}

/// Reconstruct the new side of a diff (everything except removals).
pub fn new_text(operations: &[DiffOperation]) -> String {
    operations
        .iter()
        .filter(|op| op.kind != ChangeKind::Removed)
        .map(|op| op.text.as_str())
        .collect()
}

/// Marker tokens appended to changed lines.
///
/// The tokens are a convention shared with the downstream renderer. The
/// defaults match Shiki's `transformerNotationDiff`; a different renderer
/// needs its own pair, usually supplied through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffMarkers {
    /// Suffix for inserted lines.
    pub insertion: String,
    /// Suffix for deleted lines.
    pub deletion: String,
}

impl Default for DiffMarkers {
    fn default() -> Self {
        Self {
            insertion: DEFAULT_INSERTION_MARKER.to_string(),
            deletion: DEFAULT_DELETION_MARKER.to_string(),
        }
    }
}

impl DiffMarkers {
    /// Create a marker pair.
    pub fn new(insertion: impl Into<String>, deletion: impl Into<String>) -> Self {
        Self {
            insertion: insertion.into(),
            deletion: deletion.into(),
        }
    }

    /// Get the marker for a kind. Unchanged lines have none.
    pub fn for_kind(&self, kind: ChangeKind) -> Option<&str> {
        match kind {
            ChangeKind::Added => Some(&self.insertion),
            ChangeKind::Removed => Some(&self.deletion),
            ChangeKind::Unchanged => None,
        }
    }
}
