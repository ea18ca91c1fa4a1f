//! Upstream boundary: something that turns two texts into diff operations.

use crate::model::{ChangeKind, DiffOperation};
use similar::{ChangeTag, TextDiff};

/// Computes the ordered operation sequence between two texts.
///
/// Implementations must partition both inputs completely and in order: the
/// non-`Added` spans concatenate to `old`, the non-`Removed` spans to `new`.
pub trait Differ: Send + Sync {
    /// Diff `old` against `new`.
    fn diff(&self, old: &str, new: &str) -> Vec<DiffOperation>;
}

/// Unit the diff is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Granularity {
    /// Whole lines (newline included).
    #[default]
    Lines,
    /// Words and the whitespace between them.
    Words,
    /// Individual characters.
    Chars,
}

/// [`Differ`] backed by the `similar` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarDiffer {
    granularity: Granularity,
}

impl SimilarDiffer {
    /// Create a differ working at the given granularity.
    pub fn new(granularity: Granularity) -> Self {
        Self { granularity }
    }

    /// The configured granularity.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }
}

impl Differ for SimilarDiffer {
    fn diff(&self, old: &str, new: &str) -> Vec<DiffOperation> {
        let diff = match self.granularity {
            Granularity::Lines => TextDiff::from_lines(old, new),
            Granularity::Words => TextDiff::from_words(old, new),
            Granularity::Chars => TextDiff::from_chars(old, new),
        };

        // similar reports one change per token; merge runs of the same tag
        // into spans.
        let mut operations: Vec<DiffOperation> = Vec::new();
        for change in diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => ChangeKind::Unchanged,
                ChangeTag::Delete => ChangeKind::Removed,
                ChangeTag::Insert => ChangeKind::Added,
            };

            match operations.last_mut() {
                Some(last) if last.kind == kind => last.text.push_str(change.value()),
                _ => operations.push(DiffOperation::new(kind, change.value())),
            }
        }

        log::debug!(
            "Computed {} diff operations ({:?})",
            operations.len(),
            self.granularity
        );

        operations
    }
}
