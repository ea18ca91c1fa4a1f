//! Convert diff operations into marker-annotated text.

use crate::model::{ChangeKind, DiffMarkers, DiffOperation};

/// Number of markers emitted by one annotation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationStats {
    /// Lines suffixed with the insertion marker.
    pub insertions: usize,
    /// Lines suffixed with the deletion marker.
    pub deletions: usize,
}

/// Annotates diff operations with a fixed marker convention.
///
/// Holds no state besides its markers, so one instance can serve any number
/// of diffs, from any thread.
#[derive(Debug, Clone, Default)]
pub struct DiffAnnotator {
    markers: DiffMarkers,
}

impl DiffAnnotator {
    /// Create an annotator with the given markers.
    pub fn new(markers: DiffMarkers) -> Self {
        Self { markers }
    }

    /// The markers this annotator appends.
    pub fn markers(&self) -> &DiffMarkers {
        &self.markers
    }

    /// Produce the annotated text for `operations`.
    ///
    /// Unchanged spans are copied verbatim. Added and removed spans are split
    /// on `'\n'` and each non-empty fragment gets its kind's marker; empty
    /// fragments (blank lines, the tail after a trailing newline) stay bare.
    pub fn annotate(&self, operations: &[DiffOperation]) -> String {
        self.annotate_with_stats(operations).0
    }

    /// Like [`annotate`](Self::annotate), also returning marker counts.
    pub fn annotate_with_stats(&self, operations: &[DiffOperation]) -> (String, AnnotationStats) {
        let capacity = operations.iter().map(|op| op.text.len()).sum();
        let mut result = String::with_capacity(capacity);
        let mut stats = AnnotationStats::default();

        for op in operations {
            let Some(marker) = self.markers.for_kind(op.kind) else {
                result.push_str(&op.text);
                continue;
            };

            let mut marked = 0;
            for (i, line) in op.text.split('\n').enumerate() {
                if i > 0 {
                    result.push('\n');
                }
                if !line.is_empty() {
                    result.push_str(line);
                    result.push_str(marker);
                    marked += 1;
                }
            }

            match op.kind {
                ChangeKind::Added => stats.insertions += marked,
                ChangeKind::Removed => stats.deletions += marked,
                ChangeKind::Unchanged => {}
            }
        }

        log::trace!(
            "Annotated {} operations: {} insertions, {} deletions",
            operations.len(),
            stats.insertions,
            stats.deletions
        );

        (result, stats)
    }
}

/// Annotate with the default Shiki-style markers.
pub fn annotate(operations: &[DiffOperation]) -> String {
    DiffAnnotator::default().annotate(operations)
}
