//! # diffmark-core
//!
//! Turns a sequence of diff operations into a single block of source text in
//! which every added or removed line carries an inline marker token. A code
//! renderer (for example a Shiki-style highlighter with its diff
//! transformer) picks those markers up and draws insertion/deletion
//! indicators.
//!
//! ## Boundaries
//!
//! This crate does not compute diffs and does not highlight code:
//!
//! - [`Differ`] is the upstream boundary. [`SimilarDiffer`] delegates to the
//!   `similar` crate.
//! - [`CodeRenderer`] is the downstream boundary. [`UnifiedRenderer`] is a
//!   minimal marker-aware renderer that produces a `+`/`-` listing.
//!
//! ## Usage
//!
//! ```rust
//! use diffmark_core::{annotate, DiffOperation};
//!
//! let ops = vec![
//!     DiffOperation::unchanged("a\n"),
//!     DiffOperation::removed("b\n"),
//!     DiffOperation::added("c\n"),
//! ];
//!
//! assert_eq!(annotate(&ops), "a\nb // [!code --]\nc // [!code ++]\n");
//! ```

pub mod annotate;
pub mod differ;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use annotate::{annotate, AnnotationStats, DiffAnnotator};
pub use differ::{Differ, Granularity, SimilarDiffer};
pub use model::{new_text, old_text, ChangeKind, DiffMarkers, DiffOperation};
pub use render::{parse_annotated_line, CodeRenderer, UnifiedRenderer};
