//! Stateless helpers around the diff view
//!
//! This crate provides:
//! - Compact timestamp formatting and "time ago" labels
//! - Hyperlinking of quoted URLs in highlighted markup
//! - Clipboard copy
//! - Exporting text to a file

pub mod clipboard;
pub mod export;
pub mod link;
pub mod time;

pub use clipboard::{copy_text, try_copy_text, ClipboardError};
pub use export::{export_file, ExportError};
pub use link::render_links;
pub use time::{format_time, short_time, short_time_at, TimeError};
