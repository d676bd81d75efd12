//! Markdown building blocks for the aggregate document.
//!
//! Pure string functions, no I/O:
//! - [`fence`]: code fences sized so the content can never close them early
//! - [`escape`]: escaping for headings and HTML comments
//! - [`language`]: file extension → fence info string
//! - [`table`]: GFM pipe tables

pub mod escape;
pub mod fence;
pub mod language;
pub mod table;

pub use escape::{comment_safe, escape_inline, heading};
pub use fence::{MIN_FENCE_LEN, fence_len, fenced, longest_fence_run};
pub use language::language_for;
pub use table::{escape_cell, markdown_table};
