//! Reduction of hunks into per-line highlight marks.

mod marks;

pub use marks::mark_added_lines;
