pub mod lines;
pub mod sort;

pub use lines::{count_non_blank_lines, is_blank};
pub use sort::sort_by_lines;
