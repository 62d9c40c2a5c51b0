// domain analytics sorting utilities
use std::cmp::Reverse;

use crate::model::FileLineCount;

/// Stable sort of `files` by line count, largest first. Files with equal counts keep
/// their relative order.
pub fn sort_by_lines(files: &mut [FileLineCount]) {
    files.sort_by_key(|f| Reverse(f.lines));
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn file(name: &str, lines: usize) -> FileLineCount {
        FileLineCount::new(name, lines.into())
    }

    #[test]
    fn descending_keeps_ties_in_input_order() {
        let mut files = vec![file("a.f90", 3), file("b.f90", 10), file("c.f90", 3), file("d.f90", 7)];
        sort_by_lines(&mut files);

        let names: Vec<_> = files.iter().map(|f| f.path.to_string_lossy().into_owned()).collect();
        assert_eq!(names, ["b.f90", "d.f90", "a.f90", "c.f90"]);
    }

    proptest! {
        #[test]
        fn descending_output_is_non_increasing(counts in proptest::collection::vec(0usize..500, 0..40)) {
            let mut files: Vec<_> = counts
                .iter()
                .enumerate()
                .map(|(i, n)| file(&format!("f{i}.f90"), *n))
                .collect();
            sort_by_lines(&mut files);
            prop_assert!(files.windows(2).all(|w| w[0].lines >= w[1].lines));
        }
    }
}
