// crates/shared-kernel/tests/counts_sum.rs
use toolchain_shared_kernel::LineCount;

#[test]
fn linecount_sum() {
    let total = [1usize, 2, 3].into_iter().map(LineCount::from).sum::<LineCount>();
    assert_eq!(usize::from(total), 6);
}

#[test]
fn linecount_sum_ref() {
    let values = [LineCount::from(5), LineCount::from(7)];
    let total: LineCount = values.iter().sum();
    assert_eq!(total, 12usize);
}

#[test]
fn linecount_add_assign_saturates() {
    let mut lines = LineCount::from(usize::MAX - 1);
    lines += LineCount::from(5);
    assert_eq!(lines, LineCount::from(usize::MAX));
}

#[test]
fn linecount_serializes_as_plain_number() {
    let json = serde_json::to_string(&LineCount::from(42)).expect("serializes");
    assert_eq!(json, "42");
}
