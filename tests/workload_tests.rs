use holdslot::workload::{accumulate, fill, run};
use holdslot::{Holder, OptionalSlot, WorkloadConfig, WorkloadError};

#[test]
fn test_holder_and_option_agree() {
    let config = WorkloadConfig::with_len(10_000);
    let holder = run::<Holder<u64>>(&config).unwrap();
    let option = run::<Option<u64>>(&config).unwrap();
    assert_eq!(holder, option);
    assert_eq!(holder.total, 10_000 * 10_001 / 2);
}

#[test]
fn test_sort_then_accumulate_by_hand() {
    let mut slots = fill::<Holder<i64>>(5).unwrap();
    slots.sort();
    let sorted: Vec<i64> = slots.iter().map(|s| **s).collect();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5]);

    accumulate(&mut slots).unwrap();
    let sums: Vec<i64> = slots.iter().map(|s| *s.get().unwrap()).collect();
    assert_eq!(sums, vec![1, 3, 6, 10, 15]);
}

#[test]
fn test_empty_slots_sort_first_and_fail_accumulation() {
    let mut slots = fill::<Holder<u32>>(3).unwrap();
    slots.push(Holder::new());
    slots.sort();
    assert!(!slots[0].has_value());
    assert_eq!(
        accumulate(&mut slots),
        Err(WorkloadError::EmptySlot { index: 0 })
    );
}

#[test]
fn test_overflowing_length() {
    assert_eq!(
        run::<Option<u16>>(&WorkloadConfig::with_len(1_000)),
        Err(WorkloadError::Overflow { len: 1_000 })
    );
    assert!(run::<Option<u16>>(&WorkloadConfig::with_len(300)).is_ok());
}

#[test]
fn test_signed_elements() {
    let report = run::<Holder<i32>>(&WorkloadConfig::with_len(1_000)).unwrap();
    assert_eq!(report.total, 500_500);
    assert_eq!(report.len, 1_000);
}
