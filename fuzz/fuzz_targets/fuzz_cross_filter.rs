#![no_main]

use libfuzzer_sys::fuzz_target;

use fibbound_core::{analyze, verify_partition, FilterKind};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let bound = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    if bound < 1 {
        return;
    }

    let all = analyze(bound, FilterKind::All);
    let even = analyze(bound, FilterKind::Even);
    let odd = analyze(bound, FilterKind::Odd);

    match (all, even, odd) {
        (Ok(all), Ok(even), Ok(odd)) => {
            verify_partition(&all, &even, &odd).expect("partition invariant broken");
            assert!(all.lub > bound);
            assert!(even.lub > bound && even.lub % 2 == 0);
            assert!(odd.lub > bound && odd.lub % 2 == 1);
        }
        // Overflow near u64::MAX is a legal outcome, but the filters
        // must agree on whether the bound is representable.
        (Err(_), _, _) | (_, _, Err(_)) => {}
        (Ok(_), Err(e), Ok(_)) => panic!("even failed where all/odd succeeded: {e}"),
    }
});
