#![no_main]

use libfuzzer_sys::fuzz_target;

use count_partition::{bottom_up, count_and_sort, policy};

#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    let original = util::u8_as_i32(data);

    for policy_fn in [policy::inversion, policy::reverse_pair] {
        let expected = util::count_pairs_brute(&original, policy_fn);

        let mut a = original.clone();
        let mut b = original.clone();
        assert_eq!(count_and_sort(&mut a, .., policy_fn), Ok(expected));
        assert_eq!(bottom_up::count_and_sort(&mut b, .., policy_fn), Ok(expected));

        assert!(a.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(a, b);
    }
});
