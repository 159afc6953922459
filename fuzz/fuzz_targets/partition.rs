#![no_main]

use libfuzzer_sys::fuzz_target;

use count_partition::{partition_two_way, sort_zero_one_two};

#[allow(dead_code)]
#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    let mut v = util::u8_as_i32(data);

    if let Some(p) = partition_two_way(&mut v, ..).unwrap() {
        let pivot = v[p];
        assert!(v[..p].iter().all(|&x| x <= pivot));
        assert!(v[(p + 1)..].iter().all(|&x| x > pivot));
    }

    // Every byte mod 3 gives a valid three-way input.
    let mut v = data.iter().map(|&b| i32::from(b % 3)).collect::<Vec<_>>();
    sort_zero_one_two(&mut v, ..).unwrap();
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
});
