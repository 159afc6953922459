use std::mem;

/// Reinterprets the fuzzer input as native endian `i32` values, dropping trailing bytes.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(mem::size_of::<i32>())
        .map(|chunk| {
            let mut bytes = [0u8; mem::size_of::<i32>()];
            bytes.copy_from_slice(chunk);
            i32::from_ne_bytes(bytes)
        })
        .collect()
}

/// O(n^2) reference count.
pub fn count_pairs_brute(v: &[i32], policy: impl Fn(&i32, &i32) -> bool) -> i64 {
    let mut count = 0;
    for (i, a) in v.iter().enumerate() {
        count += v[(i + 1)..].iter().filter(|&b| policy(a, b)).count() as i64;
    }

    count
}
