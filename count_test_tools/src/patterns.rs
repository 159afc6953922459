//! Input generators for the counting and partitioning suites.
//!
//! Every generator draws from one seed per process so a failing run can be replayed with
//! `OVERRIDE_SEED=<seed>`. The seed in use is reported by the suites on failure.

use std::env;
use std::sync::OnceLock;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zipf::ZipfDistribution;

/// Full `i32` range, so both overflow edges of the policies show up.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Values drawn from `range`. Narrow ranges produce many equal keys, which is where the counting
/// sweep and the `<=` side of the partition have to agree on ties.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    let mut rng = seeded_rng();
    dist.sample_iter(&mut rng).take(len).collect()
}

/// Heavy-tailed duplicates, ranks `1..=len`.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let Ok(dist) = ZipfDistribution::new(len, exponent) else {
        // Only rejects `len == 0` or a non-positive exponent.
        assert_eq!(len, 0, "invalid zipf exponent {exponent}");
        return Vec::new();
    };

    let mut rng = seeded_rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Exactly the `{0, 1, 2}` alphabet of the three band sort.
pub fn random_zero_one_two(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=2)
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Zero inversions.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// The maximum `len * (len - 1) / 2` inversions.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` runs of random values, each sorted up or down at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let run_len = (len / saw_count.max(1)).max(1);
    let mut rng = seeded_rng();

    for run in v.chunks_mut(run_len) {
        if rng.gen::<bool>() {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);

    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// The seed shared by every generator of this process.
///
/// Taken from `OVERRIDE_SEED` if set, random otherwise.
pub fn random_init_seed() -> u64 {
    static SEED: OnceLock<u64> = OnceLock::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed:?}")),
        Err(_) => rand::thread_rng().gen(),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
