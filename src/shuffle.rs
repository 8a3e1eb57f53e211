//! Seeded, reproducible shuffling.
//!
//! The column mosaic reorders photos once per day: the same seed always yields
//! the same order, and tomorrow's seed yields a different one. The shuffle is
//! a Fisher–Yates pass where every swap draws from a generator freshly keyed
//! by `seed + i`, so there is no running generator state and the result
//! depends only on `(sequence, seed)`.
//!
//! ## Hash functions
//!
//! [`ShuffleHash::Sine`] computes `frac(sin(seed + i) * 10000)`. It is the
//! default and reproduces orderings from galleries that already use it.
//! `sin` comes from the platform math library, so orderings are not
//! guaranteed bit-identical across platforms. [`ShuffleHash::Splitmix`] runs
//! the splitmix64 finalizer on the same key and is exact everywhere.

use serde::{Deserialize, Serialize};

/// The per-index fraction generator used by [`shuffle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleHash {
    #[default]
    Sine,
    Splitmix,
}

impl ShuffleHash {
    /// A pseudo-random fraction in `[0, 1)` keyed by `subseed`.
    pub fn fraction(self, subseed: i64) -> f64 {
        match self {
            ShuffleHash::Sine => sine_fraction(subseed),
            ShuffleHash::Splitmix => splitmix_fraction(subseed),
        }
    }
}

/// The largest `f64` below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

fn sine_fraction(subseed: i64) -> f64 {
    unit_fraction((subseed as f64).sin() * 10000.0)
}

/// `x - floor(x)`, kept below 1.0: for tiny negative `x` the subtraction
/// rounds up to exactly 1.0.
fn unit_fraction(x: f64) -> f64 {
    (x - x.floor()).min(BELOW_ONE)
}

fn splitmix_fraction(subseed: i64) -> f64 {
    let mut z = (subseed as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

/// Permute `items` deterministically for `seed`.
///
/// Same length, same elements, same order for the same `(items, seed, hash)`.
pub fn shuffle<T>(mut items: Vec<T>, seed: i64, hash: ShuffleHash) -> Vec<T> {
    for i in (1..items.len()).rev() {
        let fraction = hash.fraction(seed.wrapping_add(i as i64));
        let j = ((fraction * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
        let mut v = items.to_vec();
        v.sort();
        v
    }

    #[test]
    fn sine_fraction_matches_formula() {
        // sin(1) * 10000 = 8414.709848...
        let f = ShuffleHash::Sine.fraction(1);
        assert!((f - 0.709_848_078_964_569).abs() < 1e-9, "got {f}");
    }

    #[test]
    fn fractions_stay_in_unit_interval() {
        for hash in [ShuffleHash::Sine, ShuffleHash::Splitmix] {
            for subseed in (-5_000..5_000).chain([i64::MIN, i64::MAX, 0]) {
                let f = hash.fraction(subseed);
                assert!((0.0..1.0).contains(&f), "{hash:?}({subseed}) = {f}");
            }
        }
    }

    #[test]
    fn unit_fraction_never_reaches_one() {
        assert_eq!(-1e-20 - (-1e-20f64).floor(), 1.0);
        let f = unit_fraction(-1e-20);
        assert!(f < 1.0, "got {f}");
        assert_eq!(unit_fraction(2.25), 0.25);
        assert_eq!(unit_fraction(-0.75), 0.25);
    }

    #[test]
    fn empty_and_single_unchanged() {
        assert_eq!(shuffle(Vec::<u32>::new(), 7, ShuffleHash::Sine), Vec::<u32>::new());
        assert_eq!(shuffle(vec!["only"], 7, ShuffleHash::Sine), vec!["only"]);
    }

    #[test]
    fn shuffle_is_permutation() {
        let input: Vec<u32> = (0..50).collect();
        for hash in [ShuffleHash::Sine, ShuffleHash::Splitmix] {
            for seed in [-3, 0, 1, 42, 20_377, i64::MAX] {
                let out = shuffle(input.clone(), seed, hash);
                assert_eq!(out.len(), input.len());
                assert_eq!(sorted(&out), input, "seed {seed} with {hash:?}");
            }
        }
    }

    #[test]
    fn shuffle_keeps_duplicates() {
        let input = vec!["a", "b", "a", "c", "b", "a"];
        let out = shuffle(input.clone(), 99, ShuffleHash::Sine);
        assert_eq!(sorted(&out), sorted(&input));
    }

    #[test]
    fn shuffle_is_deterministic() {
        let input: Vec<u32> = (0..20).collect();
        for hash in [ShuffleHash::Sine, ShuffleHash::Splitmix] {
            let a = shuffle(input.clone(), 20_377, hash);
            let b = shuffle(input.clone(), 20_377, hash);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn sine_shuffle_known_order() {
        let out = shuffle((0..8).collect::<Vec<u32>>(), 42, ShuffleHash::Sine);
        assert_eq!(out, vec![1, 2, 6, 0, 5, 4, 7, 3]);
    }

    #[test]
    fn consecutive_days_reorder() {
        let input: Vec<u32> = (0..8).collect();
        let today = shuffle(input.clone(), 20_377, ShuffleHash::Sine);
        let tomorrow = shuffle(input, 20_378, ShuffleHash::Sine);
        assert_ne!(today, tomorrow);
    }

    #[test]
    fn different_seeds_mostly_differ() {
        let input: Vec<u32> = (0..10).collect();
        for hash in [ShuffleHash::Sine, ShuffleHash::Splitmix] {
            let orders: std::collections::HashSet<Vec<u32>> = (0..30)
                .map(|seed| shuffle(input.clone(), seed, hash))
                .collect();
            assert!(orders.len() > 25, "{hash:?} produced {} orders", orders.len());
        }
    }

    #[test]
    fn hash_parses_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            hash: ShuffleHash,
        }
        let w: Wrapper = toml::from_str(r#"hash = "splitmix""#).unwrap();
        assert_eq!(w.hash, ShuffleHash::Splitmix);
    }
}
