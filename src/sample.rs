use std::collections::{BTreeSet, HashSet};
use rand::{seq::SliceRandom, Rng};

/// Fraction of ZMWs that is kept: 3/4.
pub const KEEP_NUMERATOR: usize = 3;
pub const KEEP_DENOMINATOR: usize = 4;

/// Number of ZMWs kept out of `n`, rounded down.
#[inline]
pub fn sample_size(n: usize) -> usize {
    n * KEEP_NUMERATOR / KEEP_DENOMINATOR
}

/// Uniformly selects `sample_size(zmws.len())` distinct ZMWs.
/// Input order is fixed (sorted), so the result depends only on the state of `rng`.
pub fn select_zmws<G: Rng + ?Sized>(zmws: &BTreeSet<Vec<u8>>, rng: &mut G) -> HashSet<Vec<u8>> {
    let all: Vec<&Vec<u8>> = zmws.iter().collect();
    let k = sample_size(all.len());
    all.choose_multiple(rng, k).map(|&zmw| zmw.clone()).collect()
}
