//! Non-mutating shuffle used wherever options are presented.

use rand::seq::SliceRandom;
use rand::Rng;

/// Return the items in random order, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
