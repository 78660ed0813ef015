use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle `items` in place with Fisher–Yates.
///
/// Slices of length 0 or 1 are left untouched.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// A shuffled copy of `items`; the input is not modified.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}
