use rand::Rng;

use crate::alphabet::{Alphabet, Symbol};

/// Generate a random sequence of length `n` using the given alphabet.
///
/// Symbols are drawn independently and uniformly, with replacement.
pub fn random_sequence<T: Symbol, R: Rng + ?Sized>(
    n: usize,
    alphabet: &Alphabet<T>,
    rng: &mut R,
) -> Vec<T> {
    let mut seq = Vec::with_capacity(n);
    fill_random_sequence(&mut seq, n, alphabet, rng);
    seq
}

/// As `random_sequence`, but reuses the allocation of `seq`.
pub fn fill_random_sequence<T: Symbol, R: Rng + ?Sized>(
    seq: &mut Vec<T>,
    n: usize,
    alphabet: &Alphabet<T>,
    rng: &mut R,
) {
    seq.clear();
    seq.extend((0..n).map(|_| alphabet.sample(rng)));
}
