use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Element type of a sequence.
///
/// Anything that is cheap to copy and can be compared for equality works:
/// bytes, chars, small integers.
pub trait Symbol: Copy + PartialEq + Send + Sync {}
impl<T: Copy + PartialEq + Send + Sync> Symbol for T {}

/// A non-empty set of distinct symbols that random sequences are drawn from.
///
/// Serialized as the plain list of symbols; deserializing goes through
/// `Alphabet::new`, so an empty list is rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(
    try_from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Symbol + Serialize", deserialize = "T: Symbol + Deserialize<'de>")
)]
pub struct Alphabet<T> {
    symbols: Vec<T>,
}

impl<T: Symbol> Alphabet<T> {
    /// Build an alphabet from the given symbols.
    ///
    /// Repeated symbols are kept once, in order of first occurrence, so that
    /// sampling is uniform over the distinct symbols.
    pub fn new(symbols: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut distinct: Vec<T> = Vec::new();
        for s in symbols {
            if !distinct.contains(&s) {
                distinct.push(s);
            }
        }
        if distinct.is_empty() {
            return Err(Error::InvalidAlphabet);
        }
        Ok(Self { symbols: distinct })
    }

    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Draw a single symbol uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.symbols[rng.gen_range(0..self.symbols.len())]
    }
}

impl<T: Symbol> TryFrom<Vec<T>> for Alphabet<T> {
    type Error = Error;

    fn try_from(symbols: Vec<T>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl<T> From<Alphabet<T>> for Vec<T> {
    fn from(alphabet: Alphabet<T>) -> Self {
        alphabet.symbols
    }
}

impl Alphabet<u8> {
    /// The symbols `0` and `1`.
    pub fn binary() -> Self {
        Self {
            symbols: vec![0, 1],
        }
    }

    /// The nucleotides `ACGT`.
    pub fn dna() -> Self {
        Self {
            symbols: b"ACGT".to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn empty_alphabet() {
        assert_eq!(
            Alphabet::<u8>::new(std::iter::empty()),
            Err(Error::InvalidAlphabet)
        );
    }

    #[test]
    fn duplicates_are_dropped() {
        let alphabet = Alphabet::new("abca".chars()).unwrap();
        assert_eq!(alphabet.symbols(), &['a', 'b', 'c']);
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<Alphabet<u8>>("[]").is_err());
        assert!(serde_json::from_str::<Alphabet<u8>>(r#"{"symbols":[]}"#).is_err());
        let alphabet: Alphabet<char> = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(alphabet.symbols(), &['a', 'b']);
        assert!(!alphabet.is_empty());
        assert_eq!(serde_json::to_string(&Alphabet::binary()).unwrap(), "[0,1]");
    }

    #[test]
    fn sample_stays_in_alphabet() {
        let alphabet = Alphabet::dna();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(31415);
        for _ in 0..1000 {
            assert!(b"ACGT".contains(&alphabet.sample(&mut rng)));
        }
    }
}
