use std::num::NonZeroUsize;

use rand_core::RngCore;

/// The 26 lowercase Latin letters every sequence is drawn from.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// An ordered run of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// The two sequences produced by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    pub first: Sequence,
    pub second: Sequence,
}

/// Returns a uniformly distributed index in `0..n`.
///
/// Words from the top of the `u32` range that would bias a plain modulo
/// are rejected and redrawn.
fn uniform_index<R: RngCore>(rng: &mut R, n: u32) -> usize {
    debug_assert!(n > 0);
    let zone = u32::MAX - (u32::MAX - n + 1) % n;
    loop {
        let v = rng.next_u32();
        if v <= zone {
            return (v % n) as usize;
        }
    }
}

/// Draws `length` letters from [`ALPHABET`] with replacement.
pub fn random_sequence<R: RngCore>(rng: &mut R, length: NonZeroUsize) -> Sequence {
    let letters = (0..length.get())
        .map(|_| ALPHABET[uniform_index(rng, ALPHABET.len() as u32)])
        .collect();
    Sequence(letters)
}

/// Draws two independent sequences of equal length, the first in full
/// before the second.
pub fn generate_pair<R: RngCore>(rng: &mut R, length: NonZeroUsize) -> SequencePair {
    let first = random_sequence(rng, length);
    let second = random_sequence(rng, length);
    SequencePair { first, second }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// Replays a fixed list of words, cycling when exhausted.
    struct ScriptedRng {
        words: Vec<u32>,
        pos: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let v = self.words[self.pos % self.words.len()];
            self.pos += 1;
            v
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for b in dst {
                *b = self.next_u32() as u8;
            }
        }
    }

    #[test]
    fn test_correct_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for &n in &[1, 2, 5, 100, 4096] {
            let pair = generate_pair(&mut rng, len(n));
            assert_eq!(pair.first.as_bytes().len(), n);
            assert_eq!(pair.second.as_bytes().len(), n);
        }
    }

    #[test]
    fn test_only_lowercase_letters() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let seq = random_sequence(&mut rng, len(10_000));
        assert!(seq.as_bytes().iter().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_every_letter_appears() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let seq = random_sequence(&mut rng, len(10_000));
        let mut counts = [0usize; 26];
        for &b in seq.as_bytes() {
            counts[(b - b'a') as usize] += 1;
        }
        // Expected ~385 per letter.
        assert!(counts.iter().all(|&c| c > 250), "counts: {:?}", counts);
    }

    #[test]
    fn test_deterministic_same_seed() {
        let a = generate_pair(&mut ChaCha20Rng::seed_from_u64(99), len(64));
        let b = generate_pair(&mut ChaCha20Rng::seed_from_u64(99), len(64));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_pair(&mut ChaCha20Rng::seed_from_u64(1), len(64));
        let b = generate_pair(&mut ChaCha20Rng::seed_from_u64(2), len(64));
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequences_drawn_independently() {
        let pair = generate_pair(&mut ChaCha20Rng::seed_from_u64(5), len(64));
        assert_ne!(pair.first, pair.second);
    }

    #[test]
    fn test_scripted_words_map_to_letters() {
        let mut rng = ScriptedRng {
            words: vec![0, 1, 25, 26, 51],
            pos: 0,
        };
        let seq = random_sequence(&mut rng, len(5));
        assert_eq!(seq.as_bytes(), b"abzaz");
    }

    #[test]
    fn test_biased_tail_is_rejected() {
        // u32::MAX lies in the rejection zone for n = 26 and must be skipped.
        let mut rng = ScriptedRng {
            words: vec![u32::MAX, 3],
            pos: 0,
        };
        assert_eq!(uniform_index(&mut rng, 26), 3);
        assert_eq!(rng.pos, 2);
    }

    #[test]
    fn test_second_drawn_after_first() {
        let mut rng = ScriptedRng {
            words: vec![0, 1, 2, 3, 4, 5],
            pos: 0,
        };
        let pair = generate_pair(&mut rng, len(3));
        assert_eq!(pair.first.as_bytes(), b"abc");
        assert_eq!(pair.second.as_bytes(), b"def");
    }
}
