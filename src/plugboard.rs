//! Plugboard (Steckerbrett): disjoint letter-pair swaps applied before
//! and after the rotor stack.
//!
//! Pairs are stored normalized as `(min, max)` alphabet-index tuples, so
//! the disjointness invariant — a letter appears in at most one pair — is
//! maintained structurally by the eviction rule in
//! [`add_pair`](Plugboard::add_pair).

use tracing::debug;

use crate::alphabet;
use crate::error::EnigmaError;

/// Maximum number of plugboard pairs (the machine shipped ten cables).
const MAX_PAIRS: usize = 10;

/// The plugboard: a small set of disjoint letter-pair swaps.
#[derive(Debug, Default)]
pub struct Plugboard {
    /// Normalized `(min, max)` index pairs, pairwise disjoint.
    pairs: Vec<(u8, u8)>,
}

impl Plugboard {
    /// Creates an empty plugboard.
    pub fn new() -> Self {
        Plugboard::default()
    }

    /// Returns the swap partner of an alphabet index, or the index itself
    /// when it is unpaired.
    pub(crate) fn swap_index(&self, index: u8) -> u8 {
        for &(a, b) in &self.pairs {
            if a == index {
                return b;
            }
            if b == index {
                return a;
            }
        }
        index
    }

    /// Returns the paired letter if `letter` appears in any pair, else
    /// returns `letter` unchanged.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not an
    /// uppercase alphabet symbol.
    pub fn swap(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::letter_index(letter).ok_or(EnigmaError::InvalidLetter(letter))?;
        Ok(alphabet::letter_at(self.swap_index(index)))
    }

    /// Connects two letters on the plugboard.
    ///
    /// Any existing pair containing `a` or `b` is removed before the new
    /// pair is inserted (last write wins per letter).
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugboardPair`] if `a == b`, if either
    /// letter is outside the alphabet domain, or if the plugboard already
    /// holds 10 pairs. The plugboard is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_m3::Plugboard;
    ///
    /// let mut pb = Plugboard::new();
    /// pb.add_pair('A', 'D').unwrap();
    /// assert_eq!(pb.swap('A').unwrap(), 'D');
    /// assert_eq!(pb.swap('D').unwrap(), 'A');
    /// assert_eq!(pb.swap('X').unwrap(), 'X');
    ///
    /// assert!(pb.add_pair('A', 'A').is_err());
    /// ```
    pub fn add_pair(&mut self, a: char, b: char) -> Result<(), EnigmaError> {
        let ia = alphabet::letter_index(a)
            .ok_or(EnigmaError::InvalidPlugboardPair("letters must be A-Z"))?;
        let ib = alphabet::letter_index(b)
            .ok_or(EnigmaError::InvalidPlugboardPair("letters must be A-Z"))?;
        if ia == ib {
            return Err(EnigmaError::InvalidPlugboardPair(
                "a letter cannot pair with itself",
            ));
        }
        if self.pairs.len() == MAX_PAIRS {
            return Err(EnigmaError::InvalidPlugboardPair(
                "plugboard already holds the maximum of 10 pairs",
            ));
        }

        self.pairs
            .retain(|&(x, y)| x != ia && y != ia && x != ib && y != ib);
        self.pairs.push((ia.min(ib), ia.max(ib)));
        debug!(pair = ?(a, b), total = self.pairs.len(), "plugboard pair connected");
        Ok(())
    }

    /// Disconnects the pair containing `letter`, if any.
    ///
    /// # Returns
    /// `true` when a pair was removed, `false` when the letter was
    /// unpaired.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not an
    /// uppercase alphabet symbol.
    pub fn remove_pair(&mut self, letter: char) -> Result<bool, EnigmaError> {
        let index = alphabet::letter_index(letter).ok_or(EnigmaError::InvalidLetter(letter))?;
        let before = self.pairs.len();
        self.pairs.retain(|&(a, b)| a != index && b != index);
        Ok(self.pairs.len() != before)
    }

    /// Clears all pairs.
    pub fn reset(&mut self) {
        self.pairs.clear();
        debug!("plugboard reset");
    }

    /// Returns the active pairs as normalized letter tuples.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.pairs
            .iter()
            .map(|&(a, b)| (alphabet::letter_at(a), alphabet::letter_at(b)))
            .collect()
    }

    /// Returns the number of active pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pairs are connected.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
