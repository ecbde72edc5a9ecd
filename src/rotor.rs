//! Rotor: 26-contact wired wheel with ring setting and stepping notch.
//!
//! Implements the atomic cryptographic unit of the Enigma. Each rotor
//! holds a fixed internal wiring permutation (and its precomputed
//! inverse), a ring setting and a rotation offset, and performs the
//! forward and backward letter substitutions of the signal path.
//!
//! The mechanical "inner core rotates against the contact ring" behavior
//! is modeled as an index offset computed at lookup time rather than by
//! physically rotating the wiring arrays: the externally visible wiring
//! at any moment is the core wiring shifted by
//! `rotation_offset - ring_setting` (mod 26).

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, LETTER_COUNT};
use crate::error::EnigmaError;
use crate::wiring::ROTOR_BLUEPRINTS;

/// Identity of a rotor type in the M3 pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorId {
    /// All five rotor identities, in pool order.
    pub const ALL: [RotorId; 5] = [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V];

    /// Returns the historical rotor name ("I".."V").
    pub fn name(self) -> &'static str {
        ROTOR_BLUEPRINTS[self.index()].name
    }

    /// Position of this identity in the blueprint registry and rotor pool.
    pub(crate) fn index(self) -> usize {
        match self {
            RotorId::I => 0,
            RotorId::II => 1,
            RotorId::III => 2,
            RotorId::IV => 3,
            RotorId::V => 4,
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorId {
    type Err = EnigmaError;

    /// Parses a historical rotor name ("I".."V").
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorAssignment`] for any other string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or(EnigmaError::InvalidRotorAssignment)
    }
}

/// A single wired rotor with its per-session runtime state.
///
/// Constructed once per rotor type at machine initialization from the
/// static blueprint registry; mutated only through
/// [`rotate`](Self::rotate), [`set_ring_setting`](Self::set_ring_setting),
/// [`set_initial_offset`](Self::set_initial_offset) and
/// [`reset`](Self::reset).
pub struct Rotor {
    id: RotorId,
    /// Core wiring: entry contact index → exit contact index.
    forward: [u8; 26],
    /// Inverse wiring: exit contact index → entry contact index.
    backward: [u8; 26],
    /// Turnover notch letters, from the blueprint.
    notches: &'static [u8],
    /// Ring setting (Ringstellung) as an alphabet index.
    ring_setting: u8,
    /// Current angular position as an alphabet index.
    rotation_offset: u8,
}

impl Rotor {
    /// Creates a rotor of the given type from the static blueprint
    /// registry, at ring setting `A` and rotation offset `A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_m3::{Rotor, RotorId};
    ///
    /// let rotor = Rotor::new(RotorId::I);
    /// assert_eq!(rotor.encrypt_forward('A').unwrap(), 'E');
    /// ```
    pub fn new(id: RotorId) -> Self {
        let blueprint = &ROTOR_BLUEPRINTS[id.index()];
        let mut forward = [0u8; 26];
        let mut backward = [0u8; 26];
        for (i, &b) in blueprint.wiring.iter().enumerate() {
            forward[i] = b - b'A';
            backward[(b - b'A') as usize] = i as u8;
        }
        Rotor {
            id,
            forward,
            backward,
            notches: blueprint.notches,
            ring_setting: 0,
            rotation_offset: 0,
        }
    }

    /// Returns the identity of this rotor.
    pub fn id(&self) -> RotorId {
        self.id
    }

    /// Returns the current ring setting as a letter.
    pub fn ring_setting(&self) -> char {
        alphabet::letter_at(self.ring_setting)
    }

    /// Returns the current rotation offset as a letter.
    pub fn rotation_offset(&self) -> char {
        alphabet::letter_at(self.rotation_offset)
    }

    /// Advances the rotation offset by one position (mod 26).
    ///
    /// Pure state mutation, no error conditions.
    pub fn rotate(&mut self) {
        self.rotation_offset = (self.rotation_offset + 1) % LETTER_COUNT;
    }

    /// True when the rotor sits on one of its turnover notches, so that
    /// stepping it carries the rotor to its left.
    ///
    /// The notch is on the visible letter ring, so this depends only on
    /// the rotation offset, never on the ring setting.
    pub fn at_notch(&self) -> bool {
        self.notches.contains(&(b'A' + self.rotation_offset))
    }

    /// Sets the ring setting (Ringstellung).
    ///
    /// Resets the rotor to its zero rotation state first: ring setting
    /// changes are defined relative to the unrotated rotor, so this must
    /// be invoked before [`set_initial_offset`](Self::set_initial_offset).
    ///
    /// # Parameters
    /// - `letter`: The ring setting, `'A'`..`'Z'`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRingSetting`] if `letter` is outside
    /// the alphabet domain. The rotor is left unchanged.
    pub fn set_ring_setting(&mut self, letter: char) -> Result<(), EnigmaError> {
        let ring = alphabet::letter_index(letter).ok_or(EnigmaError::InvalidRingSetting(letter))?;
        self.rotation_offset = 0;
        self.ring_setting = ring;
        Ok(())
    }

    /// Sets the initial rotation offset by repeatedly calling
    /// [`rotate`](Self::rotate) until the target position is reached.
    ///
    /// Reusing the normal stepping path keeps configuration free of notch
    /// side effects: carries to neighboring rotors are only evaluated by
    /// the machine during real key presses.
    ///
    /// # Parameters
    /// - `letter`: The target rotation offset, `'A'`..`'Z'`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidOffset`] if `letter` is outside the
    /// alphabet domain. The rotor is left unchanged.
    pub fn set_initial_offset(&mut self, letter: char) -> Result<(), EnigmaError> {
        let target = alphabet::letter_index(letter).ok_or(EnigmaError::InvalidOffset(letter))?;
        while self.rotation_offset != target {
            self.rotate();
        }
        Ok(())
    }

    /// Returns ring setting and rotation offset to the default `A`/`A`
    /// position, restoring the original un-shifted wiring.
    pub fn reset(&mut self) {
        self.ring_setting = 0;
        self.rotation_offset = 0;
    }

    /// Offset between the fixed core wiring and the rotating contact
    /// ring, applied on signal entry and removed on exit.
    fn shift(&self) -> u8 {
        (self.rotation_offset + LETTER_COUNT - self.ring_setting) % LETTER_COUNT
    }

    /// Forward substitution on an alphabet index (signal traveling
    /// towards the reflector).
    pub(crate) fn forward(&self, index: u8) -> u8 {
        let shift = self.shift();
        let contact = self.forward[((index + shift) % LETTER_COUNT) as usize];
        (contact + LETTER_COUNT - shift) % LETTER_COUNT
    }

    /// Backward substitution on an alphabet index (signal traveling back
    /// from the reflector).
    pub(crate) fn backward(&self, index: u8) -> u8 {
        let shift = self.shift();
        let contact = self.backward[((index + shift) % LETTER_COUNT) as usize];
        (contact + LETTER_COUNT - shift) % LETTER_COUNT
    }

    /// Encrypts one letter in the forward direction.
    ///
    /// Input position = (letter index + effective offset) mod 26; the core
    /// wiring maps it to an output contact; result = (output contact −
    /// effective offset) mod 26. This models signal entry and exit through
    /// a rotating contact ring offset from the fixed core wiring.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not an
    /// uppercase alphabet symbol.
    pub fn encrypt_forward(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::letter_index(letter).ok_or(EnigmaError::InvalidLetter(letter))?;
        Ok(alphabet::letter_at(self.forward(index)))
    }

    /// Encrypts one letter in the backward direction — the inverse
    /// traversal of [`encrypt_forward`](Self::encrypt_forward), performing
    /// the inverse lookup through the wiring with the same offset
    /// arithmetic.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not an
    /// uppercase alphabet symbol.
    pub fn encrypt_backward(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::letter_index(letter).ok_or(EnigmaError::InvalidLetter(letter))?;
        Ok(alphabet::letter_at(self.backward(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encrypts the full alphabet through `rotor` and collects the output.
    fn encrypt_alphabet(rotor: &Rotor) -> String {
        (b'A'..=b'Z')
            .map(|b| rotor.encrypt_forward(b as char).unwrap())
            .collect()
    }

    #[test]
    fn test_new_rotor_defaults() {
        let rotor = Rotor::new(RotorId::I);
        assert_eq!(rotor.id(), RotorId::I);
        assert_eq!(rotor.ring_setting(), 'A');
        assert_eq!(rotor.rotation_offset(), 'A');
    }

    /// At ring `A`, offset `A` the rotor reproduces its blueprint wiring.
    #[test]
    fn test_encrypt_alphabet_identity_position() {
        let rotor = Rotor::new(RotorId::I);
        assert_eq!(encrypt_alphabet(&rotor), "EKMFLGDQVZNTOWYHXUSPAIBRCJ");
    }

    /// Frozen vector from the rotor self-test: rotor I at ring `B`,
    /// offset `A`.
    #[test]
    fn test_encrypt_alphabet_ring_setting_b() {
        let mut rotor = Rotor::new(RotorId::I);
        rotor.set_ring_setting('B').unwrap();
        assert_eq!(encrypt_alphabet(&rotor), "KFLNGMHERWAOUPXZIYVTQBJCSD");
    }

    #[test]
    fn test_forward_output_is_permutation_at_any_offset() {
        for id in RotorId::ALL {
            let mut rotor = Rotor::new(id);
            rotor.set_initial_offset('H').unwrap();
            let mut seen = [false; 26];
            for i in 0..26 {
                let out = rotor.forward(i) as usize;
                assert!(!seen[out], "rotor {} output {} repeated", id, out);
                seen[out] = true;
            }
        }
    }

    #[test]
    fn test_backward_inverts_forward() {
        for id in RotorId::ALL {
            let mut rotor = Rotor::new(id);
            rotor.set_ring_setting('G').unwrap();
            rotor.set_initial_offset('T').unwrap();
            for i in 0..26 {
                assert_eq!(rotor.backward(rotor.forward(i)), i);
            }
        }
    }

    #[test]
    fn test_rotate_advances_and_wraps() {
        let mut rotor = Rotor::new(RotorId::III);
        rotor.rotate();
        assert_eq!(rotor.rotation_offset(), 'B');
        for _ in 0..25 {
            rotor.rotate();
        }
        assert_eq!(rotor.rotation_offset(), 'A');
    }

    #[test]
    fn test_set_initial_offset_reuses_stepping() {
        let mut rotor = Rotor::new(RotorId::I);
        rotor.set_initial_offset('C').unwrap();
        assert_eq!(rotor.rotation_offset(), 'C');
        // Target behind the current position wraps around the full circle.
        rotor.set_initial_offset('B').unwrap();
        assert_eq!(rotor.rotation_offset(), 'B');
    }

    #[test]
    fn test_set_ring_setting_resets_offset() {
        let mut rotor = Rotor::new(RotorId::II);
        rotor.set_initial_offset('M').unwrap();
        rotor.set_ring_setting('K').unwrap();
        assert_eq!(rotor.ring_setting(), 'K');
        assert_eq!(rotor.rotation_offset(), 'A');
    }

    #[test]
    fn test_set_offset_preserves_ring_setting() {
        let mut rotor = Rotor::new(RotorId::II);
        rotor.set_ring_setting('K').unwrap();
        rotor.set_initial_offset('M').unwrap();
        assert_eq!(rotor.ring_setting(), 'K');
        assert_eq!(rotor.rotation_offset(), 'M');
    }

    #[test]
    fn test_reset() {
        let mut rotor = Rotor::new(RotorId::IV);
        rotor.set_ring_setting('Q').unwrap();
        rotor.set_initial_offset('Z').unwrap();
        rotor.reset();
        assert_eq!(rotor.ring_setting(), 'A');
        assert_eq!(rotor.rotation_offset(), 'A');
        assert_eq!(encrypt_alphabet(&rotor), "ESOVPZJAYQUIRHXLNFTGKDCMWB");
    }

    #[test]
    fn test_at_notch() {
        let mut rotor = Rotor::new(RotorId::III);
        assert!(!rotor.at_notch());
        rotor.set_initial_offset('V').unwrap();
        assert!(rotor.at_notch());
        rotor.rotate();
        assert!(!rotor.at_notch());
    }

    #[test]
    fn test_invalid_inputs() {
        let mut rotor = Rotor::new(RotorId::I);
        assert_eq!(
            rotor.encrypt_forward('a'),
            Err(EnigmaError::InvalidLetter('a'))
        );
        assert_eq!(
            rotor.encrypt_backward('1'),
            Err(EnigmaError::InvalidLetter('1'))
        );
        assert_eq!(
            rotor.set_ring_setting('ß'),
            Err(EnigmaError::InvalidRingSetting('ß'))
        );
        assert_eq!(
            rotor.set_initial_offset(' '),
            Err(EnigmaError::InvalidOffset(' '))
        );
        // Rejected calls leave the rotor untouched.
        assert_eq!(rotor.ring_setting(), 'A');
        assert_eq!(rotor.rotation_offset(), 'A');
    }

    #[test]
    fn test_rotor_id_parse_and_display() {
        assert_eq!("IV".parse::<RotorId>().unwrap(), RotorId::IV);
        assert_eq!(
            "VI".parse::<RotorId>(),
            Err(EnigmaError::InvalidRotorAssignment)
        );
        assert_eq!(RotorId::III.to_string(), "III");
    }
}
