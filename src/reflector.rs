//! Reflector (Umkehrwalze): fixed involutive wiring, never rotates.
//!
//! The reflector turns the signal around at the far end of the rotor
//! stack. Its wiring is an involution with no fixed points, which is what
//! makes the whole machine reciprocal — and what guarantees a letter never
//! encrypts to itself.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::EnigmaError;
use crate::wiring::REFLECTOR_BLUEPRINTS;

/// Identity of a reflector variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorId {
    UkwB,
    UkwC,
}

impl ReflectorId {
    /// Both reflector identities, in registry order.
    pub const ALL: [ReflectorId; 2] = [ReflectorId::UkwB, ReflectorId::UkwC];

    /// Returns the historical reflector name ("UKW-B" or "UKW-C").
    pub fn name(self) -> &'static str {
        REFLECTOR_BLUEPRINTS[self.index()].name
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ReflectorId::UkwB => 0,
            ReflectorId::UkwC => 1,
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorId {
    type Err = EnigmaError;

    /// Parses a historical reflector name ("UKW-B" or "UKW-C").
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflector`] for any other string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReflectorId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| EnigmaError::UnknownReflector(s.to_string()))
    }
}

/// A fixed reflector built from the static blueprint registry.
///
/// Immutable after construction: no rotation, no ring setting.
pub struct Reflector {
    id: ReflectorId,
    wiring: [u8; 26],
}

impl Reflector {
    /// Creates the reflector of the given variant.
    pub fn new(id: ReflectorId) -> Self {
        let blueprint = &REFLECTOR_BLUEPRINTS[id.index()];
        let mut wiring = [0u8; 26];
        for (i, &b) in blueprint.wiring.iter().enumerate() {
            wiring[i] = b - b'A';
        }
        Reflector { id, wiring }
    }

    /// Returns the identity of this reflector.
    pub fn id(&self) -> ReflectorId {
        self.id
    }

    /// Reflects an alphabet index through the involution.
    pub(crate) fn reflect(&self, index: u8) -> u8 {
        self.wiring[index as usize]
    }

    /// Encrypts one letter through the fixed involution.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not an
    /// uppercase alphabet symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_m3::{Reflector, ReflectorId};
    ///
    /// let ukw_b = Reflector::new(ReflectorId::UkwB);
    /// assert_eq!(ukw_b.encrypt('A').unwrap(), 'Y');
    /// assert_eq!(ukw_b.encrypt('Y').unwrap(), 'A');
    /// ```
    pub fn encrypt(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::letter_index(letter).ok_or(EnigmaError::InvalidLetter(letter))?;
        Ok(alphabet::letter_at(self.reflect(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_is_involution() {
        for id in ReflectorId::ALL {
            let reflector = Reflector::new(id);
            for b in b'A'..=b'Z' {
                let letter = b as char;
                let once = reflector.encrypt(letter).unwrap();
                assert_eq!(reflector.encrypt(once).unwrap(), letter);
            }
        }
    }

    #[test]
    fn test_no_letter_maps_to_itself() {
        for id in ReflectorId::ALL {
            let reflector = Reflector::new(id);
            for b in b'A'..=b'Z' {
                let letter = b as char;
                assert_ne!(reflector.encrypt(letter).unwrap(), letter);
            }
        }
    }

    #[test]
    fn test_invalid_letter() {
        let reflector = Reflector::new(ReflectorId::UkwC);
        assert_eq!(
            reflector.encrypt('b'),
            Err(EnigmaError::InvalidLetter('b'))
        );
    }

    #[test]
    fn test_reflector_id_parse_and_display() {
        assert_eq!("UKW-B".parse::<ReflectorId>().unwrap(), ReflectorId::UkwB);
        assert_eq!("UKW-C".parse::<ReflectorId>().unwrap(), ReflectorId::UkwC);
        assert_eq!(
            "UKW-A".parse::<ReflectorId>(),
            Err(EnigmaError::UnknownReflector("UKW-A".to_string()))
        );
        assert_eq!(ReflectorId::UkwC.to_string(), "UKW-C");
    }
}
