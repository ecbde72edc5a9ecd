//! Static wiring registry for the M3 rotor pool and reflectors.
//!
//! Holds the 5 rotor blueprints and 2 reflector blueprints of the M3
//! Enigma as immutable tables, read-only after startup. Per-session
//! mutable state (rotation offset, ring setting) lives on the
//! [`Rotor`](crate::rotor::Rotor) instances built from these blueprints;
//! the blueprints themselves are never mutated.
//!
//! Wirings are stored as 26-byte strings: position `i` holds the letter
//! that contact `i` is wired to.

/// Immutable description of a rotor type: name, core wiring and the
/// turnover notch letters.
pub(crate) struct RotorBlueprint {
    pub(crate) name: &'static str,
    pub(crate) wiring: &'static [u8; 26],
    pub(crate) notches: &'static [u8],
}

/// Immutable description of a reflector: name and involutive wiring.
pub(crate) struct ReflectorBlueprint {
    pub(crate) name: &'static str,
    pub(crate) wiring: &'static [u8; 26],
}

/// The five rotor types of the M3 Enigma, in pool order I..V.
pub(crate) const ROTOR_BLUEPRINTS: [RotorBlueprint; 5] = [
    RotorBlueprint {
        name: "I",
        wiring: b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notches: b"Q",
    },
    RotorBlueprint {
        name: "II",
        wiring: b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notches: b"E",
    },
    RotorBlueprint {
        name: "III",
        wiring: b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notches: b"V",
    },
    RotorBlueprint {
        name: "IV",
        wiring: b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notches: b"J",
    },
    RotorBlueprint {
        name: "V",
        wiring: b"VZBRGITYUPSDNHLXAWMJQOFECK",
        notches: b"Z",
    },
];

/// The two reflector variants of the M3 Enigma.
pub(crate) const REFLECTOR_BLUEPRINTS: [ReflectorBlueprint; 2] = [
    ReflectorBlueprint {
        name: "UKW-B",
        wiring: b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorBlueprint {
        name: "UKW-C",
        wiring: b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Every rotor wiring must be a permutation of the alphabet.
    #[test]
    fn test_rotor_wirings_are_permutations() {
        for bp in &ROTOR_BLUEPRINTS {
            let mut seen = [false; 26];
            for &b in bp.wiring.iter() {
                let i = (b - b'A') as usize;
                assert!(!seen[i], "rotor {}: letter {} wired twice", bp.name, b as char);
                seen[i] = true;
            }
        }
    }

    /// Every reflector wiring must be an involution with no fixed points.
    #[test]
    fn test_reflector_wirings_are_fixed_point_free_involutions() {
        for bp in &REFLECTOR_BLUEPRINTS {
            for (i, &b) in bp.wiring.iter().enumerate() {
                let j = (b - b'A') as usize;
                assert_ne!(i, j, "reflector {}: contact {} maps to itself", bp.name, i);
                assert_eq!(
                    bp.wiring[j] as usize - b'A' as usize,
                    i,
                    "reflector {}: wiring is not an involution at contact {}",
                    bp.name,
                    i
                );
            }
        }
    }

    /// Each rotor carries exactly one turnover notch on the M3.
    #[test]
    fn test_rotor_notches() {
        let expected: [(&str, &[u8]); 5] = [
            ("I", b"Q"),
            ("II", b"E"),
            ("III", b"V"),
            ("IV", b"J"),
            ("V", b"Z"),
        ];
        for (bp, (name, notches)) in ROTOR_BLUEPRINTS.iter().zip(expected) {
            assert_eq!(bp.name, name);
            assert_eq!(bp.notches, notches);
        }
    }
}
