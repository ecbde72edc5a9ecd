//! Error types for the Enigma M3 library.
//!
//! Every variant is a local validation failure, detected before any state
//! mutation occurs for the rejected call. The machine remains usable after
//! any error.

use thiserror::Error;

/// Errors produced by the Enigma M3 library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Input letter is not one of the 26 uppercase alphabet symbols.
    #[error("letter must be an uppercase alphabetic character (A-Z), got {0:?}")]
    InvalidLetter(char),

    /// Ring setting is not one of the 26 uppercase alphabet symbols.
    #[error("ring setting must be an uppercase alphabetic character (A-Z), got {0:?}")]
    InvalidRingSetting(char),

    /// Rotation offset is not one of the 26 uppercase alphabet symbols.
    #[error("rotation offset must be an uppercase alphabetic character (A-Z), got {0:?}")]
    InvalidOffset(char),

    /// Rotor assignment does not name exactly 3 distinct rotors from the
    /// pool of 5, or names an unknown rotor identity.
    #[error("rotor assignment must list exactly 3 distinct rotors out of I, II, III, IV, V")]
    InvalidRotorAssignment,

    /// Reflector name is not one of the 2 available variants.
    #[error("unknown reflector {0:?}, must be either \"UKW-B\" or \"UKW-C\"")]
    UnknownReflector(String),

    /// Plugboard pair is a self-pair, uses an invalid letter, or the
    /// plugboard already holds the maximum of 10 pairs.
    #[error("invalid plugboard pair: {0}")]
    InvalidPlugboardPair(&'static str),

    /// Message contains a non-alphabetic, non-whitespace character.
    #[error("message must contain only uppercase letters and whitespace, got {0:?}")]
    InvalidCharacter(char),
}
