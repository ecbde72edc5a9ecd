//! M3 Enigma rotor cipher machine simulator.
//!
//! Simulates the electromechanical Enigma M3: a keyed, reciprocal
//! substitution cipher built from a plugboard, three rotating wired rotors
//! chosen from a pool of five, and a fixed reflector. The simulation
//! reproduces the historical machine bit-exact, including the
//! "double-stepping" anomaly of the middle rotor.
//!
//! # Architecture
//!
//! ```text
//! Rotor      (atomic unit — 26-contact wired wheel with ring setting,
//!             rotation offset and stepping notch)
//!     ↕ stacked ×3 (left / middle / right, drawn from a pool of 5)
//! Reflector  (fixed involution — turns the signal back through the stack)
//! Plugboard  (up to 10 disjoint letter-pair swaps, applied at both ends)
//! Enigma     (orchestrator — stepping state machine + full signal path)
//! ```
//!
//! Per key press the machine first steps the rotors, then routes the signal
//! through plugboard → rotor stack (forward) → reflector → rotor stack
//! (backward) → plugboard.
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigma_m3::Enigma;
//!
//! let mut encoder = Enigma::new();
//! let cipher = encoder.encrypt_message("HELLO WORLD").unwrap();
//! assert_ne!(cipher, "HELLOWORLD");
//!
//! // The cipher is reciprocal: a machine in the identical starting
//! // configuration decrypts by encrypting the ciphertext.
//! let mut decoder = Enigma::new();
//! assert_eq!(decoder.encrypt_message(&cipher).unwrap(), "HELLOWORLD");
//! ```
//!
//! Configure rotors, reflector and plugboard:
//!
//! ```
//! use enigma_m3::{Enigma, RotorId, Slot};
//!
//! let mut machine = Enigma::new();
//! machine
//!     .set_rotor_assignment(&[RotorId::II, RotorId::V, RotorId::III])
//!     .unwrap();
//! machine.set_reflector("UKW-C").unwrap();
//! machine.set_ring_setting(Slot::Left, 'K').unwrap();
//! machine.set_initial_offset(Slot::Left, 'C').unwrap();
//! machine.add_plugboard_pair('A', 'D').unwrap();
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod wiring;

pub use machine::{Enigma, Slot};
pub use plugboard::Plugboard;
pub use reflector::{Reflector, ReflectorId};
pub use rotor::{Rotor, RotorId};
