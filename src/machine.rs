//! Enigma: the machine orchestrator.
//!
//! Owns the pool of five rotors, the socket assignment of three of them
//! to the left/middle/right slots, the active reflector and the
//! plugboard. Drives per-key stepping (including the double-step anomaly)
//! and the full signal path.
//!
//! The rotor pool works like an arena: the five [`Rotor`] instances live
//! in a fixed array indexed by [`RotorId`], and the three sockets hold
//! ids into it. Rotors left out of the current assignment keep their
//! runtime state in the pool.

use tracing::{debug, trace};

use crate::alphabet;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::{Reflector, ReflectorId};
use crate::rotor::{Rotor, RotorId};

/// Number of rotor sockets in the machine.
const SOCKET_COUNT: usize = 3;

/// A rotor socket position, from the operator's point of view.
///
/// The signal enters the stack at the right rotor and leaves it at the
/// left rotor on its way to the reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Left,
    Middle,
    Right,
}

impl Slot {
    /// All three slots in left-to-right order.
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::Middle, Slot::Right];

    fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Middle => 1,
            Slot::Right => 2,
        }
    }
}

/// The M3 Enigma machine.
///
/// # State machine
///
/// The rotor state is the triple of rotation offsets; one transition
/// happens per processed letter, before the signal path is evaluated:
///
/// 1. Middle rotor on its notch: left, middle and right all step (the
///    middle rotor "double-steps" because the pawl advancing the left
///    rotor engages the middle rotor's own notch on the same press).
/// 2. Else, right rotor on its notch: middle and right step.
/// 3. Else: only the right rotor steps.
///
/// The middle-rotor check takes priority and short-circuits the
/// right-rotor check. This ordering is the historically accurate behavior
/// and is frozen by the reference vectors in `tests/`.
///
/// # Signal path
///
/// plugboard → right → middle → left → reflector → left → middle → right
/// → plugboard.
pub struct Enigma {
    /// Rotor pool, indexed by `RotorId`.
    rotors: [Rotor; 5],
    /// Socket assignment: ids into the pool, left to right.
    sockets: [RotorId; SOCKET_COUNT],
    /// Prebuilt reflector variants, indexed by `ReflectorId`.
    reflectors: [Reflector; 2],
    active_reflector: ReflectorId,
    plugboard: Plugboard,
}

impl Default for Enigma {
    fn default() -> Self {
        Self::new()
    }
}

impl Enigma {
    /// Creates a machine in the default configuration: rotors I/II/III in
    /// the left/middle/right sockets, reflector UKW-B, empty plugboard,
    /// all ring settings and offsets at `A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_m3::{Enigma, RotorId};
    ///
    /// let machine = Enigma::new();
    /// assert_eq!(
    ///     machine.rotor_assignment(),
    ///     [RotorId::I, RotorId::II, RotorId::III]
    /// );
    /// assert_eq!(machine.reflector_name(), "UKW-B");
    /// ```
    pub fn new() -> Self {
        Enigma {
            rotors: [
                Rotor::new(RotorId::I),
                Rotor::new(RotorId::II),
                Rotor::new(RotorId::III),
                Rotor::new(RotorId::IV),
                Rotor::new(RotorId::V),
            ],
            sockets: [RotorId::I, RotorId::II, RotorId::III],
            reflectors: [
                Reflector::new(ReflectorId::UkwB),
                Reflector::new(ReflectorId::UkwC),
            ],
            active_reflector: ReflectorId::UkwB,
            plugboard: Plugboard::new(),
        }
    }

    fn rotor(&self, slot: Slot) -> &Rotor {
        &self.rotors[self.sockets[slot.index()].index()]
    }

    fn rotor_mut(&mut self, slot: Slot) -> &mut Rotor {
        &mut self.rotors[self.sockets[slot.index()].index()]
    }

    fn reflector(&self) -> &Reflector {
        &self.reflectors[self.active_reflector.index()]
    }

    // ──────── Configuration ────────

    /// Assigns rotors to the sockets, left to right.
    ///
    /// The three newly assigned rotors are reset to ring setting `A`,
    /// rotation offset `A` as a side effect. Rotors left out of the
    /// assignment keep their state in the pool; the plugboard and
    /// reflector are untouched.
    ///
    /// # Parameters
    /// - `ids`: Exactly 3 distinct rotor identities.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorAssignment`] on wrong count or
    /// duplicate identity. The machine is left unchanged.
    pub fn set_rotor_assignment(&mut self, ids: &[RotorId]) -> Result<(), EnigmaError> {
        if ids.len() != SOCKET_COUNT {
            return Err(EnigmaError::InvalidRotorAssignment);
        }
        if ids[0] == ids[1] || ids[0] == ids[2] || ids[1] == ids[2] {
            return Err(EnigmaError::InvalidRotorAssignment);
        }
        self.sockets = [ids[0], ids[1], ids[2]];
        self.reset_rotors();
        debug!(left = %ids[0], middle = %ids[1], right = %ids[2], "rotors assigned");
        Ok(())
    }

    /// Selects the active reflector by name.
    ///
    /// # Parameters
    /// - `name`: `"UKW-B"` or `"UKW-C"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflector`] for any other name.
    pub fn set_reflector(&mut self, name: &str) -> Result<(), EnigmaError> {
        self.active_reflector = name.parse()?;
        debug!(reflector = name, "reflector selected");
        Ok(())
    }

    /// Sets the ring setting (Ringstellung) of the rotor in `slot`.
    ///
    /// Resets that rotor's rotation offset to `A`, so the initial offset
    /// must be set afterwards.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRingSetting`] if `letter` is outside
    /// the alphabet domain.
    pub fn set_ring_setting(&mut self, slot: Slot, letter: char) -> Result<(), EnigmaError> {
        self.rotor_mut(slot).set_ring_setting(letter)
    }

    /// Sets the initial rotation offset of the rotor in `slot`.
    ///
    /// Configuration stepping never carries to neighboring rotors.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidOffset`] if `letter` is outside the
    /// alphabet domain.
    pub fn set_initial_offset(&mut self, slot: Slot, letter: char) -> Result<(), EnigmaError> {
        self.rotor_mut(slot).set_initial_offset(letter)
    }

    /// Resets the three socketed rotors to ring setting `A`, offset `A`.
    pub fn reset_rotors(&mut self) {
        for slot in Slot::ALL {
            self.rotor_mut(slot).reset();
        }
    }

    /// Connects two letters on the plugboard.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugboardPair`] as described on
    /// [`Plugboard::add_pair`].
    pub fn add_plugboard_pair(&mut self, a: char, b: char) -> Result<(), EnigmaError> {
        self.plugboard.add_pair(a, b)
    }

    /// Disconnects the plugboard pair containing `letter`, if any.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is outside the
    /// alphabet domain.
    pub fn remove_plugboard_pair(&mut self, letter: char) -> Result<bool, EnigmaError> {
        self.plugboard.remove_pair(letter)
    }

    /// Clears all plugboard pairs.
    pub fn reset_plugboard(&mut self) {
        self.plugboard.reset();
    }

    // ──────── Introspection ────────

    /// Returns the rotor identities per socket, left to right.
    pub fn rotor_assignment(&self) -> [RotorId; 3] {
        self.sockets
    }

    /// Returns the ring settings per socket, left to right.
    pub fn ring_settings(&self) -> [char; 3] {
        Slot::ALL.map(|slot| self.rotor(slot).ring_setting())
    }

    /// Returns the rotation offsets per socket, left to right.
    pub fn rotation_offsets(&self) -> [char; 3] {
        Slot::ALL.map(|slot| self.rotor(slot).rotation_offset())
    }

    /// Returns the identity of the active reflector.
    pub fn reflector_id(&self) -> ReflectorId {
        self.active_reflector
    }

    /// Returns the name of the active reflector.
    pub fn reflector_name(&self) -> &'static str {
        self.active_reflector.name()
    }

    /// Returns the active plugboard pairs as normalized letter tuples.
    pub fn plugboard_pairs(&self) -> Vec<(char, char)> {
        self.plugboard.pairs()
    }

    // ──────── Stepping and signal path ────────

    /// Advances the rotor state machine by one key press.
    fn step_rotors(&mut self) {
        if self.rotor(Slot::Middle).at_notch() {
            // Double step: the pawl that advances the left rotor sits in
            // the middle rotor's notch, dragging the middle rotor along
            // while the right rotor steps as always.
            self.rotor_mut(Slot::Left).rotate();
            self.rotor_mut(Slot::Middle).rotate();
            self.rotor_mut(Slot::Right).rotate();
            return;
        }
        if self.rotor(Slot::Right).at_notch() {
            self.rotor_mut(Slot::Middle).rotate();
        }
        self.rotor_mut(Slot::Right).rotate();
    }

    /// Routes one alphabet index through the full signal path.
    fn scramble(&self, index: u8) -> u8 {
        let entry = self.plugboard.swap_index(index);
        let fwd_right = self.rotor(Slot::Right).forward(entry);
        let fwd_middle = self.rotor(Slot::Middle).forward(fwd_right);
        let fwd_left = self.rotor(Slot::Left).forward(fwd_middle);
        let reflected = self.reflector().reflect(fwd_left);
        let bwd_left = self.rotor(Slot::Left).backward(reflected);
        let bwd_middle = self.rotor(Slot::Middle).backward(bwd_left);
        let bwd_right = self.rotor(Slot::Right).backward(bwd_middle);
        trace!(
            entry = %alphabet::letter_at(entry),
            forward = %format_args!(
                "{}{}{}",
                alphabet::letter_at(fwd_right),
                alphabet::letter_at(fwd_middle),
                alphabet::letter_at(fwd_left)
            ),
            reflected = %alphabet::letter_at(reflected),
            backward = %format_args!(
                "{}{}{}",
                alphabet::letter_at(bwd_left),
                alphabet::letter_at(bwd_middle),
                alphabet::letter_at(bwd_right)
            ),
            "signal path"
        );
        self.plugboard.swap_index(bwd_right)
    }

    /// Steps the rotors, then routes `index` through the signal path.
    fn press_key(&mut self, index: u8) -> u8 {
        self.step_rotors();
        let output = self.scramble(index);
        trace!(
            input = %alphabet::letter_at(index),
            positions = %format_args!(
                "{}{}{}",
                self.rotor(Slot::Left).rotation_offset(),
                self.rotor(Slot::Middle).rotation_offset(),
                self.rotor(Slot::Right).rotation_offset()
            ),
            output = %alphabet::letter_at(output),
            "key press"
        );
        output
    }

    /// Encrypts (or, reciprocally, decrypts) a single letter.
    ///
    /// Steps the rotors first, then evaluates the signal path.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not an
    /// uppercase alphabet symbol; the rotors do not step on a rejected
    /// call.
    pub fn encrypt_letter(&mut self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::letter_index(letter).ok_or(EnigmaError::InvalidLetter(letter))?;
        Ok(alphabet::letter_at(self.press_key(index)))
    }

    /// Encrypts a message, one letter at a time.
    ///
    /// Whitespace is stripped; the remaining characters must all be
    /// uppercase letters. The whole message is validated before the first
    /// key press, so a rejected message never advances the rotors.
    ///
    /// Because the cipher is reciprocal, feeding the output back through
    /// a machine in the identical configuration and offset state
    /// reproduces the input.
    ///
    /// # Parameters
    /// - `text`: The plaintext (or ciphertext), uppercase letters and
    ///   whitespace.
    ///
    /// # Returns
    /// The cipher letter sequence, without whitespace.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidCharacter`] if any non-whitespace
    /// character is not an uppercase letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_m3::Enigma;
    ///
    /// let mut machine = Enigma::new();
    /// machine.set_reflector("UKW-C").unwrap();
    /// assert_eq!(machine.encrypt_message("AB CDE").unwrap(), "PXSVV");
    /// ```
    pub fn encrypt_message(&mut self, text: &str) -> Result<String, EnigmaError> {
        let letters = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| alphabet::letter_index(c).ok_or(EnigmaError::InvalidCharacter(c)))
            .collect::<Result<Vec<u8>, _>>()?;

        let mut cipher = String::with_capacity(letters.len());
        for index in letters {
            cipher.push(alphabet::letter_at(self.press_key(index)));
        }
        Ok(cipher)
    }
}
