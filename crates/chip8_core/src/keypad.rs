use crate::{Error, Result, NUM_KEYS};

/// The 16-key hex keypad. Keys are addressed 0x0..=0xF.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    keys: [bool; NUM_KEYS],
}

impl Keypad {
    pub fn set(&mut self, key: u8, pressed: bool) -> Result<()> {
        let slot = self.keys.get_mut(key as usize).ok_or(Error::InvalidKey(key))?;
        *slot = pressed;
        Ok(())
    }

    pub fn is_pressed(&self, key: u8) -> Result<bool> {
        self.keys
            .get(key as usize)
            .copied()
            .ok_or(Error::InvalidKey(key))
    }

    /// Lowest-numbered key currently held down.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|k| *k).map(|k| k as u8)
    }

    pub fn release_all(&mut self) {
        self.keys = [false; NUM_KEYS];
    }
}
