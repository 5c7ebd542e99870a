use crate::{NUM_REGS, START_ADDRESS};

/// Index of VF, the register several instructions clobber with a flag.
pub const FLAG_REG: usize = 0xF;

/// General registers V0..VF plus the index register and program counter.
///
/// I and PC are 16 bits wide but only the low 12 bits address memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; NUM_REGS],
    pub i: u16,
    pub pc: u16,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            v: [0; NUM_REGS],
            i: 0,
            pc: START_ADDRESS,
        }
    }
}

impl Registers {
    #[inline]
    pub fn flag(&self) -> u8 {
        self.v[FLAG_REG]
    }

    #[inline]
    pub fn set_flag(&mut self, value: bool) {
        self.v[FLAG_REG] = value as u8;
    }

    /// Move past the instruction just fetched (or skip the next one).
    #[inline]
    pub fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }
}
