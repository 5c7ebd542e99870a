use crate::{Error, Result, FONTSET, FONTSET_ADDRESS, RAM_SIZE, START_ADDRESS};

/// Flat 4 KiB address space.
///
/// Everything below [`START_ADDRESS`] belongs to the interpreter (the glyph
/// table lives there) and can be read but never written by a program.
pub struct Memory {
    ram: [u8; RAM_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        let mut memory = Self { ram: [0; RAM_SIZE] };
        memory.load_fontset();
        memory
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all of memory and restore the glyph table.
    pub fn reset(&mut self) {
        self.ram = [0; RAM_SIZE];
        self.load_fontset();
    }

    fn load_fontset(&mut self) {
        let start = FONTSET_ADDRESS as usize;
        self.ram[start..start + FONTSET.len()].copy_from_slice(&FONTSET);
    }

    /// Fails unless `len` bytes starting at `addr` lie inside memory.
    pub fn check_read(&self, addr: u16, len: usize) -> Result<()> {
        if addr as usize + len > RAM_SIZE {
            return Err(Error::OutOfBoundsRead { addr, len });
        }
        Ok(())
    }

    /// Like [`Memory::check_read`], and additionally rejects anything
    /// starting inside the reserved interpreter area.
    pub fn check_write(&self, addr: u16, len: usize) -> Result<()> {
        self.check_read(addr, len)?;
        if addr < START_ADDRESS {
            return Err(Error::ReservedWrite { addr, len });
        }
        Ok(())
    }

    pub fn read_byte(&self, addr: u16) -> Result<u8> {
        self.check_read(addr, 1)?;
        Ok(self.ram[addr as usize])
    }

    /// Big-endian 16-bit word, the layout of every instruction.
    pub fn read_word(&self, addr: u16) -> Result<u16> {
        let bytes = self.read_slice(addr, 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_slice(&self, addr: u16, len: usize) -> Result<&[u8]> {
        self.check_read(addr, len)?;
        let start = addr as usize;
        Ok(&self.ram[start..start + len])
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<()> {
        self.write_slice(addr, &[value])
    }

    /// Copy `data` to `addr`. Nothing is written if any byte would land
    /// outside program memory.
    pub fn write_slice(&mut self, addr: u16, data: &[u8]) -> Result<()> {
        self.check_write(addr, data.len())?;
        let start = addr as usize;
        self.ram[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Copy a program image to [`START_ADDRESS`].
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        let capacity = RAM_SIZE - START_ADDRESS as usize;
        if program.len() > capacity {
            return Err(Error::ProgramTooLarge {
                len: program.len(),
                capacity,
            });
        }
        self.write_slice(START_ADDRESS, program)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }
}
