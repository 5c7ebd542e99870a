use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::opcode::Instruction;
use crate::registers::FLAG_REG;
use crate::{
    describe, CallStack, Config, Display, Keypad, Memory, Quirks, Registers, Result, Timers,
    FONTSET_ADDRESS, FONT_GLYPH_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// A complete CHIP-8 machine.
///
/// The host drives it by calling [`Emulator::step`] at whatever instruction
/// rate it likes, passing the wall-clock time since the previous step so
/// the 60 Hz timers stay accurate. Key events, program loads and quirk
/// changes come in through `&mut self` methods as well, so a host that
/// shares one instance between threads has to serialize access itself
/// (e.g. behind a `Mutex`) to keep those calls from overlapping a step.
pub struct Emulator {
    memory: Memory,
    regs: Registers,
    stack: CallStack,
    display: Display,
    timers: Timers,
    keypad: Keypad,
    quirks: Quirks,
    rng: StdRng,
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Emulator {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            memory: Memory::new(),
            regs: Registers::default(),
            stack: CallStack::default(),
            display: Display::default(),
            timers: Timers::default(),
            keypad: Keypad::default(),
            quirks: config.quirks,
            rng,
        }
    }

    /// Return to power-on state. Quirks and the RNG stream are kept.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.regs = Registers::default();
        self.stack.clear();
        self.display.clear();
        self.timers.reset();
        self.keypad.release_all();
        log::debug!("Chip8 reset");
    }

    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.memory.load_program(rom)?;
        log::debug!("Chip8 loaded {} byte program", rom.len());
        Ok(())
    }

    /// Fetch one instruction, move PC past it, advance the timers by
    /// `elapsed`, then decode and execute it.
    ///
    /// A fetch outside memory fails before anything changes. Any later
    /// failure (unknown opcode, stack, memory range) leaves PC past the
    /// faulting instruction with the timers charged, but never applies a
    /// partial effect of the instruction itself.
    pub fn step(&mut self, elapsed: Duration) -> Result<()> {
        let pc = self.regs.pc;
        let op = self.memory.read_word(pc)?;
        self.regs.advance_pc();
        self.timers.advance(elapsed);

        let instruction = Instruction::decode(op)?;
        log::trace!("{:03X}: {:04X} {:?}", pc, op, instruction);
        self.execute(instruction)
    }

    fn execute(&mut self, instruction: Instruction) -> Result<()> {
        let v = &mut self.regs.v;
        match instruction {
            Instruction::ClearScreen => self.display.clear(),
            Instruction::Return => self.regs.pc = self.stack.pop()?,
            Instruction::Jump { addr } => self.regs.pc = addr,
            Instruction::Call { addr } => {
                self.stack.push(self.regs.pc)?;
                self.regs.pc = addr;
            }
            Instruction::SkipIfEqualImm { x, nn } => {
                let skip = v[x] == nn;
                self.skip_if(skip);
            }
            Instruction::SkipIfNotEqualImm { x, nn } => {
                let skip = v[x] != nn;
                self.skip_if(skip);
            }
            Instruction::SkipIfEqual { x, y } => {
                let skip = v[x] == v[y];
                self.skip_if(skip);
            }
            Instruction::SkipIfNotEqual { x, y } => {
                let skip = v[x] != v[y];
                self.skip_if(skip);
            }
            Instruction::SetImm { x, nn } => v[x] = nn,
            Instruction::AddImm { x, nn } => v[x] = v[x].wrapping_add(nn),
            Instruction::Assign { x, y } => v[x] = v[y],
            Instruction::Or { x, y } => v[x] |= v[y],
            Instruction::And { x, y } => v[x] &= v[y],
            Instruction::Xor { x, y } => v[x] ^= v[y],
            // The flag goes first and the result last, so with X = F the
            // result is what stays in VF.
            Instruction::AddWithCarry { x, y } => {
                let (val, carry) = v[x].overflowing_add(v[y]);
                v[FLAG_REG] = carry as u8;
                v[x] = val;
            }
            Instruction::Sub { x, y } => {
                let (val, borrow) = v[x].overflowing_sub(v[y]);
                v[FLAG_REG] = !borrow as u8;
                v[x] = val;
            }
            Instruction::SubReversed { x, y } => {
                let (val, borrow) = v[y].overflowing_sub(v[x]);
                v[FLAG_REG] = !borrow as u8;
                v[x] = val;
            }
            Instruction::ShiftRight { x, y } => {
                let val = if self.quirks.legacy_shift { v[y] } else { v[x] };
                v[FLAG_REG] = val & 0x1;
                v[x] = val >> 1;
            }
            Instruction::ShiftLeft { x, y } => {
                let val = if self.quirks.legacy_shift { v[y] } else { v[x] };
                v[FLAG_REG] = (val & 0x80) >> 7;
                v[x] = val << 1;
            }
            Instruction::SetIndex { addr } => self.regs.i = addr,
            Instruction::JumpWithOffset { x, addr } => {
                let offset = if self.quirks.legacy_jump { v[0] } else { v[x] };
                self.regs.pc = (addr + offset as u16) & 0x0FFF;
            }
            Instruction::Random { x, nn } => v[x] = self.rng.gen::<u8>() & nn,
            Instruction::Draw { x, y, n } => {
                let (x_coord, y_coord) = (v[x], v[y]);
                let rows = self.memory.read_slice(self.regs.i, n as usize)?;
                self.regs.set_flag(false);
                let collision = self.display.draw_sprite(x_coord, y_coord, rows);
                self.regs.set_flag(collision);
            }
            // Register values past 0xF name no key and never read as pressed.
            Instruction::SkipIfKeyPressed { x } => {
                let pressed = self.keypad.is_pressed(v[x]).unwrap_or(false);
                self.skip_if(pressed);
            }
            Instruction::SkipIfKeyNotPressed { x } => {
                let pressed = self.keypad.is_pressed(v[x]).unwrap_or(false);
                self.skip_if(!pressed);
            }
            Instruction::ReadDelayTimer { x } => v[x] = self.timers.delay,
            Instruction::WaitForKey { x } => match self.keypad.first_pressed() {
                Some(key) => v[x] = key,
                // Run this instruction again on the next step.
                None => self.regs.pc = self.regs.pc.wrapping_sub(2),
            },
            Instruction::SetDelayTimer { x } => self.timers.delay = v[x],
            Instruction::SetSoundTimer { x } => self.timers.sound = v[x],
            // VF reports I leaving the 12-bit address range. The COSMAC VIP
            // left VF alone here, but some programs (Spacefight 2091!) rely on it.
            Instruction::AddToIndex { x } => {
                let sum = self.regs.i.wrapping_add(v[x] as u16);
                self.regs.i = sum;
                self.regs.set_flag(sum & 0xF000 != 0);
            }
            Instruction::FontCharAddress { x } => {
                self.regs.i = FONTSET_ADDRESS + (v[x] & 0x0F) as u16 * FONT_GLYPH_HEIGHT;
            }
            Instruction::StoreBcd { x } => {
                let val = v[x];
                let digits = [val / 100, (val / 10) % 10, val % 10];
                self.memory.write_slice(self.regs.i, &digits)?;
            }
            Instruction::StoreRegisters { x } => {
                let count = x + 1;
                self.memory.write_slice(self.regs.i, &v[..count])?;
                self.advance_index_after_transfer(count);
            }
            Instruction::LoadRegisters { x } => {
                let count = x + 1;
                let data = self.memory.read_slice(self.regs.i, count)?;
                v[..count].copy_from_slice(data);
                self.advance_index_after_transfer(count);
            }
        }
        Ok(())
    }

    #[inline]
    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.regs.advance_pc();
        }
    }

    fn advance_index_after_transfer(&mut self, count: usize) {
        if self.quirks.legacy_store_load {
            self.regs.i = self.regs.i.wrapping_add(count as u16);
        }
    }

    /// Decrement both timers once, for hosts that run their own 60 Hz clock
    /// and always pass a zero `elapsed` to [`Emulator::step`].
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    pub fn press_key(&mut self, key: u8) -> Result<()> {
        self.set_key(key, true)
    }

    pub fn release_key(&mut self, key: u8) -> Result<()> {
        self.set_key(key, false)
    }

    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<()> {
        self.keypad.set(key, pressed)
    }

    pub fn is_key_pressed(&self, key: u8) -> Result<bool> {
        self.keypad.is_pressed(key)
    }

    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    pub fn set_quirks(&mut self, quirks: Quirks) {
        log::debug!("Chip8 quirks: {:?}", quirks);
        self.quirks = quirks;
    }

    /// The instruction word PC points at, not yet executed.
    pub fn current_opcode(&self) -> Result<u16> {
        self.memory.read_word(self.regs.pc)
    }

    /// Description of the instruction PC points at, using current register
    /// values.
    pub fn describe_current(&self) -> Result<String> {
        let op = self.current_opcode()?;
        Ok(describe(op, &self.regs, self.timers.delay, self.quirks))
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn get_display(&self) -> &[bool; SCREEN_WIDTH * SCREEN_HEIGHT] {
        self.display.pixels()
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn index(&self) -> u16 {
        self.regs.i
    }

    pub fn stack(&self) -> &[u16] {
        self.stack.as_slice()
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn delay_timer(&self) -> u8 {
        self.timers.delay()
    }

    pub fn sound_timer(&self) -> u8 {
        self.timers.sound()
    }

    pub fn sound_active(&self) -> bool {
        self.timers.sound_active()
    }

    pub fn memory(&self) -> &[u8] {
        self.memory.as_slice()
    }
}
