//! CHIP-8 interpreter core.
//!
//! The crate owns the machine state (memory, registers, call stack,
//! framebuffer, timers, keypad and RNG) and exposes a single-step
//! [`Emulator::step`] operation. Loading ROMs from disk, rendering, audio and
//! scheduling are left to the host.
mod config;
mod describe;
mod display;
mod emulator;
mod error;
mod keypad;
mod memory;
mod opcode;
mod registers;
mod stack;
mod timer;

pub use config::{Config, Quirks};
pub use describe::describe;
pub use display::Display;
pub use emulator::Emulator;
pub use error::{Error, Result};
pub use keypad::Keypad;
pub use memory::Memory;
pub use opcode::Instruction;
pub use registers::Registers;
pub use stack::CallStack;
pub use timer::Timers;

/// Framebuffer width in pixels.
pub const SCREEN_WIDTH: usize = 64;
/// Framebuffer height in pixels.
pub const SCREEN_HEIGHT: usize = 32;

pub const RAM_SIZE: usize = 4096;
pub const NUM_REGS: usize = 16;
pub const STACK_SIZE: usize = 16;
pub const NUM_KEYS: usize = 16;

/// Programs are loaded here; everything below is read-only to instructions.
pub const START_ADDRESS: u16 = 0x200;

/// Where the built-in hex digit glyphs live.
pub const FONTSET_ADDRESS: u16 = 0x050;
/// Bytes (rows) per hex digit glyph.
pub const FONT_GLYPH_HEIGHT: u16 = 5;
pub const FONTSET_SIZE: usize = 80;

pub const FONTSET: [u8; FONTSET_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
