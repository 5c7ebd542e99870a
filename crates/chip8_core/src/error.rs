use thiserror::Error;

/// Everything that can stop an instruction or reject a host input.
///
/// None of these are transient: they point at a malformed program or a
/// misbehaving host, so the core never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("read of {len} byte(s) at 0x{addr:04X} runs past the end of memory")]
    OutOfBoundsRead { addr: u16, len: usize },

    #[error("write of {len} byte(s) at 0x{addr:04X} touches the reserved interpreter area")]
    ReservedWrite { addr: u16, len: usize },

    #[error("call stack overflow")]
    StackOverflow,

    #[error("return with an empty call stack")]
    StackUnderflow,

    #[error("unknown opcode 0x{0:04X}")]
    UnknownOpcode(u16),

    #[error("invalid key 0x{0:X}")]
    InvalidKey(u8),

    #[error("program of {len} bytes does not fit in {capacity} bytes of program memory")]
    ProgramTooLarge { len: usize, capacity: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
